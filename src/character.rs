use std::io::Read;

use glam::Vec2;

use crate::animation::Animation;
use crate::api::{DebugDraw, SpriteTarget};
use crate::bounds::ShapeSet;
use crate::error::{Error, Result};
use crate::kinematics::{Kinematics, KinematicsParams};
use crate::resolve::Solution;
use crate::shape::Shape;
use crate::types::*;

/// A solid, animated body: sprite playback, movement and one collision
/// shape per animation frame.
#[derive(Clone, Debug)]
pub struct Character {
    animation: Animation,
    kinematics: Kinematics,
    bounds: ShapeSet<String>,
}

impl Character {
    pub fn new(animation: Animation, kinematics: Kinematics, bounds: ShapeSet<String>) -> Self {
        Self {
            animation,
            kinematics,
            bounds,
        }
    }

    /// Load from one document carrying both `anims` and `bounds`.
    pub fn from_reader<R: Read>(
        mut reader: R,
        position: Vec2,
        params: KinematicsParams,
    ) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let animation = Animation::from_reader(buf.as_slice(), position)?;
        let bounds = ShapeSet::from_slice(&buf)?;
        Ok(Self::new(animation, Kinematics::new(params), bounds))
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn kinematics_mut(&mut self) -> &mut Kinematics {
        &mut self.kinematics
    }

    pub fn bounds(&self) -> &ShapeSet<String> {
        &self.bounds
    }

    pub fn position(&self) -> Vec2 {
        self.animation.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.animation.position = position;
    }

    /// Shape for the frame on screen, centered on the character.
    pub fn bounding_shape(&self) -> Result<Shape> {
        let id = self.animation.current().unwrap_or_default();
        let frame = self.animation.current_frame_number();
        let shapes = self
            .bounds
            .get(id)
            .ok_or_else(|| Error::MissingAnimation(id.to_owned()))?;
        let shape = shapes.get(frame).ok_or_else(|| Error::MissingFrame {
            id: id.to_owned(),
            frame,
        })?;
        Ok(shape.aligned(self.position()))
    }

    /// True when moving by `delta` keeps the bounding shape strictly inside
    /// `limits` along `axis`.
    pub fn in_bounds(&self, axis: Axis, delta: Vec2, limits: &Rect) -> Result<bool> {
        let r = self.bounding_shape()?.bounding_rect().moved(delta);
        let i = axis.index();
        Ok(r.min[i] > limits.min[i] && r.max[i] < limits.max[i])
    }

    /// Speed up along `axis`. Horizontal movement also turns the sprite.
    pub fn accelerate(&mut self, axis: Axis, dir: Direction, dt: f32) {
        if axis == Axis::X {
            self.animation.dir = dir;
        }
        self.kinematics.accelerate(axis, dir, dt);
    }

    pub fn decelerate(&mut self, axis: Axis, dt: f32) {
        self.kinematics.decelerate(axis, dt);
    }

    pub fn set_velocity(&mut self, axis: Axis, value: f32) {
        self.kinematics.set_velocity(axis, value);
    }

    /// Run one tick of movement against `obstacles`.
    ///
    /// The character ends up at the corrected position and loses its
    /// velocity on every blocked axis before this returns.
    pub fn step<'a, I>(&mut self, dt: f32, obstacles: I) -> Result<Solution<'a>>
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        // Gravity only lands once the shape is known
        let shape = self.bounding_shape()?;
        let delta = self.kinematics.displacement(dt);
        let sol = shape.resolve(delta, obstacles);
        for axis in [Axis::X, Axis::Y] {
            if sol.axis.blocks(axis) {
                self.kinematics.set_velocity(axis, 0.0);
            }
        }
        self.animation.position += sol.apply(delta);
        Ok(sol)
    }

    /// Draw the current frame and advance the animation.
    pub fn draw(&mut self, target: &mut impl SpriteTarget, dt: f32) {
        self.animation.draw(target, dt);
    }

    pub fn debug_draw(&self, surface: &mut impl DebugDraw, color: Rgba) -> Result<()> {
        self.bounding_shape()?.debug_draw(surface, color);
        Ok(())
    }
}
