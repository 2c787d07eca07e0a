use glam::Vec2;

use crate::api::{DebugDraw, NarrowphaseApi};
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// Collider used for hit-testing, resolution and debug drawing.
///
/// The set of variants is closed: the resolver matches on every pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Box(Rect),
    Circle(Circle),
}

impl Shape {
    pub fn new_box(min: Vec2, max: Vec2) -> Self {
        Shape::Box(Rect::new(min, max))
    }

    pub fn new_centered_box(center: Vec2, size: Vec2) -> Self {
        Shape::Box(Rect::from_center(center, size))
    }

    pub fn new_circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle(Circle::new(center, radius))
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Box(r) => r.center(),
            Shape::Circle(c) => c.center,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Box(r) => *r,
            Shape::Circle(c) => c.bounding_rect(),
        }
    }

    /// Translated copy.
    pub fn moved(&self, delta: Vec2) -> Shape {
        match self {
            Shape::Box(r) => Shape::Box(r.moved(delta)),
            Shape::Circle(c) => Shape::Circle(c.moved(delta)),
        }
    }

    /// Re-center the shape on `position`, keeping its size.
    pub fn align(&mut self, position: Vec2) {
        match self {
            Shape::Box(r) => *r = r.centered_on(position),
            Shape::Circle(c) => c.center = position,
        }
    }

    /// Aligned copy.
    pub fn aligned(mut self, position: Vec2) -> Shape {
        self.align(position);
        self
    }

    /// True when the two shapes overlap (touching does not count).
    pub fn collides(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Box(a), Shape::Box(b)) => Narrowphase::overlap_rect_rect(a, b),
            (Shape::Box(r), Shape::Circle(c)) | (Shape::Circle(c), Shape::Box(r)) => {
                Narrowphase::overlap_circle_rect(c, r)
            }
            (Shape::Circle(a), Shape::Circle(b)) => Narrowphase::overlap_circle_circle(a, b),
        }
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Shape::Box(r) => Narrowphase::overlap_point_rect(p, r),
            Shape::Circle(c) => Narrowphase::overlap_point_circle(p, c),
        }
    }

    /// Push the outline of the shape to a debug surface.
    pub fn debug_draw(&self, surface: &mut impl DebugDraw, color: Rgba) {
        match self {
            Shape::Box(r) => surface.rect(*r, color),
            Shape::Circle(c) => surface.circle(c.center, c.radius, color),
        }
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Box(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
