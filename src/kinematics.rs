use glam::Vec2;
use serde::Deserialize;

use crate::types::{Axis, Direction};

/// Tuning values for a [`Kinematics`] body.
///
/// Usually deserialized from a game's config file. Missing fields fall back
/// to [`KinematicsParams::default`].
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct KinematicsParams {
    /// Speed cap per axis, in units per second. Only the magnitude is used.
    pub max_velocity: Vec2,
    /// Speed gained (or shed when decelerating) per second, per axis.
    pub acceleration: Vec2,
    /// Downward pull subtracted from the Y velocity every displacement.
    pub gravity: f32,
}

impl Default for KinematicsParams {
    fn default() -> Self {
        Self {
            max_velocity: Vec2::new(50.0, 100.0),
            acceleration: Vec2::new(75.0, 0.0),
            gravity: 112.0,
        }
    }
}

/// Per-axis velocity integrator.
///
/// Negative velocity moves left or down, positive right or up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Kinematics {
    velocity: Vec2,
    params: KinematicsParams,
}

impl Kinematics {
    pub fn new(params: KinematicsParams) -> Self {
        Self {
            velocity: Vec2::ZERO,
            params,
        }
    }

    /// Gain speed toward `dir`. Past the cap the velocity snaps to the cap in
    /// the direction of travel.
    pub fn accelerate(&mut self, axis: Axis, dir: Direction, dt: f32) {
        let i = axis.index();
        let max = self.params.max_velocity[i];
        let v = &mut self.velocity[i];
        *v += dir.sign() * self.params.acceleration[i] * dt;
        if v.abs() > max.abs() {
            *v = max * dir.sign();
        }
    }

    /// Shed speed toward zero without overshooting it.
    pub fn decelerate(&mut self, axis: Axis, dt: f32) {
        let i = axis.index();
        let v = &mut self.velocity[i];
        let step = v.abs().min(self.params.acceleration[i] * dt);
        if *v > 0.0 {
            *v -= step;
        } else if *v < 0.0 {
            *v += step;
        }
    }

    /// Overwrite the velocity on one axis, capped in magnitude and keeping
    /// the sign of `value`.
    pub fn set_velocity(&mut self, axis: Axis, value: f32) {
        let i = axis.index();
        let max = self.params.max_velocity[i].abs();
        self.velocity[i] = if value.abs() < max {
            value
        } else {
            max.copysign(value)
        };
    }

    /// Apply gravity for `dt`, then return how far the body travels in `dt`.
    pub fn displacement(&mut self, dt: f32) -> Vec2 {
        self.velocity.y -= self.params.gravity * dt;
        self.velocity * dt
    }

    #[inline]
    pub fn velocity(&self, axis: Axis) -> f32 {
        self.velocity[axis.index()]
    }

    #[inline]
    pub fn velocity_vec(&self) -> Vec2 {
        self.velocity
    }

    pub fn params(&self) -> &KinematicsParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut KinematicsParams {
        &mut self.params
    }
}
