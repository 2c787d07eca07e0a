//! Timer-driven visual effects.

use crate::api::DebugDraw;
use crate::types::{Rect, Rgba};

/// Toggles visibility every `frequency` seconds. Starts visible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blinking {
    pub frequency: f32,
    elapsed: f32,
    visible: bool,
}

impl Blinking {
    pub fn new(frequency: f32) -> Self {
        Self {
            frequency,
            elapsed: 0.0,
            visible: true,
        }
    }

    /// Advance the timer and return whether the target should be shown.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.frequency {
            self.visible = !self.visible;
            self.elapsed = 0.0;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the timer and call `draw` only while visible.
    pub fn draw(&mut self, dt: f32, draw: impl FnOnce()) {
        if self.update(dt) {
            draw();
        }
    }
}

/// Gradually covers an area with a solid color.
///
/// Alpha starts at zero and grows by `dt / duration` each time more than
/// `duration / 1000` seconds have passed since the last growth.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fade {
    color: Rgba,
    duration: f32,
    step: f32,
    elapsed: f32,
    total: f32,
}

impl Fade {
    pub fn new(color: Rgba, duration: f32) -> Self {
        Self {
            color: color.with_alpha(0.0),
            duration,
            step: duration / 1000.0,
            elapsed: 0.0,
            total: 0.0,
        }
    }

    /// Overlay color at the current point of the fade.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Advance the fade. Returns `true` once the whole duration has passed.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.total += dt;
        if self.total > self.duration {
            return true;
        }
        if self.elapsed > self.step {
            self.elapsed = 0.0;
            self.color.a = (self.color.a + dt / self.duration).min(1.0);
        }
        false
    }

    /// Advance and paint the overlay over `area` while still running.
    pub fn draw(&mut self, surface: &mut impl DebugDraw, area: Rect, dt: f32) -> bool {
        let done = self.update(dt);
        if !done {
            surface.fill_rect(area, self.color);
        }
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::tests::Recorder;
    use glam::Vec2;

    #[test]
    fn test_blinking_toggles() {
        let mut b = Blinking::new(0.5);
        assert!(b.update(0.3));
        assert!(!b.update(0.3));
        assert!(!b.update(0.3));
        assert!(b.update(0.3));
    }

    #[test]
    fn test_blinking_draw_only_when_visible() {
        let mut b = Blinking::new(0.1);
        let mut drawn = 0;
        for _ in 0..4 {
            b.draw(0.15, || drawn += 1);
        }
        // hidden, shown, hidden, shown
        assert_eq!(drawn, 2);
        assert!(b.is_visible());
    }

    #[test]
    fn test_fade_grows_alpha_until_done() {
        let area = Rect::new(Vec2::ZERO, Vec2::new(320.0, 180.0));
        let mut fade = Fade::new(Rgba::new(0.0, 0.0, 0.0, 1.0), 1.0);
        assert_eq!(fade.color().a, 0.0);

        let mut rec = Recorder::default();
        let mut frames = 0;
        while !fade.draw(&mut rec, area, 0.25) {
            frames += 1;
        }
        assert_eq!(frames, 4);
        assert_eq!(rec.fills.len(), 4);
        assert!((rec.fills[3].1.a - 1.0).abs() < 1e-6);
        assert!(rec.fills[0].1.a < rec.fills[1].1.a);
    }
}
