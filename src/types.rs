use glam::Vec2;
use serde::Deserialize;

/// Movement component. Indexes into a `Vec2` (X = 0, Y = 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Signed unit direction along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    pub const LEFT: Direction = Direction::Negative;
    pub const RIGHT: Direction = Direction::Positive;
    pub const UP: Direction = Direction::Positive;
    pub const DOWN: Direction = Direction::Negative;

    /// `-1.0` or `1.0`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }
}

/// Which movement component a resolved contact blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CollisionAxis {
    #[default]
    None,
    X,
    Y,
    Both,
}

impl CollisionAxis {
    pub fn is_blocked(self) -> bool {
        self != CollisionAxis::None
    }

    /// True when the contact blocks the given movement component.
    pub fn blocks(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (CollisionAxis::Both, _) | (CollisionAxis::X, Axis::X) | (CollisionAxis::Y, Axis::Y)
        )
    }
}

/// Axis-aligned rectangle. Y grows upward, so `top` is `max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Builds a rectangle from two opposite corners, in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn moved(&self, delta: Vec2) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Same size, centered on `center`.
    pub fn centered_on(&self, center: Vec2) -> Rect {
        self.moved(center - self.center())
    }

    /// Overlapping region, or `None` when the rectangles only touch or are apart.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x < max.x && min.y < max.y {
            Some(Rect { min, max })
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Point of the rectangle nearest to `p` (p itself when inside).
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let clamp = |v: f32, lo: f32, hi: f32| v.max(lo).min(hi);
        Vec2::new(
            clamp(p.x, self.min.x, self.max.x),
            clamp(p.y, self.min.y, self.max.y),
        )
    }
}

/// Circle with a non-negative radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn moved(&self, delta: Vec2) -> Circle {
        Circle {
            center: self.center + delta,
            radius: self.radius,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center(self.center, Vec2::splat(self.radius * 2.0))
    }
}

/// Linear RGBA color in `[0, 1]`, used for debug outlines and fades.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convenience for 8-bit channel values.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let c = |v: u8| v as f32 / 255.0;
        Self::new(c(r), c(g), c(b), c(a))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_new_normalizes_corners() {
        let r = Rect::new(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));
        assert_eq!(r.min, Vec2::new(4.0, 2.0));
        assert_eq!(r.max, Vec2::new(10.0, 8.0));
        assert_eq!(r.left(), 4.0);
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.top(), 8.0);
        assert_eq!(r.bottom(), 2.0);
        assert_eq!(r.center(), Vec2::new(7.0, 5.0));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 7.0), Vec2::new(20.0, 20.0));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.min, Vec2::new(5.0, 7.0));
        assert_eq!(i.max, Vec2::new(10.0, 10.0));
        // Sharing an edge is not an overlap
        let c = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.intersection(&c).is_none());
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_centered_on() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
        let m = r.centered_on(Vec2::new(10.0, 10.0));
        assert_eq!(m.min, Vec2::new(8.0, 9.0));
        assert_eq!(m.size(), r.size());
    }

    #[test]
    fn test_collision_axis_blocks() {
        assert!(CollisionAxis::Both.blocks(Axis::X));
        assert!(CollisionAxis::Both.blocks(Axis::Y));
        assert!(CollisionAxis::X.blocks(Axis::X));
        assert!(!CollisionAxis::X.blocks(Axis::Y));
        assert!(!CollisionAxis::None.blocks(Axis::Y));
        assert!(!CollisionAxis::None.is_blocked());
    }

    #[test]
    fn test_circle_radius_non_negative() {
        let c = Circle::new(Vec2::ZERO, -3.0);
        assert_eq!(c.radius, 3.0);
        assert_eq!(c.bounding_rect().size(), Vec2::splat(6.0));
    }
}
