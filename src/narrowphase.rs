use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrowphase primitive tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn intersect_rect_rect(a: &Rect, b: &Rect) -> Option<Rect> {
        a.intersection(b)
    }

    fn overlap_rect_rect(a: &Rect, b: &Rect) -> bool {
        a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
    }

    fn overlap_circle_rect(c: &Circle, r: &Rect) -> bool {
        // Nearest point of the box to the center must lie strictly inside
        let closest = r.closest_point(c.center);
        (closest - c.center).length_squared() < c.radius * c.radius
    }

    fn overlap_circle_circle(a: &Circle, b: &Circle) -> bool {
        let rsum = a.radius + b.radius;
        (a.center - b.center).length_squared() < rsum * rsum
    }

    fn overlap_point_rect(p: Vec2, r: &Rect) -> bool {
        r.contains(p)
    }

    fn overlap_point_circle(p: Vec2, c: &Circle) -> bool {
        (p - c.center).length_squared() <= c.radius * c.radius
    }
}

/// Half length of the chord cut from a circle of `radius` by a line at
/// `offset` from its center. Zero when the line misses the circle.
#[inline]
pub(crate) fn half_chord(radius: f32, offset: f32) -> f32 {
    (radius * radius - offset * offset).max(0.0).sqrt()
}

/// Distance from `v` to the closed interval `[lo, hi]` (zero inside).
#[inline]
pub(crate) fn interval_gap(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn test_overlap_rect_rect_basic() {
        let a = rect(5.0, 5.0, 55.0, 55.0);
        let b = rect(20.0, 10.0, 30.0, 20.0);
        assert!(Narrowphase::overlap_rect_rect(&a, &b));
        assert!(Narrowphase::overlap_rect_rect(&b, &a));
        let i = Narrowphase::intersect_rect_rect(&a, &b).unwrap();
        assert_eq!(i, b);
    }

    #[test]
    fn test_overlap_rect_rect_separated() {
        let a = rect(5.0, 5.0, 15.0, 55.0);
        let b = rect(20.0, 10.0, 30.0, 20.0);
        assert!(!Narrowphase::overlap_rect_rect(&a, &b));
        assert!(Narrowphase::intersect_rect_rect(&a, &b).is_none());
    }

    #[test]
    fn test_overlap_rect_rect_touching_edge() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 20.0, 10.0);
        assert!(!Narrowphase::overlap_rect_rect(&a, &b));
    }

    #[test]
    fn test_overlap_circle_rect() {
        let r = rect(-1.0, -1.0, 1.0, 1.0);
        assert!(Narrowphase::overlap_circle_rect(
            &Circle::new(Vec2::new(1.5, 0.0), 1.0),
            &r
        ));
        // Tangent to the right edge
        assert!(!Narrowphase::overlap_circle_rect(
            &Circle::new(Vec2::new(2.0, 0.0), 1.0),
            &r
        ));
        // Near a corner but outside it
        assert!(!Narrowphase::overlap_circle_rect(
            &Circle::new(Vec2::new(1.8, 1.8), 1.0),
            &r
        ));
        // Center inside the box
        assert!(Narrowphase::overlap_circle_rect(
            &Circle::new(Vec2::ZERO, 0.1),
            &r
        ));
    }

    #[test]
    fn test_overlap_circle_circle() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        assert!(Narrowphase::overlap_circle_circle(
            &a,
            &Circle::new(Vec2::new(1.0, 0.0), 1.0)
        ));
        assert!(!Narrowphase::overlap_circle_circle(
            &a,
            &Circle::new(Vec2::new(2.0, 0.0), 1.0)
        ));
    }

    #[test]
    fn test_overlap_points() {
        let r = rect(-1.0, -2.0, 1.0, 2.0);
        assert!(Narrowphase::overlap_point_rect(Vec2::new(1.0, 2.0), &r));
        assert!(!Narrowphase::overlap_point_rect(Vec2::new(1.1, 0.0), &r));
        let c = Circle::new(Vec2::new(1.0, -1.0), 2.0);
        assert!(Narrowphase::overlap_point_circle(Vec2::new(3.0, -1.0), &c));
        assert!(!Narrowphase::overlap_point_circle(Vec2::new(3.1, -1.0), &c));
    }

    #[test]
    fn test_half_chord_and_gap() {
        assert!((half_chord(5.0, 3.0) - 4.0).abs() < 1e-6);
        assert_eq!(half_chord(1.0, 2.0), 0.0);
        assert_eq!(interval_gap(5.0, 0.0, 10.0), 0.0);
        assert_eq!(interval_gap(-2.0, 0.0, 10.0), 2.0);
        assert_eq!(interval_gap(13.0, 0.0, 10.0), 3.0);
    }
}
