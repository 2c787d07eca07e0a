use glam::Vec2;

use crate::types::*;

/// Primitive overlap tests shared by `Shape::collides` and the resolver.
///
/// Every test is strict: shapes that merely touch do not overlap, so a body
/// resting exactly on a floor is free to slide along it.
pub trait NarrowphaseApi {
    // Intersections --------------------------------------------------------

    fn intersect_rect_rect(a: &Rect, b: &Rect) -> Option<Rect>;

    // Overlaps --------------------------------------------------------------

    fn overlap_rect_rect(a: &Rect, b: &Rect) -> bool;
    fn overlap_circle_rect(c: &Circle, r: &Rect) -> bool;
    fn overlap_circle_circle(a: &Circle, b: &Circle) -> bool;
    fn overlap_point_rect(p: Vec2, r: &Rect) -> bool;
    fn overlap_point_circle(p: Vec2, c: &Circle) -> bool;
}

/// Immediate-mode debug drawing surface supplied by the rendering library.
pub trait DebugDraw {
    /// Outline of an axis-aligned rectangle.
    fn rect(&mut self, rect: Rect, color: Rgba);
    /// Outline of a circle.
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Solid rectangle, used by full-screen fades.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
}

/// Sprite drawing target supplied by the rendering library.
///
/// Paths are the ones found in animation and level files; decoding and
/// caching the images is up to the implementor.
pub trait SpriteTarget {
    /// Draw the `frame` region of `sheet` centered at `position`.
    /// `flip_x` mirrors the frame horizontally (sprite facing left).
    fn draw_frame(&mut self, sheet: &str, frame: Rect, position: Vec2, flip_x: bool);
    /// Draw a whole image centered at `position`.
    fn draw_image(&mut self, path: &str, position: Vec2);
}
