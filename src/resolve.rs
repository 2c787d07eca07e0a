//! Swept-movement resolution against an explicit obstacle list.
//!
//! A mover proposes a displacement for this tick. The moved shape is tested
//! against each obstacle in the order supplied by the caller, and the first
//! obstacle it would overlap decides the outcome: which axis is blocked and
//! how far the mover may travel along it from where it stands now. Obstacles
//! after the first blocking one are not examined, so callers that care about
//! priority (nearest wall first, floor before decoration) must order the list.
//!
//! Box pairs pick the axis with the shallower overlap of the moved box. A box
//! and a circle pick the axis the moved shapes penetrate least along, and two
//! circles pick the axis of the larger center offset. Either way the mover
//! stops exactly tangent to the obstacle, and a tie blocks both axes.

use glam::Vec2;
use tracing::trace;

use crate::api::NarrowphaseApi;
use crate::narrowphase::{half_chord, interval_gap, Narrowphase};
use crate::shape::Shape;
use crate::types::*;

/// Outcome of [`Shape::resolve`].
///
/// `distance` only carries the blocked component(s). The free component of
/// the proposed displacement still applies; [`Solution::apply`] combines both.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Solution<'a> {
    pub axis: CollisionAxis,
    /// The obstacle that blocked the move.
    pub other: Option<&'a Shape>,
    /// Allowed travel along the blocked axis, from the pre-move position.
    pub distance: Vec2,
}

impl<'a> Solution<'a> {
    pub fn is_blocked(&self) -> bool {
        self.axis.is_blocked()
    }

    /// Displacement to actually apply this tick given the proposed `delta`.
    pub fn apply(&self, delta: Vec2) -> Vec2 {
        match self.axis {
            CollisionAxis::None => delta,
            CollisionAxis::X => Vec2::new(self.distance.x, delta.y),
            CollisionAxis::Y => Vec2::new(delta.x, self.distance.y),
            CollisionAxis::Both => self.distance,
        }
    }
}

impl Shape {
    /// Check whether moving by `delta` runs into any of `others`.
    ///
    /// Returns the first blocking obstacle in iteration order, or a solution
    /// with [`CollisionAxis::None`] when the whole move is free.
    pub fn resolve<'a, I>(&self, delta: Vec2, others: I) -> Solution<'a>
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let moved = self.moved(delta);
        for other in others {
            // Always judge the post-move shape
            if !moved.collides(other) {
                continue;
            }
            let (axis, distance) = match (self, &moved, other) {
                (Shape::Box(a), Shape::Box(m), Shape::Box(b)) => box_against_box(a, m, b),
                (Shape::Box(a), Shape::Box(m), Shape::Circle(c)) => box_against_circle(a, m, c),
                (Shape::Circle(a), Shape::Circle(m), Shape::Box(b)) => {
                    circle_against_box(a, m, b)
                }
                (Shape::Circle(a), Shape::Circle(m), Shape::Circle(c)) => {
                    circle_against_circle(a, m, c)
                }
                // `moved` keeps the variant of `self`
                _ => continue,
            };
            if axis.is_blocked() {
                trace!(?axis, ?distance, "move blocked");
                return Solution {
                    axis,
                    other: Some(other),
                    distance,
                };
            }
        }
        Solution::default()
    }
}

fn box_against_box(a: &Rect, moved: &Rect, other: &Rect) -> (CollisionAxis, Vec2) {
    let Some(overlap) = Narrowphase::intersect_rect_rect(moved, other) else {
        return (CollisionAxis::None, Vec2::ZERO);
    };
    let d = other.center() - moved.center();

    if overlap.width().abs() <= overlap.height().abs() {
        // Obstacle on the left when d.x < 0: stop the left edge at its right edge
        let x = if d.x < 0.0 {
            other.right() - a.left()
        } else {
            -(a.right() - other.left())
        };
        (CollisionAxis::X, Vec2::new(x, 0.0))
    } else {
        let y = if d.y > 0.0 {
            other.bottom() - a.top()
        } else {
            -(a.bottom() - other.top())
        };
        (CollisionAxis::Y, Vec2::new(0.0, y))
    }
}

fn box_against_circle(a: &Rect, moved: &Rect, c: &Circle) -> (CollisionAxis, Vec2) {
    let d = c.center - moved.center();
    let axis = axis_by_penetration(moved, c);
    let mut distance = Vec2::ZERO;

    if axis.blocks(Axis::X) {
        let chord = half_chord(c.radius, interval_gap(c.center.y, moved.bottom(), moved.top()));
        distance.x = if d.x < 0.0 {
            (c.center.x + chord) - a.left()
        } else {
            (c.center.x - chord) - a.right()
        };
    }
    if axis.blocks(Axis::Y) {
        let chord = half_chord(c.radius, interval_gap(c.center.x, moved.left(), moved.right()));
        distance.y = if d.y > 0.0 {
            (c.center.y - chord) - a.top()
        } else {
            (c.center.y + chord) - a.bottom()
        };
    }
    (axis, distance)
}

fn circle_against_box(a: &Circle, moved: &Circle, r: &Rect) -> (CollisionAxis, Vec2) {
    let d = r.center() - moved.center;
    let axis = axis_by_penetration(r, moved);
    let mut distance = Vec2::ZERO;

    if axis.blocks(Axis::X) {
        let chord = half_chord(a.radius, interval_gap(moved.center.y, r.bottom(), r.top()));
        distance.x = if d.x < 0.0 {
            (r.right() + chord) - a.center.x
        } else {
            (r.left() - chord) - a.center.x
        };
    }
    if axis.blocks(Axis::Y) {
        let chord = half_chord(a.radius, interval_gap(moved.center.x, r.left(), r.right()));
        distance.y = if d.y > 0.0 {
            (r.bottom() - chord) - a.center.y
        } else {
            (r.top() + chord) - a.center.y
        };
    }
    (axis, distance)
}

fn circle_against_circle(a: &Circle, moved: &Circle, c: &Circle) -> (CollisionAxis, Vec2) {
    let d = c.center - moved.center;
    let axis = axis_by_offset(d);
    let reach = a.radius + c.radius;
    let mut distance = Vec2::ZERO;

    if axis.blocks(Axis::X) {
        let s = half_chord(reach, d.y);
        distance.x = if d.x < 0.0 {
            (c.center.x + s) - a.center.x
        } else {
            (c.center.x - s) - a.center.x
        };
    }
    if axis.blocks(Axis::Y) {
        let s = half_chord(reach, d.x);
        distance.y = if d.y > 0.0 {
            (c.center.y - s) - a.center.y
        } else {
            (c.center.y + s) - a.center.y
        };
    }
    (axis, distance)
}

/// How far `[lo, hi]` has to travel, either way, to stop overlapping `[olo, ohi]`.
#[inline]
fn push_out(lo: f32, hi: f32, olo: f32, ohi: f32) -> f32 {
    (hi - olo).min(ohi - lo)
}

/// Block the axis along which the box and the circle are least entangled.
fn axis_by_penetration(r: &Rect, c: &Circle) -> CollisionAxis {
    let px = push_out(r.left(), r.right(), c.center.x - c.radius, c.center.x + c.radius);
    let py = push_out(r.bottom(), r.top(), c.center.y - c.radius, c.center.y + c.radius);
    pick_axis(px, py)
}

fn axis_by_offset(d: Vec2) -> CollisionAxis {
    // Larger offset means the contact normal leans toward that axis
    pick_axis(d.y.abs(), d.x.abs())
}

/// X when `x_cost` is smaller, Y when `y_cost` is, both on a tie.
fn pick_axis(x_cost: f32, y_cost: f32) -> CollisionAxis {
    if x_cost < y_cost {
        CollisionAxis::X
    } else if x_cost > y_cost {
        CollisionAxis::Y
    } else {
        CollisionAxis::Both
    }
}
