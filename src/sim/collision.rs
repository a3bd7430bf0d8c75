//! Collision detection and resolution for axis-aligned rectangles
//!
//! Two pure operations: the overlap test the whole engine gates on, and the
//! minimum-penetration-axis rule that decides which face of a brick the ball
//! bounced off.

use super::rect::Rect;

/// The face of the static rectangle the moving rectangle entered through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
    Top,
    Bottom,
}

/// Result of a minimum-penetration query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub axis: Axis,
    pub amount: f32,
}

/// Check whether two rectangles overlap.
///
/// Touching edges do not count as overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.x || b.right() <= a.x || a.bottom() <= b.y || b.bottom() <= a.y)
}

/// Compute the shallowest axis through which `moving` penetrates `fixed`.
///
/// Callers must only invoke this on overlapping rectangles. Ties are broken
/// in the fixed order left, right, top, bottom; replay determinism depends
/// on this ordering, so it must not change.
pub fn min_penetration_axis(moving: &Rect, fixed: &Rect) -> Penetration {
    let candidates = [
        (Axis::Left, moving.right() - fixed.x),
        (Axis::Right, fixed.right() - moving.x),
        (Axis::Top, moving.bottom() - fixed.y),
        (Axis::Bottom, fixed.bottom() - moving.y),
    ];

    let mut best = candidates[0];
    for &c in &candidates[1..] {
        if c.1 < best.1 {
            best = c;
        }
    }
    Penetration {
        axis: best.0,
        amount: best.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn test_overlap_basic() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        let c = rect(20.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Exactly flush on the right edge
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        // Flush on the bottom edge
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_min_axis_left() {
        // Ball poking 2px into the brick's left face, deep on every other axis
        let brick = rect(100.0, 100.0, 80.0, 28.0);
        let ball = rect(88.0, 105.0, 14.0, 14.0);
        let p = min_penetration_axis(&ball, &brick);
        assert_eq!(p.axis, Axis::Left);
        assert!((p.amount - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_min_axis_top() {
        let brick = rect(100.0, 100.0, 80.0, 28.0);
        let ball = rect(130.0, 89.0, 14.0, 14.0);
        let p = min_penetration_axis(&ball, &brick);
        assert_eq!(p.axis, Axis::Top);
        assert!((p.amount - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_tie_break_prefers_left_over_top() {
        // Ball overlapping the brick's top-left corner with identical depth
        // on the Left and Top candidates: the fixed priority picks Left.
        let brick = rect(100.0, 100.0, 80.0, 28.0);
        let ball = rect(90.0, 90.0, 14.0, 14.0);
        let p = min_penetration_axis(&ball, &brick);
        assert!((ball.right() - brick.x - (ball.bottom() - brick.y)).abs() < f32::EPSILON);
        assert_eq!(p.axis, Axis::Left);
    }

    #[test]
    fn test_tie_break_prefers_top_over_bottom() {
        // Thin ball fully spanning the brick vertically, centered: Top and
        // Bottom candidates equal and minimal, Top wins by enumeration order.
        let brick = rect(100.0, 100.0, 80.0, 28.0);
        let ball = rect(139.0, 99.0, 2.0, 30.0);
        let p = min_penetration_axis(&ball, &brick);
        assert_eq!(p.axis, Axis::Top);
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetry(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..300.0, ah in 0.1f32..300.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..300.0, bh in 0.1f32..300.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
