//! Grid metrics.

use crate::geom::Point;

/// Chebyshev (L∞) distance between two points.
///
/// This is the number of king moves between `a` and `b` on an open grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}
