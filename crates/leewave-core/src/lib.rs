//! **leewave-core**: grid geometry shared by the *leewave* crates.
//!
//! This crate provides the coordinate type ([`Point`]), grid bounds
//! ([`Range`]), the adjacency table used by the search ([`Offsets`]) and the
//! king-move metric.

pub mod distance;
pub mod geom;
pub mod offsets;

pub use distance::chebyshev;
pub use geom::{Point, Range, RangeIter};
pub use offsets::Offsets;
