use leewave_core::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Start and finish are both {0}")]
    SameEndpoints(Point),
    #[error("Point {0} is outside the {1}x{2} field")]
    OutOfBounds(Point, i32, i32),
    #[error("Field must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: i32, cols: i32 },
    #[error("Offset table must be non-empty, symmetric, free of duplicates and of (0, 0)")]
    InvalidOffsets,
    #[error("Distance labels broken at {0}, no predecessor found")]
    BrokenTrail(Point),
}

pub type Result<T> = std::result::Result<T, FieldError>;
