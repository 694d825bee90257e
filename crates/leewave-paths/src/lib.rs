//! Shortest paths on a walled grid by breadth-first wave propagation.
//!
//! A [`Field`] is a fixed-size grid with one start cell, one finish cell and
//! any number of walls. The search labels every reached cell with its step
//! count from the start until the finish is discovered; the route is then
//! recovered by walking strictly decreasing labels back to the start.
//!
//! ```
//! use leewave_core::Point;
//! use leewave_paths::{Field, FieldConfig};
//!
//! let config = FieldConfig::new(5, 5);
//! let mut field = Field::with_config(config, Point::new(0, 0), Point::new(0, 4))?;
//! for row in 0..4 {
//!     assert!(field.set_wall(Point::new(row, 2)));
//! }
//! let route = field.get_path().expect("gap at row 4");
//! assert_eq!(route.len() - 1, 8);
//! # Ok::<(), leewave_paths::FieldError>(())
//! ```
//!
//! # Lifecycle
//!
//! construct → place walls → [`Field::find_finish`] →
//! [`Field::way_to_start`] → [`Field::mark_path`], or all three search steps
//! at once through [`Field::get_path`].

mod bfs;
mod cell;
mod config;
mod error;
mod field;
mod trace;

pub use bfs::Found;
pub use cell::CellState;
pub use config::FieldConfig;
pub use error::{FieldError, Result};
pub use field::Field;
