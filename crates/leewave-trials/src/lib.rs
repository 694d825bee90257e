//! Random trials over [`leewave_paths::Field`] and ways to look at them.
//!
//! [`TrialGen`] places a start, a finish and a random number of walls, then
//! runs the search. [`render`] turns a field into plain text and [`term`]
//! writes the same picture with terminal colours.

pub mod config;
pub mod render;
pub mod term;
pub mod trial;

pub use config::TrialConfig;
pub use render::{Glyph, glyph, render};
pub use trial::{Trial, TrialGen};
