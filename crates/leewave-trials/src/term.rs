//! Coloured terminal output via crossterm.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use leewave_core::Point;
use leewave_paths::Field;

use crate::render::{Glyph, glyph};

/// Foreground colour for a glyph.
fn color(g: Glyph) -> Color {
    match g {
        Glyph::Start => Color::Rgb { r: 80, g: 220, b: 80 },
        Glyph::Finish => Color::Rgb { r: 255, g: 90, b: 70 },
        Glyph::Wall => Color::Rgb { r: 110, g: 110, b: 140 },
        Glyph::Path => Color::Rgb { r: 50, g: 180, b: 255 },
        Glyph::Blank => Color::Reset,
    }
}

/// Write the same picture as [`render`](crate::render) with colours.
pub fn write_field(out: &mut impl Write, field: &Field) -> std::io::Result<()> {
    let range = field.range();
    for row in 0..range.rows() {
        let mut last = None;
        for col in 0..range.cols() {
            let g = glyph(field, Point::new(row, col));
            if last != Some(g) {
                queue!(out, SetForegroundColor(color(g)))?;
                last = Some(g);
            }
            queue!(out, Print(g.ch()), Print(' '))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}
