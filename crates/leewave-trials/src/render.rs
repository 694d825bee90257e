//! Plain-text pictures of a field.

use leewave_core::Point;
use leewave_paths::Field;

/// What a single cell looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Start,
    Finish,
    Wall,
    Path,
    Blank,
}

impl Glyph {
    pub const fn ch(self) -> char {
        match self {
            Glyph::Start => 'S',
            Glyph::Finish => 'F',
            Glyph::Wall => '#',
            Glyph::Path => '^',
            Glyph::Blank => ' ',
        }
    }
}

/// Classify `p`. Start and finish win over any stored tag, so a marked
/// route still shows its endpoints.
pub fn glyph(field: &Field, p: Point) -> Glyph {
    if field.is_start(p) {
        Glyph::Start
    } else if field.is_finish(p) {
        Glyph::Finish
    } else if field.is_wall(p) {
        Glyph::Wall
    } else if field.is_path(p) {
        Glyph::Path
    } else {
        Glyph::Blank
    }
}

/// One line per row, every glyph followed by a space.
pub fn render(field: &Field) -> String {
    let range = field.range();
    let mut out = String::with_capacity(range.len() * 2 + range.rows() as usize);
    for p in range {
        out.push(glyph(field, p).ch());
        out.push(' ');
        if p.col == range.cols() - 1 {
            out.push('\n');
        }
    }
    out
}
