//! The [`CellState`] type: what a single grid position holds.

/// State of one grid cell.
///
/// Distances and markers live in separate variants, so no distance value can
/// ever be mistaken for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Passable and not yet reached by a search.
    #[default]
    Empty,
    /// Impassable.
    Wall,
    /// The origin; distance 0.
    Start,
    /// On a reconstructed route.
    Path,
    /// Reached by the search after this many steps (always `>= 1`).
    Distance(u32),
}

impl CellState {
    /// Distance label a search reads from this cell: 0 for the start, `d` for
    /// a reached cell, `None` otherwise.
    #[inline]
    pub const fn distance(self) -> Option<u32> {
        match self {
            CellState::Start => Some(0),
            CellState::Distance(d) => Some(d),
            _ => None,
        }
    }

    /// Left behind by a search or route marking.
    #[inline]
    pub const fn is_search_label(self) -> bool {
        matches!(self, CellState::Distance(_) | CellState::Path)
    }
}
