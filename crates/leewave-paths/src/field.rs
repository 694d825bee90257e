//! The [`Field`] type: grid storage, wall placement and cell queries.

use leewave_core::{Offsets, Point, Range};

use crate::cell::CellState;
use crate::config::FieldConfig;
use crate::error::{FieldError, Result};

/// A fixed-size grid with a start, a finish and walls.
///
/// Every in-range point holds exactly one [`CellState`]. The start cell is
/// always `Start`. The finish is never tagged by wall placement; it is
/// recognised by comparing against the stored finish point.
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) range: Range,
    pub(crate) cells: Vec<CellState>,
    pub(crate) offsets: Offsets,
    pub(crate) start: Point,
    pub(crate) finish: Point,
    // Set once a search has written labels into `cells`.
    pub(crate) searched: bool,
}

impl Field {
    /// Create a field with the default configuration (27 × 59, king moves).
    pub fn new(start: Point, finish: Point) -> Result<Self> {
        Self::with_config(FieldConfig::default(), start, finish)
    }

    /// Create an all-empty field and mark `start`.
    pub fn with_config(config: FieldConfig, start: Point, finish: Point) -> Result<Self> {
        let FieldConfig { rows, cols, offsets } = config;
        if rows <= 0 || cols <= 0 {
            return Err(FieldError::EmptyGrid { rows, cols });
        }
        if !offsets.is_valid() {
            return Err(FieldError::InvalidOffsets);
        }
        let range = Range::with_size(rows, cols);
        for p in [start, finish] {
            if !range.contains(p) {
                return Err(FieldError::OutOfBounds(p, rows, cols));
            }
        }
        if start == finish {
            return Err(FieldError::SameEndpoints(start));
        }

        let mut field = Self {
            range,
            cells: vec![CellState::Empty; range.len()],
            offsets,
            start,
            finish,
            searched: false,
        };
        field.set(start, CellState::Start);
        log::debug!("new {rows}x{cols} field, start {start}, finish {finish}");
        Ok(field)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.range.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.range.cols()
    }

    #[inline]
    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// State of the cell at `p`, or `None` if `p` is off the field.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<CellState> {
        self.range.index(p).map(|i| self.cells[i])
    }

    /// Distance label at `p`: 0 for the start, the step count for a cell the
    /// search reached, `None` for anything else or off the field.
    #[inline]
    pub fn value(&self, p: Point) -> Option<u32> {
        self.cell(p).and_then(CellState::distance)
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------
    //
    // Predicates that read storage answer `false` for off-field points.

    #[inline]
    pub fn is_on_grid(&self, p: Point) -> bool {
        self.range.contains(p)
    }

    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        p == self.start
    }

    #[inline]
    pub fn is_finish(&self, p: Point) -> bool {
        p == self.finish
    }

    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.cell(p) == Some(CellState::Wall)
    }

    #[inline]
    pub fn is_path(&self, p: Point) -> bool {
        self.cell(p) == Some(CellState::Path)
    }

    #[inline]
    pub fn is_unvisited(&self, p: Point) -> bool {
        self.cell(p) == Some(CellState::Empty)
    }

    /// Not the start, not a wall and not yet reached: safe to enter during a
    /// search.
    #[inline]
    pub fn is_eligible(&self, p: Point) -> bool {
        !self.is_start(p) && !self.is_wall(p) && self.is_unvisited(p)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Turn `p` into a wall.
    ///
    /// Rejected (returns `false`, field untouched) unless `p` is on the
    /// field, eligible, and not the finish. Cells holding labels from an
    /// earlier search count as eligible: an accepted wall on a searched field
    /// first clears that search, so the next one sees the new wall.
    pub fn set_wall(&mut self, p: Point) -> bool {
        let open = match self.cell(p) {
            Some(CellState::Empty) => true,
            Some(c) => self.searched && c.is_search_label(),
            None => false,
        };
        if !open || self.is_start(p) || self.is_finish(p) {
            log::trace!("wall rejected at {p}");
            return false;
        }
        if self.searched {
            self.clear_search();
        }
        self.set(p, CellState::Wall);
        true
    }

    /// Drop every distance label and path marker left by a previous search.
    /// Walls and the start are kept.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_search_label() {
                *c = CellState::Empty;
            }
        }
        self.searched = false;
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Wall).count()
    }

    /// Points tagged `Path`, in row-major order.
    pub fn path_cells(&self) -> Vec<Point> {
        self.range.iter().filter(|&p| self.is_path(p)).collect()
    }

    /// Write `state` at `p`. Callers bounds-check first.
    #[inline]
    pub(crate) fn set(&mut self, p: Point, state: CellState) {
        debug_assert!(self.range.contains(p), "{p} is off the field");
        if let Some(i) = self.range.index(p) {
            self.cells[i] = state;
        }
    }
}
