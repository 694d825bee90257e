//! Route recovery from distance labels, and route marking.

use leewave_core::Point;

use crate::bfs::Found;
use crate::cell::CellState;
use crate::error::{FieldError, Result};
use crate::field::Field;

impl Field {
    /// Walk the labels left by [`find_finish`](Self::find_finish) from the
    /// finish back to the start.
    ///
    /// At every step the first neighbor (in offset-table order) holding a
    /// label exactly one lower is taken. The returned route begins at the
    /// finish, ends at the start and has `found.distance() + 1` points.
    ///
    /// Fails with [`FieldError::BrokenTrail`] if the labels were changed
    /// since the search, e.g. by an intervening [`mark_path`](Self::mark_path).
    pub fn way_to_start(&self, found: &Found) -> Result<Vec<Point>> {
        let mut cp = found.finish;
        let mut d = found.distance;
        if self.value(cp) != Some(d) {
            return Err(FieldError::BrokenTrail(cp));
        }

        let mut path = Vec::with_capacity(d as usize + 1);
        path.push(cp);

        // Labels strictly decrease, and 0 is only ever held by the start.
        while d > 0 {
            let want = d - 1;
            let Some(np) = self
                .offsets
                .neighbors(cp)
                .find(|&np| self.value(np) == Some(want))
            else {
                return Err(FieldError::BrokenTrail(cp));
            };
            path.push(np);
            cp = np;
            d = want;
        }

        debug_assert!(self.is_start(cp));
        Ok(path)
    }

    /// Tag every point of `path` as [`CellState::Path`].
    ///
    /// The start cell keeps its `Start` state. Off-field points are skipped.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if self.is_on_grid(p) && !self.is_start(p) {
                self.set(p, CellState::Path);
            }
        }
    }

    /// Search, recover the route and mark it.
    ///
    /// Returns the marked route (finish first), or `None` when the finish is
    /// unreachable, in which case nothing is marked and only the search's
    /// distance labels are left behind.
    pub fn get_path(&mut self) -> Option<Vec<Point>> {
        let found = self.find_finish()?;
        match self.way_to_start(&found) {
            Ok(path) => {
                self.mark_path(&path);
                Some(path)
            }
            Err(e) => {
                log::warn!("route recovery failed after a successful search: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use leewave_core::{Offsets, Range, chebyshev};
    use rand::rngs::SmallRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::FieldConfig;

    fn field(rows: i32, cols: i32, start: (i32, i32), finish: (i32, i32)) -> Field {
        Field::with_config(FieldConfig::new(rows, cols), start.into(), finish.into()).unwrap()
    }

    /// Independent BFS over a wall set, for cross-checking route lengths.
    fn reference_distance(rows: i32, cols: i32, walls: &[Point], s: Point, t: Point) -> Option<u32> {
        let range = Range::with_size(rows, cols);
        let mut dist: HashMap<Point, u32> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(s, 0);
        queue.push_back(s);
        while let Some(p) = queue.pop_front() {
            if p == t {
                return dist.get(&p).copied();
            }
            let d = dist[&p];
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let n = p.shift(dr, dc);
                    if range.contains(n) && !walls.contains(&n) && !dist.contains_key(&n) {
                        dist.insert(n, d + 1);
                        queue.push_back(n);
                    }
                }
            }
        }
        None
    }

    fn assert_valid_route(f: &Field, path: &[Point]) {
        assert_eq!(path.first(), Some(&f.finish()));
        assert_eq!(path.last(), Some(&f.start()));
        for w in path.windows(2) {
            assert!(f.offsets().adjacent(w[0], w[1]), "{} -> {}", w[0], w[1]);
        }
        for &p in path {
            assert!(f.is_on_grid(p));
            assert!(!f.is_wall(p));
        }
    }

    #[test]
    fn open_field_route_has_chebyshev_length() {
        let mut f = field(9, 13, (1, 2), (7, 11));
        let path = f.get_path().unwrap();
        assert_eq!(path.len() as i32 - 1, chebyshev(f.start(), f.finish()));
        assert_valid_route(&f, &path);
    }

    #[test]
    fn route_through_single_gap() {
        let mut f = field(5, 5, (0, 0), (0, 4));
        for row in 0..4 {
            assert!(f.set_wall(Point::new(row, 2)));
        }
        let path = f.get_path().unwrap();
        assert_eq!(path.len() - 1, 8);
        assert!(path.contains(&Point::new(4, 2)));
        assert_valid_route(&f, &path);
    }

    #[test]
    fn route_follows_offset_order() {
        // Straight down: (1, 0) comes first in the king table.
        let mut f = field(4, 3, (0, 1), (3, 1));
        let path = f.get_path().unwrap();
        assert_eq!(
            path,
            vec![Point::new(3, 1), Point::new(2, 1), Point::new(1, 1), Point::new(0, 1)]
        );
    }

    #[test]
    fn marking_keeps_endpoints_recognisable() {
        let mut f = field(6, 6, (0, 0), (5, 3));
        let path = f.get_path().unwrap();
        assert!(f.is_start(f.start()));
        assert!(f.is_finish(f.finish()));
        assert_eq!(f.cell(f.start()), Some(CellState::Start));
        assert!(f.is_path(f.finish()));
        for &p in &path[..path.len() - 1] {
            assert!(f.is_path(p), "at {p}");
        }
        assert_eq!(f.path_cells().len(), path.len() - 1);
    }

    #[test]
    fn walled_in_start_marks_nothing() {
        let mut f = field(5, 5, (0, 0), (4, 4));
        for p in [(0, 1), (1, 0), (1, 1)] {
            assert!(f.set_wall(p.into()));
        }
        assert_eq!(f.get_path(), None);
        assert!(f.path_cells().is_empty());
    }

    #[test]
    fn enclosed_finish_marks_nothing() {
        let mut f = field(7, 7, (0, 0), (4, 4));
        for p in Offsets::king().neighbors(Point::new(4, 4)) {
            assert!(f.set_wall(p));
        }
        assert_eq!(f.get_path(), None);
        assert!(f.path_cells().is_empty());
        assert_eq!(f.wall_count(), 8);
    }

    #[test]
    fn way_to_start_detects_disturbed_labels() {
        let mut f = field(5, 5, (0, 0), (4, 4));
        let found = f.find_finish().unwrap();
        let path = f.way_to_start(&found).unwrap();
        f.mark_path(&path);
        assert_eq!(
            f.way_to_start(&found).unwrap_err(),
            FieldError::BrokenTrail(Point::new(4, 4))
        );
    }

    #[test]
    fn mark_path_skips_off_field_points() {
        let mut f = field(3, 3, (0, 0), (2, 2));
        f.mark_path(&[Point::new(5, 5), Point::new(1, 1), Point::new(0, 0)]);
        assert_eq!(f.path_cells(), vec![Point::new(1, 1)]);
        assert_eq!(f.cell(f.start()), Some(CellState::Start));
    }

    #[test]
    fn random_fields_match_reference_bfs() {
        let mut rng = SmallRng::seed_from_u64(0x1ee);
        let (rows, cols) = (12, 17);
        for _ in 0..200 {
            let s = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let mut t = s;
            while t == s {
                t = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
            }
            let mut f = field(rows, cols, (s.row, s.col), (t.row, t.col));
            let mut walls = Vec::new();
            for _ in 0..rng.random_range(0..(rows * cols) / 2) {
                let p = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
                if f.set_wall(p) {
                    walls.push(p);
                }
            }

            let want = reference_distance(rows, cols, &walls, s, t);
            match f.get_path() {
                Some(path) => {
                    assert_eq!(Some(path.len() as u32 - 1), want);
                    assert_valid_route(&f, &path);
                }
                None => {
                    assert_eq!(want, None);
                    assert!(f.path_cells().is_empty());
                }
            }
        }
    }
}
