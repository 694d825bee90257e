use std::collections::VecDeque;

use leewave_core::Point;

use crate::cell::CellState;
use crate::field::Field;

/// Proof of a successful [`Field::find_finish`].
///
/// Only a search can build one, so route reconstruction never runs against a
/// field the search did not reach the finish on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found {
    pub(crate) finish: Point,
    pub(crate) distance: u32,
}

impl Found {
    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Steps from start to finish.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }
}

impl Field {
    /// Breadth-first search from the start until the finish is discovered.
    ///
    /// Every cell entered gets its step count from the start as a
    /// [`CellState::Distance`] label; the finish gets one too when reached.
    /// Neighbors are tried in offset-table order and the first discovery of
    /// the finish ends the search. Returns `None` once the frontier runs dry.
    ///
    /// Labels from an earlier search are cleared first.
    pub fn find_finish(&mut self) -> Option<Found> {
        if self.searched {
            log::debug!("clearing labels from previous search");
            self.clear_search();
        }
        self.searched = true;

        let mut queue: VecDeque<Point> = VecDeque::with_capacity(self.range.len());
        queue.push_back(self.start);
        let dirs = self.offsets.clone();

        let found = 'search: loop {
            let Some(cp) = queue.pop_front() else {
                break 'search None;
            };
            let current = self.value(cp).unwrap_or(0);
            let next = current + 1;

            for &d in dirs.as_slice() {
                let np = cp + d;
                if !self.is_on_grid(np) {
                    continue;
                }
                if self.is_finish(np) {
                    self.set(np, CellState::Distance(next));
                    break 'search Some(Found {
                        finish: np,
                        distance: next,
                    });
                }
                if self.is_eligible(np) {
                    self.set(np, CellState::Distance(next));
                    queue.push_back(np);
                }
            }
        };

        match &found {
            Some(f) => log::debug!("finish {} reached in {} steps", f.finish, f.distance),
            None => log::debug!("no route from {} to {}", self.start, self.finish),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldConfig;
    use leewave_core::{Offsets, chebyshev};

    fn field(rows: i32, cols: i32, start: (i32, i32), finish: (i32, i32)) -> Field {
        Field::with_config(FieldConfig::new(rows, cols), start.into(), finish.into()).unwrap()
    }

    #[test]
    fn open_field_distance_is_chebyshev() {
        let cases = [((0, 0), (0, 4)), ((0, 0), (4, 4)), ((2, 1), (0, 6)), ((4, 6), (3, 0))];
        for (s, t) in cases {
            let mut f = field(5, 7, s, t);
            let found = f.find_finish().expect("open field");
            assert_eq!(found.finish(), Point::from(t));
            assert_eq!(found.distance() as i32, chebyshev(s.into(), t.into()));
            assert_eq!(f.value(t.into()), Some(found.distance()));
        }
    }

    #[test]
    fn neighbor_of_start() {
        let mut f = field(3, 3, (1, 1), (2, 2));
        let found = f.find_finish().unwrap();
        assert_eq!(found.distance(), 1);
    }

    #[test]
    fn labels_grow_by_one_per_ring() {
        let mut f = field(7, 7, (3, 3), (6, 6));
        f.find_finish().unwrap();
        // Ring 1 is fully labelled before the finish on ring 3 is found.
        for p in Offsets::king().neighbors(Point::new(3, 3)) {
            assert_eq!(f.value(p), Some(1), "at {p}");
        }
        assert_eq!(f.value(Point::new(1, 1)), Some(2));
        assert_eq!(f.cell(f.start()), Some(CellState::Start));
    }

    #[test]
    fn walled_in_start_fails() {
        let mut f = field(5, 5, (2, 2), (0, 0));
        for p in Offsets::king().neighbors(Point::new(2, 2)) {
            assert!(f.set_wall(p));
        }
        assert_eq!(f.find_finish(), None);
        assert_eq!(f.value(f.finish()), None);
    }

    #[test]
    fn walled_in_finish_terminates() {
        let mut f = field(6, 6, (0, 0), (3, 3));
        for p in Offsets::king().neighbors(Point::new(3, 3)) {
            assert!(f.set_wall(p));
        }
        assert_eq!(f.find_finish(), None);
        // The far corner is still reached, the long way round.
        assert_eq!(f.value(Point::new(5, 5)), Some(8));
    }

    #[test]
    fn detour_around_wall() {
        let mut f = field(5, 5, (0, 0), (0, 4));
        for row in 0..4 {
            assert!(f.set_wall(Point::new(row, 2)));
        }
        let found = f.find_finish().unwrap();
        assert_eq!(found.distance(), 8);
        assert_eq!(f.value(Point::new(4, 2)), Some(4));
    }

    #[test]
    fn cardinal_offsets_forbid_diagonal_steps() {
        let cfg = FieldConfig::new(4, 4).with_offsets(Offsets::cardinal());
        let mut f = Field::with_config(cfg, Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(f.find_finish().unwrap().distance(), 6);
    }

    #[test]
    fn offsets_survive_a_search() {
        let cfg = FieldConfig::new(3, 3).with_offsets(Offsets::cardinal());
        let mut f = Field::with_config(cfg, Point::new(0, 0), Point::new(2, 2)).unwrap();
        f.find_finish().unwrap();
        assert_eq!(f.offsets(), &Offsets::cardinal());
    }

    #[test]
    fn second_search_starts_clean() {
        let mut f = field(4, 4, (0, 0), (3, 3));
        let first = f.find_finish().unwrap();
        let second = f.find_finish().unwrap();
        assert_eq!(first, second);
    }
}
