use crate::geom::Point;

/// Ordered direction table defining adjacency on the grid.
///
/// Neighbors of `p` are `p + d` for each `d` in table order. The order is
/// significant: searches visit neighbors in it, and backward path walks pick
/// the first matching neighbor in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Offsets {
    dirs: Vec<Point>,
}

impl Default for Offsets {
    fn default() -> Self {
        Self::king()
    }
}

impl Offsets {
    /// The 8-directional (king-move) table: orthogonal moves first, then
    /// diagonals.
    pub const KING: [Point; 8] = [
        Point::new(1, 0),
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
        Point::new(1, 1),
        Point::new(-1, -1),
        Point::new(-1, 1),
        Point::new(1, -1),
    ];

    /// The 4-directional (cardinal) table.
    pub const CARDINAL: [Point; 4] = [
        Point::new(1, 0),
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
    ];

    /// Build a table from an arbitrary list of directions.
    ///
    /// No validation happens here; see [`is_valid`](Self::is_valid).
    pub fn new(dirs: impl Into<Vec<Point>>) -> Self {
        Self { dirs: dirs.into() }
    }

    /// King-move adjacency, see [`Offsets::KING`].
    pub fn king() -> Self {
        Self::new(Self::KING)
    }

    /// Cardinal adjacency, see [`Offsets::CARDINAL`].
    pub fn cardinal() -> Self {
        Self::new(Self::CARDINAL)
    }

    /// The directions, in table order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.dirs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Whether `step` is one of the table's directions.
    #[inline]
    pub fn contains(&self, step: Point) -> bool {
        self.dirs.contains(&step)
    }

    /// Every direction's negation is also in the table.
    pub fn is_symmetric(&self) -> bool {
        self.dirs.iter().all(|&d| self.contains(-d))
    }

    /// Non-empty, no zero step, no duplicates, and symmetric.
    pub fn is_valid(&self) -> bool {
        if self.dirs.is_empty() || self.contains(Point::ZERO) {
            return false;
        }
        let distinct = self
            .dirs
            .iter()
            .enumerate()
            .all(|(i, d)| !self.dirs[..i].contains(d));
        distinct && self.is_symmetric()
    }

    /// Neighbors of `p` in table order. No bounds checking is done.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.dirs.iter().map(move |&d| p + d)
    }

    /// Whether `b` is reachable from `a` in exactly one step.
    #[inline]
    pub fn adjacent(&self, a: Point, b: Point) -> bool {
        self.contains(b - a)
    }
}
