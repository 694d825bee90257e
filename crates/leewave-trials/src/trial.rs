//! Random trial generation.

use leewave_core::{Point, Range};
use leewave_paths::{Field, FieldError, Result};
use rand::{Rng, RngExt};

use crate::config::TrialConfig;

/// Outcome of one trial: the searched field and what happened on it.
#[derive(Debug, Clone)]
pub struct Trial {
    pub field: Field,
    /// Walls actually placed.
    pub walls: usize,
    /// The marked route, finish first, if the finish was reachable.
    pub route: Option<Vec<Point>>,
}

impl Trial {
    /// Steps along the route.
    pub fn steps(&self) -> Option<usize> {
        self.route.as_ref().map(|r| r.len() - 1)
    }
}

/// Generator of random fields.
pub struct TrialGen<R: Rng> {
    pub rng: R,
    config: TrialConfig,
    range: Range,
}

impl<R: Rng> TrialGen<R> {
    /// Fails if the configured field cannot hold two distinct endpoints.
    pub fn new(config: TrialConfig, rng: R) -> Result<Self> {
        let (rows, cols) = (config.field.rows, config.field.cols);
        if rows <= 0 || cols <= 0 {
            return Err(FieldError::EmptyGrid { rows, cols });
        }
        if (rows as usize) * (cols as usize) < 2 {
            return Err(FieldError::SameEndpoints(Point::ZERO));
        }
        Ok(Self {
            rng,
            config,
            range: Range::with_size(rows, cols),
        })
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// A uniformly random point on the field.
    pub fn random_point(&mut self) -> Point {
        Point::new(
            self.rng.random_range(0..self.range.rows()),
            self.rng.random_range(0..self.range.cols()),
        )
    }

    /// A random start and a random finish, resampled until they differ.
    pub fn endpoints(&mut self) -> (Point, Point) {
        let start = self.random_point();
        let mut finish = self.random_point();
        while finish == start {
            finish = self.random_point();
        }
        (start, finish)
    }

    /// Place up to `count` walls at random, retrying rejected points.
    ///
    /// `count` is capped by the number of cells that can still take a wall.
    /// Returns the number placed.
    pub fn place_walls(&mut self, field: &mut Field, count: usize) -> usize {
        let open = field
            .range()
            .iter()
            .filter(|&p| !field.is_finish(p) && field.is_eligible(p))
            .count();
        let target = count.min(open);

        let mut placed = 0;
        while placed < target {
            let p = self.random_point();
            if field.set_wall(p) {
                placed += 1;
            }
        }
        log::debug!("placed {placed} walls ({count} requested, {open} open)");
        placed
    }

    /// Build a fresh field, wall it, and search it.
    pub fn run_trial(&mut self) -> Result<Trial> {
        let (start, finish) = self.endpoints();
        let mut field = Field::with_config(self.config.field.clone(), start, finish)?;

        let limit = self.config.wall_limit();
        let count = if limit == 0 {
            0
        } else {
            self.rng.random_range(0..limit)
        };
        let walls = self.place_walls(&mut field, count);
        let route = field.get_path();

        Ok(Trial {
            field,
            walls,
            route,
        })
    }
}
