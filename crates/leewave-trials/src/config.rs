use leewave_paths::FieldConfig;

/// Parameters of a run of trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    pub field: FieldConfig,
    /// Upper bound on walls per trial, as a share of all cells. The actual
    /// count is drawn uniformly below it.
    pub max_wall_ratio: f64,
    pub trials: usize,
    /// Fixed seed for reproducible runs; drawn from the thread RNG otherwise.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            max_wall_ratio: 0.5,
            trials: 1000,
            seed: None,
        }
    }
}

impl TrialConfig {
    /// Exclusive upper bound on the number of walls in one trial.
    pub fn wall_limit(&self) -> usize {
        let cells = self.field.rows.max(0) as usize * self.field.cols.max(0) as usize;
        (cells as f64 * self.max_wall_ratio) as usize
    }
}
