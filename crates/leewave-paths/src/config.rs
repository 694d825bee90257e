use leewave_core::Offsets;

/// Construction-time parameters of a [`Field`](crate::Field).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    pub rows: i32,
    pub cols: i32,
    pub offsets: Offsets,
}

impl FieldConfig {
    /// Default field height.
    pub const ROWS: i32 = 27;
    /// Default field width.
    pub const COLS: i32 = 59;

    /// A `rows × cols` field with king-move adjacency.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            offsets: Offsets::king(),
        }
    }

    /// Replace the adjacency table (builder).
    pub fn with_offsets(mut self, offsets: Offsets) -> Self {
        self.offsets = offsets;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(Self::ROWS, Self::COLS)
    }
}
