use serde::{Deserialize, Serialize};

/// Player-visible state of a single grid cell.
///
/// Cells start `Hidden` and leave that state at most once; a revealed cell
/// never changes again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    /// Safe cell, carrying the number of mined neighbors (0 to 8).
    Revealed(u8),
    RevealedMine,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
