use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mutable game board: an immutable mine layout plus the player-visible
/// state of every cell.
///
/// The engine tracks how many cells are still hidden; once that number
/// drops to the mine count every remaining hidden cell must be a mine, which
/// is the caller's win signal. The engine itself carries no win/loss latch,
/// so a finished game can still be swept to show the full board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: MineLayout,
    cells: Array2<CellState>,
    unknown_count: CellCount,
}

impl Board {
    /// Creates a board with every cell hidden, placing mines with the given
    /// generator.
    pub fn new(config: GameConfig, generator: impl LayoutGenerator) -> Result<Self> {
        Ok(Self::from_layout(generator.generate(config)?))
    }

    /// Builds a board over a fixed layout, e.g. for deterministic tests.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let unknown_count = layout.total_cells();
        Self {
            layout,
            cells: Array2::default(size.to_nd_index()),
            unknown_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn width(&self) -> Coord {
        self.layout.size().0
    }

    pub fn height(&self) -> Coord {
        self.layout.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Number of cells still hidden.
    pub fn unknown_count(&self) -> CellCount {
        self.unknown_count
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Exposes the true content of one cell and returns its state.
    ///
    /// The first reveal of a cell decrements the unknown counter and stores
    /// either the mine marker or the adjacency count; revealing the same
    /// cell again is a no-op that returns the stored state. Out-of-bounds
    /// coordinates are a caller bug and come back as `InvalidCoords`.
    pub fn reveal(&mut self, coords: Coord2) -> Result<CellState> {
        let coords = self.layout.validate_coords(coords)?;

        if self.cells[coords.to_nd_index()].is_hidden() {
            self.unknown_count -= 1;
            let state = if self.layout.contains_mine(coords) {
                CellState::RevealedMine
            } else {
                CellState::Revealed(self.layout.adjacent_mine_count(coords))
            };
            self.cells[coords.to_nd_index()] = state;
            log::debug!("revealed {coords:?}: {state:?}, {} unknown", self.unknown_count);
        }

        Ok(self.cell_at(coords))
    }

    /// Cascading reveal of the cells around `coords`.
    ///
    /// Every hidden, unmined neighbor is revealed; any neighbor that comes
    /// up with a zero adjacency count has its own neighborhood expanded in
    /// turn. Mined cells are never touched by the cascade, only a direct
    /// `reveal` can expose a mine. The traversal uses an explicit worklist
    /// instead of recursion, and terminates because a cell leaves `Hidden`
    /// at most once and is only queued at that moment.
    pub fn flood_reveal(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.layout.validate_coords(coords)?;

        let mut to_expand = VecDeque::from([coords]);
        while let Some(center) = to_expand.pop_front() {
            for pos in self.layout.iter_neighbors(center) {
                if self.layout.contains_mine(pos) || !self.cell_at(pos).is_hidden() {
                    continue;
                }
                if self.reveal(pos)? == CellState::Revealed(0) {
                    log::trace!("flood cascades through {pos:?}");
                    to_expand.push_back(pos);
                }
            }
        }

        Ok(())
    }
}
