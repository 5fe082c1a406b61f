#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count, validated at construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// Builds a config, rejecting zero-area grids and mine counts that leave
    /// no safe cell. Mine placement relies on these bounds to terminate, so
    /// violations are errors here rather than surprises later.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Result<Self> {
        if size_x == 0 || size_y == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines >= mult(size_x, size_y) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            size: (size_x, size_y),
            mines,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Immutable record of where the mines are. Populated once at board
/// creation; the player's actions never move mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Places mines at the given coordinates, mostly useful for tests that
    /// need a known layout.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mined cells among the up-to-8 in-bounds neighbors of
    /// `coords`. The cell itself is not counted.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mine_mask[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_area_grids() {
        assert_eq!(GameConfig::new((0, 5), 1), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 1), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_requires_at_least_one_safe_cell() {
        assert_eq!(GameConfig::new((3, 3), 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new((3, 3), 10), Err(GameError::TooManyMines));
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn layout_counts_and_indexes_mines() {
        let layout = MineLayout::from_mine_coords((4, 2), &[(0, 0), (3, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.total_cells(), 8);
        assert_eq!(layout.safe_cell_count(), 6);
        assert!(layout.contains_mine((0, 0)));
        assert!(layout.contains_mine((3, 1)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn layout_rejects_out_of_bounds_mine_coords() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn adjacency_counts_match_brute_force() {
        let layout =
            MineLayout::from_mine_coords((4, 3), &[(0, 0), (2, 1), (3, 2)]).unwrap();

        for x in 0..4i16 {
            for y in 0..3i16 {
                let mut expected = 0;
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x + dx, y + dy);
                        if (0..4).contains(&nx)
                            && (0..3).contains(&ny)
                            && layout.contains_mine((nx as Coord, ny as Coord))
                        {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(
                    layout.adjacent_mine_count((x as Coord, y as Coord)),
                    expected,
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }
}
