use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the hazards are, independent of any play state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardLayout {
    hazard_mask: Array2<bool>,
    hazard_count: CellCount,
}

impl HazardLayout {
    /// Wraps a `(rows, cols)` mask. Both dimensions must be non-zero and fit in a [`Coord`].
    pub fn from_hazard_mask(hazard_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = hazard_mask.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidSize);
        }

        let hazard_count = hazard_mask.iter().filter(|&&is_hazard| is_hazard).count();
        Ok(Self {
            hazard_mask,
            hazard_count: CellCount::try_from(hazard_count).map_err(|_| GameError::InvalidSize)?,
        })
    }

    /// Builds a layout from explicit `(row, col)` positions. Repeated positions collapse into a
    /// single hazard, so [`hazard_count`](Self::hazard_count) may be lower than `hazards.len()`.
    pub fn from_coords(width: Coord, height: Coord, hazards: &[Coord2]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut hazard_mask: Array2<bool> = Array2::default((height, width).to_nd_index());
        for &coords in hazards {
            if coords.0 >= height || coords.1 >= width {
                return Err(GameError::InvalidCoords);
            }
            hazard_mask[coords.to_nd_index()] = true;
        }

        Self::from_hazard_mask(hazard_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width(), self.height(), self.hazard_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.bounds();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Grid bounds as `(rows, cols)`.
    pub fn bounds(&self) -> Coord2 {
        grid_bounds(&self.hazard_mask)
    }

    pub fn width(&self) -> Coord {
        self.bounds().1
    }

    pub fn height(&self) -> Coord {
        self.bounds().0
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.bounds();
        mult(rows, cols)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn contains_hazard(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_hazard_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.hazard_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for HazardLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.hazard_mask[coords.to_nd_index()]
    }
}
