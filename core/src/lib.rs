//! Board model for a grid-clearing puzzle.
//!
//! A [`Board`] hides a number of hazards among its cells. Players [reveal](Board::reveal) cells,
//! [flag](Board::set_flagged) suspected hazards and poll [`Board::check_outcome`] after every move.
//! Renderers read the board through [`BoardView`], which keeps hazards hidden until the game is lost.
#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod layout;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub hazards: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, hazards: CellCount) -> Self {
        Self {
            width,
            height,
            hazards,
        }
    }

    pub fn new(width: Coord, height: Coord, hazards: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, hazards);
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a playable board: empty grids, no hazards, or
    /// no safe cell left.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.hazards == 0 {
            return Err(GameError::NoHazards);
        }
        if self.hazards >= self.total_cells() {
            return Err(GameError::TooManyHazards);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Grid bounds as `(rows, cols)`.
    pub const fn bounds(&self) -> Coord2 {
        (self.height, self.width)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 5)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHazard,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitHazard => true,
        }
    }
}

/// Session state. `Ongoing` may move to either terminal state, never back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Ongoing
    }
}
