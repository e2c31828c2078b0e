use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single grid position, owned by a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    is_hazard: bool,
    is_flagged: bool,
    is_revealed: bool,
    adjacent_hazard_count: u8,
}

impl Cell {
    pub const fn new(position: Coord2) -> Self {
        Self {
            position,
            is_hazard: false,
            is_flagged: false,
            is_revealed: false,
            adjacent_hazard_count: 0,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub(crate) const fn is_hazard(&self) -> bool {
        self.is_hazard
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_hazard_count(&self) -> u8 {
        self.adjacent_hazard_count
    }

    pub fn set_flagged(&mut self, flagged: bool) {
        self.is_flagged = flagged;
    }

    pub(crate) fn set_adjacent_hazard_count(&mut self, adjacent_hazard_count: u8) {
        self.adjacent_hazard_count = adjacent_hazard_count;
    }

    pub(crate) fn mark_hazard(&mut self) {
        self.is_hazard = true;
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }
}
