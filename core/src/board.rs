use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// A single game session: the cell grid plus the counters and state needed to judge it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: Outcome,
    triggered_hazard: Option<Coord2>,
}

/// Serialized form of a [`Board`], trusted only after [`Board::from_snapshot`] checks it.
#[derive(Deserialize)]
struct BoardSnapshot {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: Outcome,
    triggered_hazard: Option<Coord2>,
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let snapshot = BoardSnapshot::deserialize(deserializer)?;
        Self::from_snapshot(snapshot).map_err(serde::de::Error::custom)
    }
}

impl Board {
    /// Creates a `width` by `height` board with exactly `hazard_count` hazards drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        width: Coord,
        height: Coord,
        hazard_count: CellCount,
        rng: &mut R,
    ) -> Result<Self> {
        let config = GameConfig::new(width, height, hazard_count)?;
        let layout = RandomLayoutGenerator::new(rng).generate(config)?;
        Self::from_layout(layout)
    }

    pub fn from_layout(layout: HazardLayout) -> Result<Self> {
        let config = layout.game_config();
        config.validate()?;

        let mut cells = Array2::from_shape_fn(config.bounds().to_nd_index(), |(row, col)| {
            // bounds were validated against `Coord`
            Cell::new((row as Coord, col as Coord))
        });
        for cell in cells.iter_mut() {
            let coords = cell.position();
            if layout.contains_hazard(coords) {
                cell.mark_hazard();
            }
            cell.set_adjacent_hazard_count(layout.adjacent_hazard_count(coords));
        }

        log::debug!(
            "New {}x{} board with {} hazards",
            config.width,
            config.height,
            config.hazards
        );
        Ok(Self {
            config,
            cells,
            revealed_count: 0,
            flagged_count: 0,
            state: Outcome::default(),
            triggered_hazard: None,
        })
    }

    /// Rebuilds the board from the saved hazards, then replays revealed and flagged cells on top.
    /// Counters, adjacency counts and the session state must agree with the replayed grid.
    fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self> {
        let BoardSnapshot {
            config,
            cells,
            revealed_count,
            flagged_count,
            state,
            triggered_hazard,
        } = snapshot;

        let layout = HazardLayout::from_hazard_mask(cells.map(Cell::is_hazard))?;
        if layout.bounds() != config.bounds() {
            return Err(GameError::InvalidBoardShape);
        }
        if layout.hazard_count() != config.hazards {
            return Err(GameError::InvalidSnapshot);
        }

        let mut board = Self::from_layout(layout)?;
        for (restored, saved) in board.cells.iter_mut().zip(cells.iter()) {
            if saved.position() != restored.position()
                || saved.adjacent_hazard_count() != restored.adjacent_hazard_count()
                || (saved.is_revealed() && saved.is_hazard())
            {
                return Err(GameError::InvalidSnapshot);
            }
            if saved.is_revealed() {
                restored.reveal();
                board.revealed_count += 1;
            }
            if saved.is_flagged() {
                restored.set_flagged(true);
                board.flagged_count += 1;
            }
        }

        if board.revealed_count != revealed_count || board.flagged_count != flagged_count {
            return Err(GameError::InvalidSnapshot);
        }

        match (state, triggered_hazard) {
            (Outcome::Ongoing, None) => {}
            (Outcome::Won, None) if board.all_hazards_flagged() || board.all_safe_cells_revealed() => {}
            (Outcome::Lost, Some(coords))
                if board.position_in_bounds(coords) && board.cells[coords.to_nd_index()].is_hazard() => {}
            _ => return Err(GameError::InvalidSnapshot),
        }
        board.state = state;
        board.triggered_hazard = triggered_hazard;
        Ok(board)
    }

    pub fn width(&self) -> Coord {
        self.config.width
    }

    pub fn height(&self) -> Coord {
        self.config.height
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.config.hazards
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Hazards not yet accounted for by a flag; negative when the player over-flagged.
    pub fn hazards_left(&self) -> isize {
        (self.config.hazards as isize) - (self.flagged_count as isize)
    }

    pub fn state(&self) -> Outcome {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_hazard(&self) -> Option<Coord2> {
        self.triggered_hazard
    }

    pub fn position_in_bounds(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.config.bounds();
        coords.0 < rows && coords.1 < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.position_in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub(crate) fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn set_flagged(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_flagged() == flagged {
            return Ok(MarkOutcome::NoChange);
        }

        cell.set_flagged(flagged);
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::trace!("Flag at {:?} set to {}", coords, flagged);
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_hazard() {
            log::debug!("Hazard hit at {:?}", coords);
            self.triggered_hazard = Some(coords);
            self.state = Outcome::Lost;
            return Ok(RevealOutcome::HitHazard);
        }

        if cell.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        let opened = self.flood_reveal(coords);
        log::debug!("Reveal at {:?} opened {} cells", coords, opened);
        Ok(RevealOutcome::Revealed)
    }

    /// Evaluates both win conditions and records a win. Terminal states are returned unchanged.
    pub fn check_outcome(&mut self) -> Outcome {
        if self.state.is_finished() {
            return self.state;
        }

        if self.all_hazards_flagged() || self.all_safe_cells_revealed() {
            log::debug!("Board won");
            self.state = Outcome::Won;
        }
        self.state
    }

    /// Reveals `start` and spreads through zero-count cells. Returns how many cells were opened.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_revealed() {
                continue;
            }

            cell.reveal();
            opened += 1;
            let adjacent_hazards = cell.adjacent_hazard_count();
            log::trace!(
                "Opened cell at {:?}, adjacent hazards: {}",
                coords,
                adjacent_hazards
            );

            if adjacent_hazards == 0 {
                to_visit.extend(
                    self.neighbors(coords)
                        .filter(|&pos| !self.cells[pos.to_nd_index()].is_revealed()),
                );
            }
        }

        self.revealed_count += opened;
        opened
    }

    /// Flagged cells are exactly the hazard cells.
    fn all_hazards_flagged(&self) -> bool {
        self.flagged_count == self.config.hazards
            && self
                .cells
                .iter()
                .all(|cell| cell.is_hazard() == cell.is_flagged())
    }

    fn all_safe_cells_revealed(&self) -> bool {
        self.total_cells() - self.revealed_count == self.config.hazards
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
