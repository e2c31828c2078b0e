use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may know about a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    /// Only known once the cell is revealed.
    pub adjacent_hazards: Option<u8>,
    /// Only set after the game was lost.
    pub exposed_hazard: bool,
}

impl CellView {
    fn project(cell: &Cell, state: Outcome) -> Self {
        Self {
            revealed: cell.is_revealed(),
            flagged: cell.is_flagged(),
            adjacent_hazards: cell
                .is_revealed()
                .then_some(cell.adjacent_hazard_count()),
            exposed_hazard: state == Outcome::Lost && cell.is_hazard(),
        }
    }
}

/// Snapshot of everything a renderer needs to draw a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub state: Outcome,
    pub hazards_left: isize,
    pub triggered_hazard: Option<Coord2>,
    /// Indexed by `[row, col]`.
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let state = board.state();
        let cells = board.cells().map(|cell| CellView::project(cell, state));

        Self {
            state,
            hazards_left: board.hazards_left(),
            triggered_hazard: board.triggered_hazard(),
            cells,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &CellView>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }
}

impl Board {
    pub fn view(&self, coords: Coord2) -> Result<CellView> {
        Ok(CellView::project(self.cell(coords)?, self.state()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: (Coord, Coord), hazards: &[Coord2]) -> Board {
        Board::from_layout(HazardLayout::from_coords(size.0, size.1, hazards).unwrap()).unwrap()
    }

    #[test]
    fn hidden_cells_expose_nothing() {
        let board = board((2, 2), &[(0, 0)]);

        let view = board.view((0, 0)).unwrap();

        assert_eq!(
            view,
            CellView {
                revealed: false,
                flagged: false,
                adjacent_hazards: None,
                exposed_hazard: false,
            }
        );
    }

    #[test]
    fn revealed_and_flagged_cells_are_projected() {
        let mut board = board((2, 2), &[(0, 0)]);
        board.reveal((1, 1)).unwrap();
        board.set_flagged((0, 0), true).unwrap();

        let obs = BoardView::from_board(&board);

        assert_eq!(obs.cells[(1, 1)].adjacent_hazards, Some(1));
        assert!(obs.cells[(0, 0)].flagged);
        assert!(!obs.cells[(0, 0)].exposed_hazard);
        assert_eq!(obs.hazards_left, 0);
    }

    #[test]
    fn loss_exposes_every_hazard() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);
        board.reveal((2, 2)).unwrap();

        let obs = BoardView::from_board(&board);

        assert_eq!(obs.state, Outcome::Lost);
        assert_eq!(obs.triggered_hazard, Some((2, 2)));
        assert!(obs.cells[(0, 0)].exposed_hazard);
        assert!(obs.cells[(2, 2)].exposed_hazard);
        assert!(!obs.cells[(1, 1)].exposed_hazard);
    }

    #[test]
    fn rows_follow_board_height() {
        let board = board((4, 2), &[(0, 0)]);

        let obs = BoardView::from_board(&board);
        let widths: Vec<usize> = obs.rows().map(|row| row.count()).collect();

        assert_eq!(widths, [4, 4]);
    }
}
