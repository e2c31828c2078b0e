use clearfield_core::{Board, Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("action is invalid")]
    UnknownAction,
    #[error("position is invalid")]
    MalformedPosition,
    #[error("position is invalid")]
    OutOfBounds,
}

/// One player action, as typed at the `action:` prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reveal,
    Flag,
    Unflag,
}

impl Action {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        use Action::*;
        match input.trim() {
            "q" => Ok(Quit),
            "c" => Ok(Reveal),
            "n" => Ok(Flag),
            "u" => Ok(Unflag),
            _ => Err(InputError::UnknownAction),
        }
    }
}

/// Parses `"row col"` and checks it against the board bounds.
pub fn parse_position(input: &str, board: &Board) -> Result<Coord2, InputError> {
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::MalformedPosition);
    };

    let row: Coord = row.parse().map_err(|_| InputError::MalformedPosition)?;
    let col: Coord = col.parse().map_err(|_| InputError::MalformedPosition)?;

    if board.position_in_bounds((row, col)) {
        Ok((row, col))
    } else {
        Err(InputError::OutOfBounds)
    }
}
