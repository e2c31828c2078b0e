use clearfield_core::{Board, BoardView, Coord2, Outcome, RevealOutcome};
use std::io::{BufRead, Write};

use crate::{
    command::{self, Action},
    render::BoardText,
};

/// Why a session stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
    InputClosed,
}

/// Interactive prompt loop driving one board.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        self.draw()?;
        loop {
            let Some(action) = self.prompt_action()? else {
                return Ok(SessionEnd::InputClosed);
            };

            let changed = match action {
                Action::Quit => {
                    writeln!(self.output, "bye")?;
                    return Ok(SessionEnd::Quit);
                }
                Action::Reveal => {
                    let Some(coords) = self.prompt_position()? else {
                        return Ok(SessionEnd::InputClosed);
                    };
                    let outcome = self.board.reveal(coords)?;
                    if outcome == RevealOutcome::HitHazard {
                        self.draw()?;
                        writeln!(self.output, "you fail")?;
                        return Ok(SessionEnd::Lost);
                    }
                    outcome.has_update()
                }
                Action::Flag | Action::Unflag => {
                    let Some(coords) = self.prompt_position()? else {
                        return Ok(SessionEnd::InputClosed);
                    };
                    self.board
                        .set_flagged(coords, action == Action::Flag)?
                        .has_update()
                }
            };

            if !changed {
                log::debug!("{:?} left the board unchanged", action);
                continue;
            }

            if self.board.check_outcome() == Outcome::Won {
                self.draw()?;
                writeln!(self.output, "you win")?;
                return Ok(SessionEnd::Won);
            }
            self.draw()?;
        }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let view = BoardView::from_board(&self.board);
        write!(self.output, "{}", BoardText(&view))?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_action(&mut self) -> anyhow::Result<Option<Action>> {
        while let Some(line) = self.read_line("action: ")? {
            match Action::parse(&line) {
                Ok(action) => return Ok(Some(action)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(None)
    }

    fn prompt_position(&mut self) -> anyhow::Result<Option<Coord2>> {
        while let Some(line) = self.read_line("position: ")? {
            match command::parse_position(&line, &self.board) {
                Ok(coords) => return Ok(Some(coords)),
                Err(err) => {
                    log::debug!("Rejected position {:?}: {:?}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearfield_core::{Coord, HazardLayout};
    use std::io::Cursor;

    fn play(size: (Coord, Coord), hazards: &[Coord2], script: &str) -> (SessionEnd, Board, String) {
        let board =
            Board::from_layout(HazardLayout::from_coords(size.0, size.1, hazards).unwrap()).unwrap();
        let mut output = Vec::new();
        let mut session = Session::new(board, Cursor::new(script.as_bytes()), &mut output);

        let end = session.run().unwrap();
        let board = session.board().clone();
        drop(session);
        (end, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn flood_reveal_wins() {
        let (end, _, output) = play((3, 3), &[(2, 2)], "c\n0 0\n");

        assert_eq!(end, SessionEnd::Won);
        assert!(output.ends_with("|0|0|0|\n|0|1|1|\n|0|1|O|\nyou win\n"));
    }

    #[test]
    fn flagging_the_hazard_wins() {
        let (end, board, output) = play((3, 3), &[(1, 1)], "n\n1 1\n");

        assert_eq!(end, SessionEnd::Won);
        assert_eq!(board.state(), Outcome::Won);
        assert!(output.ends_with("|O|O|O|\n|O|*|O|\n|O|O|O|\nyou win\n"));
    }

    #[test]
    fn revealing_a_hazard_fails() {
        let (end, board, output) = play((3, 3), &[(1, 1)], "c\n1 1\nc\n0 0\n");

        assert_eq!(end, SessionEnd::Lost);
        assert_eq!(board.triggered_hazard(), Some((1, 1)));
        assert!(output.ends_with("|O|O|O|\n|O|X|O|\n|O|O|O|\nyou fail\n"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (end, _, output) = play((3, 3), &[(2, 2)], "x\nc\n9 9\nzero zero\n0 0\n");

        assert_eq!(end, SessionEnd::Won);
        assert_eq!(output.matches("action is invalid").count(), 1);
        assert_eq!(output.matches("position is invalid").count(), 2);
    }

    #[test]
    fn unflag_clears_flag_and_quit_says_bye() {
        let (end, board, output) = play((3, 3), &[(1, 1)], "n\n0 0\nu\n0 0\nq\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(board.flagged_count(), 0);
        assert_eq!(board.state(), Outcome::Ongoing);
        assert!(output.ends_with("action: bye\n"));
    }

    #[test]
    fn closed_input_stops_the_session() {
        let (end, _, output) = play((3, 3), &[(1, 1)], "c\n");

        assert_eq!(end, SessionEnd::InputClosed);
        assert!(output.ends_with("position: "));
    }

    #[test]
    fn unchanged_board_is_not_redrawn() {
        let (end, board, output) = play((3, 3), &[(1, 1)], "n\n0 0\nn\n0 0\nc\n0 0\nc\n0 0\nq\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(board.flagged_count(), 1);
        assert_eq!(output.matches("|O|O|O|\n|O|O|O|\n|O|O|O|\n").count(), 1);
        assert_eq!(output.matches("|*|O|O|\n").count(), 1);
        assert_eq!(output.matches("|1|O|O|\n").count(), 1);
    }
}
