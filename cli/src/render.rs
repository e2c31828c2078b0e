use clearfield_core::{BoardView, CellView};
use std::fmt;

fn glyph(cell: &CellView) -> char {
    if cell.exposed_hazard {
        return 'X';
    }
    match (cell.adjacent_hazards, cell.flagged) {
        (Some(count), _) => char::from_digit(count.into(), 10).unwrap_or('?'),
        (None, true) => '*',
        (None, false) => 'O',
    }
}

/// Text form of a board: one line per row, each cell as `|<glyph>`, closing the row with `|`.
pub struct BoardText<'a>(pub &'a BoardView);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            for cell in row {
                write!(f, "|{}", glyph(cell))?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
