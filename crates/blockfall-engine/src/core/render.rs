use std::fmt::{self, Write as _};

use super::piece::Piece;

const OCCUPIED: char = 'X';
const EMPTY: char = ' ';

/// Renders the piece as a bordered text block, top row first.
///
/// ```text
/// -----
/// |XXX|
/// |X  |
/// -----
/// ```
///
/// Two pieces render identically exactly when they are equal.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width() + 2);
        writeln!(f, "{border}")?;
        for row in (0..self.height()).rev() {
            f.write_char('|')?;
            for column in self.columns() {
                f.write_char(if column[row] { OCCUPIED } else { EMPTY })?;
            }
            f.write_str("|\n")?;
        }
        writeln!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_block() {
        let piece = Piece::new(&[[true]]).unwrap();
        assert_eq!(piece.to_string(), "---\n|X|\n---\n");
    }

    #[test]
    fn test_render_rows_top_down() {
        let piece = Piece::new(&[[true, true], [false, true], [false, true]]).unwrap();
        assert_eq!(piece.to_string(), "-----\n|XXX|\n|X  |\n-----\n");
    }

    #[test]
    fn test_render_after_rotation() {
        let mut piece = Piece::new(&[[true, true], [false, true], [false, true]]).unwrap();
        piece.rotate_clockwise();
        assert_eq!(piece.to_string(), "----\n|XX|\n| X|\n| X|\n----\n");
    }

    #[test]
    fn test_render_empty_piece() {
        let piece = Piece::new(&[[false, false]]).unwrap();
        assert_eq!(piece.to_string(), "---\n| |\n| |\n---\n");
    }
}
