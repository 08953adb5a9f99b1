//! Parsing and rendering helpers shared by the binaries.

use crate::board::{Board, CELL_COUNT};

/// Parses a board from a text description.
///
/// The description must contain exactly nine cell characters; whitespace
/// (including newlines between rows) is ignored, so both `"120453786"` and
/// a three-line grid parse the same way. Valid cell characters are:
/// - `1`-`8`: the numbered tiles
/// - `0`, `.`, or `_`: the blank
///
/// Each value must appear exactly once; this is the construction-time check
/// of the permutation invariant the search algorithms assume.
///
/// # Arguments
/// * `s`: The board description, e.g. a file's contents.
///
/// # Returns
/// * `Ok(Board)` if the description is a well-formed 3x3 permutation.
/// * `Err(String)` if a character is unrecognized, the cell count is not
///   nine, or a value repeats.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1 2 .\n4 5 3\n7 8 6").unwrap();
/// assert_eq!(board.cell(2), 0);
/// assert_eq!(board.cell(5), 3);
///
/// assert!(board_from_str("1 2 X\n4 5 3\n7 8 6").is_err());
/// assert!(board_from_str("1 2 3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let mut cells = [0u8; CELL_COUNT];
    let mut count = 0usize;

    for ch in s.chars() {
        if ch.is_whitespace() {
            continue;
        }
        let value = match ch {
            '.' | '_' => 0,
            '0'..='8' => ch as u8 - b'0',
            _ => return Err(format!("Unrecognized cell character '{}'", ch)),
        };
        if count == CELL_COUNT {
            return Err(format!(
                "Too many cells. Expected exactly {}",
                CELL_COUNT
            ));
        }
        cells[count] = value;
        count += 1;
    }

    if count != CELL_COUNT {
        return Err(format!(
            "Expected {} cells, found {}",
            CELL_COUNT, count
        ));
    }

    let mut seen = [false; CELL_COUNT];
    for &value in &cells {
        if seen[value as usize] {
            return Err(format!("Value {} appears more than once", value));
        }
        seen[value as usize] = true;
    }

    Ok(Board::from_cells(cells))
}

/// Renders a path as numbered steps, one board per step.
///
/// Step 0 is the initial board and the last step is the goal. The output is
/// human-readable only; no machine-parseable format is promised.
pub fn render_path(path: &[Board]) -> String {
    let mut output = String::new();
    for (step, board) in path.iter().enumerate() {
        output.push_str(&format!("Step {}\n{}\n", step, board));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_valid_grid() {
        let board = board_from_str("1 2 0\n4 5 3\n7 8 6").unwrap();
        assert_eq!(board.cells(), &[1, 2, 0, 4, 5, 3, 7, 8, 6]);
    }

    #[test]
    fn test_board_from_str_compact_form() {
        let board = board_from_str("120453786").unwrap();
        assert_eq!(board.cells(), &[1, 2, 0, 4, 5, 3, 7, 8, 6]);
    }

    #[test]
    fn test_board_from_str_blank_aliases() {
        let dotted = board_from_str("1 2 .\n4 5 3\n7 8 6").unwrap();
        let underscored = board_from_str("1 2 _\n4 5 3\n7 8 6").unwrap();
        let zeroed = board_from_str("1 2 0\n4 5 3\n7 8 6").unwrap();
        assert_eq!(dotted, zeroed);
        assert_eq!(underscored, zeroed);
    }

    #[test]
    fn test_board_from_str_invalid_char() {
        let result = board_from_str("1 2 X\n4 5 3\n7 8 6");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized cell character 'X'"));
    }

    #[test]
    fn test_board_from_str_nine_is_out_of_range() {
        let result = board_from_str("1 2 9\n4 5 3\n7 8 6");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized cell character '9'"));
    }

    #[test]
    fn test_board_from_str_too_few_cells() {
        let result = board_from_str("1 2 0\n4 5 3");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 9 cells, found 6"));
    }

    #[test]
    fn test_board_from_str_too_many_cells() {
        let result = board_from_str("1 2 0\n4 5 3\n7 8 6 6");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Too many cells"));
    }

    #[test]
    fn test_board_from_str_duplicate_value() {
        let result = board_from_str("1 2 0\n4 5 3\n7 8 1");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Value 1 appears more than once"));
    }

    #[test]
    fn test_render_path_numbers_every_step() {
        let first = Board::from_cells([1, 2, 0, 4, 5, 3, 7, 8, 6]);
        let second = Board::from_cells([1, 2, 3, 4, 5, 0, 7, 8, 6]);
        let rendered = render_path(&[first, second]);
        assert!(rendered.starts_with("Step 0\n1 2 0\n"));
        assert!(rendered.contains("Step 1\n1 2 3\n"));
    }
}
