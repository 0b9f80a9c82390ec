//! Lenient decoding of FEN piece-placement fields into a renderable grid.
//!
//! The decoder never fails: whatever the parsing engine hands us is drawn as well as it can
//! be. Ranks that are too short or too long keep exactly the cells their text describes.

use shakmaty::{File, Rank, Square};

/// One square of a decoded board: `None` when empty, otherwise the raw FEN token.
pub type Cell = Option<char>;

/// Decoded board, row 0 = rank 8, column 0 = file a.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

/// Decode the placement field of a FEN string.
///
/// Only the first whitespace-delimited token is read; the side-to-move, castling, en passant
/// and clock fields are ignored. A digit expands to that many empty cells and every other
/// character becomes one occupied cell holding that character.
pub fn decode(position: &str) -> Board {
    let placement = position.split_whitespace().next().unwrap_or("");

    let rows = placement
        .split('/')
        .map(|rank| {
            let mut cells = Vec::with_capacity(8);
            for ch in rank.chars() {
                match ch.to_digit(10) {
                    Some(run) => cells.extend(std::iter::repeat(None).take(run as usize)),
                    None => cells.push(Some(ch)),
                }
            }
            cells
        })
        .collect();

    Board { rows }
}

impl Board {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Token at `(row, col)`; `None` for empty squares and for cells the input never described.
    pub fn token(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Iterate over occupied cells as `(row, col, token)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|token| (r, c, token)))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }
}

/// Board square under grid coordinates, when they fall inside the regular 8×8 area.
pub fn square_at(row: usize, col: usize) -> Option<Square> {
    if row >= 8 || col >= 8 {
        return None;
    }
    Some(Square::from_coords(
        File::new(col as u32),
        Rank::new(7 - row as u32),
    ))
}

/// Dark squares are those where `row + col` is odd (a8 is light).
pub fn is_dark(row: usize, col: usize) -> bool {
    (row + col) % 2 == 1
}
