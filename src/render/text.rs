use std::fmt::Write;

use crate::chess::board::{square_at, Board};
use crate::chess::glyphs::token_glyph;

use super::card::CardView;

/// Draw a board for the terminal, rank labels on the left and files underneath.
///
/// Labels come from the square under each row or column; anything outside the regular 8×8
/// area is labelled `?`.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    let rows = board.row_count();

    for (r, cells) in board.rows().iter().enumerate() {
        let label = square_at(r, 0).map_or('?', |sq| sq.rank().char());
        let squares: Vec<String> = cells
            .iter()
            .map(|cell| cell.map_or('·', token_glyph).to_string())
            .collect();
        let _ = writeln!(out, "{} | {}", label, squares.join(" "));
    }

    let width = board.rows().iter().map(Vec::len).max().unwrap_or(0).max(8);
    let files: Vec<String> = (0..width)
        .map(|i| square_at(0, i).map_or('?', |sq| sq.file().char()).to_string())
        .collect();
    if rows > 0 {
        let _ = writeln!(out, "    {}", "-".repeat(width * 2 - 1));
        let _ = writeln!(out, "    {}", files.join(" "));
    }
    out
}

/// Screen rendering of both sides of a card.
pub fn card_text(view: &CardView) -> String {
    let mut out = String::new();
    let front = &view.front;
    let back = &view.back;

    let _ = writeln!(out, "FRONT  Card #{}  MOVE {}", front.card_id, front.move_number);
    let _ = writeln!(out, "\"{}\"", front.comment_text);
    let _ = writeln!(out);
    let _ = writeln!(out, "BACK   {}", back.turn_label().to_uppercase());
    out.push_str(&board_text(&back.board));
    let _ = writeln!(out, "Variations: {}", back.variations_text);
    let _ = writeln!(out, "FEN: {}", back.position_fen);
    out
}
