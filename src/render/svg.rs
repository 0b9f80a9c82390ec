use std::fmt::Write;

use html_escape::encode_text;

use crate::chess::board::{is_dark, Board};
use crate::chess::glyphs::{is_light_token, token_glyph};

pub const LIGHT_SQUARE: &str = "#F0D9B5";
pub const DARK_SQUARE: &str = "#B58863";

/// Inline SVG drawing of a decoded board, `size` pixels square.
///
/// Squares are painted only where the board has cells, so a truncated rank shows as a gap
/// and an overlong one spills past the frame and is clipped.
pub fn board_svg(board: &Board, size: u32) -> String {
    let cell = f64::from(size) / 8.0;
    let mut svg = format!(
        "<svg class=\"board\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );

    for (r, cells) in board.rows().iter().enumerate() {
        for (c, cell_token) in cells.iter().enumerate() {
            let x = c as f64 * cell;
            let y = r as f64 * cell;
            let fill = if is_dark(r, c) { DARK_SQUARE } else { LIGHT_SQUARE };
            let _ = write!(
                svg,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" fill=\"{fill}\"/>"
            );

            if let Some(token) = cell_token {
                let colour = if is_light_token(*token) { "white" } else { "black" };
                let glyph = token_glyph(*token).to_string();
                let _ = write!(
                    svg,
                    "<text x=\"{}\" y=\"{}\" dominant-baseline=\"central\" text-anchor=\"middle\" font-size=\"{}\" fill=\"{}\" style=\"text-shadow: 0px 0px 2px rgba(0,0,0,0.5)\">{}</text>",
                    x + cell / 2.0,
                    y + cell / 2.0,
                    cell * 0.8,
                    colour,
                    encode_text(&glyph)
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
