//! Printable HTML deck.
//!
//! The document is self-contained (inline CSS and SVG) so it can be opened in any browser
//! and sent to the print dialog. User text is HTML-escaped and otherwise reproduced as is.

use std::fmt::Write;

use html_escape::encode_text;

use super::card::{BackView, FrontView};
use super::svg::board_svg;
use crate::print::{Page, PagePair, PageSide, LETTER_HEIGHT_MM, LETTER_WIDTH_MM};

/// Pixel size of the board drawn on each printed back.
pub const PRINT_BOARD_SIZE: u32 = 200;

const STYLE: &str = r#"
@page { size: letter; margin: 0; }
html, body { margin: 0; padding: 0; background: white; }
.page { display: flex; flex-direction: column; box-sizing: border-box; overflow: hidden; }
.page.backs { background: #f8fafc; }
.page-break { break-after: page; page-break-after: always; }
.slot { box-sizing: border-box; overflow: hidden; position: relative; }
.slot.separated { border-bottom: 1px solid #d1d5db; }
.front { display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; padding: 0 12mm; }
.front .move { position: absolute; top: 8mm; left: 8mm; font: bold 10px sans-serif; color: #94a3b8; border: 1px solid #cbd5e1; padding: 2px 8px; border-radius: 4px; }
.front .label { font: 12px monospace; color: #9ca3af; text-transform: uppercase; letter-spacing: 0.2em; margin-bottom: 4mm; }
.front .comment { font: italic 22px serif; color: #1e293b; max-width: 130mm; line-height: 1.5; margin: 0; white-space: pre-wrap; }
.back { display: flex; align-items: center; padding: 0 8mm; }
.back .variations { width: 50%; padding-right: 8mm; border-right: 1px solid #e2e8f0; }
.back .variations .text { font: 13px monospace; color: #334155; background: white; padding: 4mm; border: 1px solid #f1f5f9; min-height: 25mm; white-space: pre-wrap; }
.back .position { width: 50%; padding-left: 8mm; display: flex; flex-direction: column; align-items: center; }
.back .summary { width: 100%; display: flex; justify-content: space-between; align-items: center; margin-bottom: 4mm; }
.back h3 { font: bold 11px sans-serif; color: #64748b; text-transform: uppercase; margin: 0 0 2mm 0; }
.back .turn { font: bold 10px sans-serif; text-transform: uppercase; background: #e2e8f0; padding: 2px 8px; border-radius: 4px; }
.back .fen { margin-top: 4mm; font: 10px monospace; color: #94a3b8; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.board { border: 4px solid #1e293b; }
"#;

/// Render paginated sheets as a complete HTML document.
pub fn print_document(pairs: &[PagePair]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Chess Flashcards</title>\n<style>",
    );
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    for pair in pairs {
        html.push_str(&page_html(&pair.fronts, front_html));
        html.push_str(&page_html(&pair.backs, back_html));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn page_html<T>(page: &Page<T>, slot_html: fn(&T) -> String) -> String {
    let side = match page.side {
        PageSide::Fronts => "fronts",
        PageSide::Backs => "backs",
    };
    let break_class = if page.break_after { " page-break" } else { "" };
    let mut html = format!(
        "<div class=\"page {side}{break_class}\" style=\"width: {LETTER_WIDTH_MM}mm; height: {LETTER_HEIGHT_MM}mm;\">\n"
    );

    let filled = page.filled();
    let height = page.slot_height_mm();
    for (idx, slot) in page.slots.iter().enumerate() {
        // the last occupied band has no separator, nor do blank ones
        let separated = if idx + 1 < filled { " separated" } else { "" };
        match slot {
            Some(view) => {
                let _ = write!(
                    html,
                    "<div class=\"slot{separated}\" style=\"height: {height}mm;\">{}</div>\n",
                    slot_html(view)
                );
            }
            None => {
                let _ = write!(
                    html,
                    "<div class=\"slot empty\" style=\"height: {height}mm;\"></div>\n"
                );
            }
        }
    }

    html.push_str("</div>\n");
    html
}

fn front_html(front: &FrontView) -> String {
    format!(
        "<div class=\"front\" style=\"height: 100%;\"><span class=\"move\">MOVE {}</span><span class=\"label\">Front of Card #{}</span><h2 class=\"comment\">\"{}\"</h2></div>",
        front.move_number,
        front.card_id,
        encode_text(&front.comment_text)
    )
}

fn back_html(back: &BackView) -> String {
    format!(
        "<div class=\"back\" style=\"height: 100%;\"><div class=\"variations\"><h3>Variations / Alternatives</h3><div class=\"text\">{}</div></div><div class=\"position\"><div class=\"summary\"><h3>Position Summary</h3><span class=\"turn\">{}</span></div>{}<p class=\"fen\">{}</p></div></div>",
        encode_text(&back.variations_text),
        encode_text(&back.turn_label()),
        board_svg(&back.board, PRINT_BOARD_SIZE),
        encode_text(&back.position_fen)
    )
}
