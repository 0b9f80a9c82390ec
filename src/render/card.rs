//! Front/back views of a single flashcard.
//!
//! Views are plain values built from a borrowed [`Flashcard`]; the board is decoded afresh on
//! every call and nothing is cached between renders.

use crate::chess::board::{decode, Board};
use crate::deck::types::{Flashcard, Side};

/// Where a card is being shown. Selects the wording used when a card has no variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    Screen,
    Print,
}

impl Medium {
    pub fn no_variations_placeholder(self) -> &'static str {
        match self {
            Medium::Screen => "None",
            Medium::Print => "No variations recorded for this position.",
        }
    }
}

/// Question side: the comment that triggered the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontView {
    pub card_id: u32,
    pub move_number: u32,
    pub comment_text: String,
}

/// Answer side: resulting position plus alternative lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackView {
    pub card_id: u32,
    pub board: Board,
    pub player_to_move: Side,
    pub position_fen: String,
    /// Variations verbatim, or the medium's placeholder.
    pub variations_text: String,
    pub has_variations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub front: FrontView,
    pub back: BackView,
}

impl BackView {
    /// Heading such as `"White's turn"`.
    pub fn turn_label(&self) -> String {
        format!("{}'s turn", self.player_to_move)
    }
}

pub fn render_front(card: &Flashcard) -> FrontView {
    FrontView {
        card_id: card.card_id,
        move_number: card.back_content.move_number,
        comment_text: card.front_content.comment_text.clone(),
    }
}

pub fn render_back(card: &Flashcard, medium: Medium) -> BackView {
    let variations = card.variations();
    BackView {
        card_id: card.card_id,
        board: decode(&card.back_content.position_fen),
        player_to_move: card.back_content.player_to_move,
        position_fen: card.back_content.position_fen.clone(),
        variations_text: variations
            .unwrap_or_else(|| medium.no_variations_placeholder())
            .to_string(),
        has_variations: variations.is_some(),
    }
}

pub fn render(card: &Flashcard, medium: Medium) -> CardView {
    CardView {
        front: render_front(card),
        back: render_back(card, medium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruy_lopez(variations: Option<&str>) -> Flashcard {
        Flashcard::new(
            7,
            "A very standard position. White plans d4.",
            "r1bq1rk1/2p1bppp/p1np1n2/1p2p3/4P3/1BP2N2/PP1P1PPP/RNBQR1K1 w - - 0 9",
            variations.map(str::to_string),
            8,
            Side::White,
        )
    }

    #[test]
    fn front_is_verbatim() {
        let card = Flashcard::new(
            1,
            "<b>Tricky</b> & \"quoted\"",
            "8/8/8/8/8/8/8/8",
            None,
            3,
            Side::Black,
        );
        let front = render_front(&card);
        assert_eq!(front.comment_text, "<b>Tricky</b> & \"quoted\"");
        assert_eq!(front.card_id, 1);
        assert_eq!(front.move_number, 3);
    }

    #[test]
    fn back_decodes_position() {
        let back = render_back(&ruy_lopez(None), Medium::Screen);
        assert_eq!(back.board.row_count(), 8);
        assert_eq!(back.board.token(0, 0), Some('r'));
        assert_eq!(back.board.token(7, 6), Some('K'));
        assert_eq!(back.turn_label(), "White's turn");
    }

    #[test]
    fn placeholder_depends_on_medium() {
        let card = ruy_lopez(None);
        assert_eq!(render(&card, Medium::Screen).back.variations_text, "None");
        assert_eq!(
            render(&card, Medium::Print).back.variations_text,
            "No variations recorded for this position."
        );
        assert!(!render(&card, Medium::Print).back.has_variations);
    }

    #[test]
    fn variations_verbatim() {
        let card = ruy_lopez(Some("(5. Qe2 b5 6. Bb3 Be7)"));
        for medium in [Medium::Screen, Medium::Print] {
            let back = render_back(&card, medium);
            assert_eq!(back.variations_text, "(5. Qe2 b5 6. Bb3 Be7)");
            assert!(back.has_variations);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let card = ruy_lopez(Some("9. h3"));
        assert_eq!(render(&card, Medium::Screen), render(&card, Medium::Screen));
        assert_eq!(render(&card, Medium::Print), render(&card, Medium::Print));
    }

    #[test]
    fn malformed_position_still_renders() {
        let card = Flashcard::new(2, "odd", "rnbqk/pp", None, 1, Side::Black);
        let back = render_back(&card, Medium::Screen);
        assert_eq!(back.board.row_count(), 2);
        assert_eq!(back.board.rows()[0].len(), 5);
    }
}
