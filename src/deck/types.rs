//! Core flashcard record types.
//!
//! Field names follow the JSON contract of the parsing engine exactly so that a deck can be
//! deserialized from the engine response, exported, and read back without any mapping layer.

use std::{collections::HashSet, fmt};

use log::warn;
use serde::{Deserialize, Serialize};

/// Side whose turn it is in the position on the back of a card.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question side of a card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrontContent {
    pub comment_text: String,
}

/// Answer side of a card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BackContent {
    pub position_fen: String,
    pub variations_text: Option<String>,
    pub move_number: u32,
    pub player_to_move: Side,
}

/// One study unit tied to a single annotated comment in the transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub card_id: u32,
    pub front_content: FrontContent,
    pub back_content: BackContent,
}

impl Flashcard {
    pub fn new(
        card_id: u32,
        comment_text: impl Into<String>,
        position_fen: impl Into<String>,
        variations_text: Option<String>,
        move_number: u32,
        player_to_move: Side,
    ) -> Self {
        Self {
            card_id,
            front_content: FrontContent {
                comment_text: comment_text.into(),
            },
            back_content: BackContent {
                position_fen: position_fen.into(),
                variations_text,
                move_number,
                player_to_move,
            },
        }
    }

    /// Variations text, treating an empty string the same as an absent one.
    pub fn variations(&self) -> Option<&str> {
        self.back_content
            .variations_text
            .as_deref()
            .filter(|v| !v.is_empty())
    }
}

/// Describe every way a deck departs from the record invariants (positive unique ids,
/// non-empty comments, positive move numbers).
///
/// The parsing engine is trusted, so these are reported rather than rejected.
pub fn contract_violations(cards: &[Flashcard]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for card in cards {
        if card.card_id == 0 {
            problems.push("card_id 0 is not a positive integer".to_string());
        }
        if !seen.insert(card.card_id) {
            problems.push(format!("card_id {} appears more than once", card.card_id));
        }
        if card.front_content.comment_text.trim().is_empty() {
            problems.push(format!("card {} has an empty comment", card.card_id));
        }
        if card.back_content.move_number == 0 {
            problems.push(format!("card {} has move number 0", card.card_id));
        }
    }

    problems
}

/// Log each invariant violation of a freshly received deck.
pub fn warn_on_violations(cards: &[Flashcard]) {
    for problem in contract_violations(cards) {
        warn!("Deck contract violation: {}", problem);
    }
}
