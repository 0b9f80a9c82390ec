use lazy_static::lazy_static;
use serde_json::{json, Value};

/// Instructions sent ahead of the transcript.
const INSTRUCTIONS: &str = r#"Analyze the following PGN chess game data and transform it into structured flashcards.

Process:
1. Scan for Flashcard Triggers: A new flashcard is triggered ONLY when you encounter a comment in braces {}.
2. Front: Extract the exact text inside {}.
3. Back Content:
   - Identify the FEN immediately following the move associated with the comment.
   - Extract variations in parentheses () immediately after the commented move.
   - Identify the current move number (e.g., if the comment is on White's 3rd move, move_number is 3).
   - Identify the player whose turn it is in the resulting FEN position ("White" or "Black").
"#;

/// Full prompt for one transcript.
pub fn build_prompt(transcript: &str) -> String {
    format!("{}\nPGN Input:\n{}\n", INSTRUCTIONS, transcript)
}

lazy_static! {
    /// Gemini response schema mirroring the flashcard record.
    pub static ref RESPONSE_SCHEMA: Value = json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "card_id": { "type": "INTEGER" },
                "front_content": {
                    "type": "OBJECT",
                    "properties": {
                        "comment_text": { "type": "STRING" }
                    },
                    "required": ["comment_text"]
                },
                "back_content": {
                    "type": "OBJECT",
                    "properties": {
                        "position_fen": { "type": "STRING" },
                        "variations_text": { "type": "STRING", "nullable": true },
                        "move_number": { "type": "INTEGER" },
                        "player_to_move": { "type": "STRING", "enum": ["White", "Black"] }
                    },
                    "required": ["position_fen", "variations_text", "move_number", "player_to_move"]
                }
            },
            "required": ["card_id", "front_content", "back_content"]
        }
    });
}
