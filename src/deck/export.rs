use log::{debug, warn};

use super::types::Flashcard;
use crate::error::{Error, Result};

/// Serialize a deck as indented JSON, the same shape the parsing engine returns.
pub fn export_json(cards: &[Flashcard]) -> Result<String> {
    let json = serde_json::to_string_pretty(cards)?;
    debug!("Exported {} cards ({} bytes)", cards.len(), json.len());
    Ok(json)
}

/// Parse a deck previously written by [`export_json`].
///
/// All-or-nothing: a single malformed record rejects the whole file.
pub fn import_json(json: &str) -> Result<Vec<Flashcard>> {
    serde_json::from_str(json.trim()).map_err(|e| {
        warn!("Rejected deck file: {}", e);
        Error::InvalidDeck(e.to_string())
    })
}

/// Parse a parsing-engine response body.
///
/// Unlike [`import_json`] the cause is not surfaced; any mismatch is reported as
/// [`Error::InvalidFormat`].
pub fn parse_engine_response(body: &str) -> Result<Vec<Flashcard>> {
    serde_json::from_str(body.trim()).map_err(|e| {
        warn!("Failed to parse engine response as JSON: {}", e);
        Error::InvalidFormat
    })
}
