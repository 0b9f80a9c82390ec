use std::path::PathBuf;

use log::info;

use super::Extractor;
use crate::deck::export::import_json;
use crate::deck::types::Flashcard;
use crate::error::Result;
use crate::fs::read_text;

/// Answers every request with a deck saved by an earlier export, ignoring the transcript.
///
/// Lets a deck be re-rendered, or the whole pipeline exercised, without calling the network.
pub struct ReplayExtractor {
    path: PathBuf,
}

impl ReplayExtractor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Extractor for ReplayExtractor {
    async fn extract(&self, _transcript: &str) -> Result<Vec<Flashcard>> {
        let json = read_text(&self.path).await?;
        let cards = import_json(&json)?;
        info!("Replayed {} cards from {}", cards.len(), self.path.display());
        Ok(cards)
    }
}
