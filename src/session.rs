//! Application state: the transcript being edited and the deck generated from it.
//!
//! All mutation goes through [`Session`]. A submit moves the session into the loading state,
//! and its completion either replaces the deck and clears the error or records the error and
//! leaves the previous deck in place. Views and print pages are derived on demand from the
//! current deck and never stored.

use std::num::NonZeroUsize;
use std::path::Path;

use derivative::Derivative;
use log::{info, warn};

use crate::deck::export::export_json;
use crate::deck::sample::{count_comments, SAMPLE_PGN};
use crate::deck::types::{warn_on_violations, Flashcard};
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::fs::read_text;
use crate::print::{paginate, PagePair};
use crate::render::card::{render, CardView, Medium};

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank transcript; no request was made.
    Skipped,
    /// The deck was replaced by `cards` new cards.
    Replaced { cards: usize },
}

#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct Session {
    #[derivative(Default(value = "SAMPLE_PGN.to_string()"))]
    transcript: String,
    cards: Vec<Flashcard>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed submit, cleared by the next one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit action should be offered at all.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.transcript.trim().is_empty()
    }

    pub fn set_transcript(&mut self, text: impl Into<String>) {
        self.transcript = text.into();
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Replace the transcript with the full contents of a text file.
    pub async fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = read_text(path).await?;
        self.transcript = text;
        Ok(())
    }

    /// Replace the deck wholesale, e.g. with one imported from JSON.
    pub fn replace_cards(&mut self, cards: Vec<Flashcard>) {
        warn_on_violations(&cards);
        self.cards = cards;
    }

    /// Enter the loading state and hand back the transcript to send.
    ///
    /// `Ok(None)` for a blank transcript, in which case nothing changes.
    pub fn begin_submit(&mut self) -> Result<Option<String>> {
        if self.loading {
            return Err(Error::ExtractionInProgress);
        }
        if self.transcript.trim().is_empty() {
            return Ok(None);
        }
        self.loading = true;
        self.error = None;
        Ok(Some(self.transcript.clone()))
    }

    /// Leave the loading state with the collaborator's answer.
    pub fn finish_submit(&mut self, result: Result<Vec<Flashcard>>) -> Result<SubmitOutcome> {
        self.loading = false;
        match result {
            Ok(cards) => {
                let expected = count_comments(&self.transcript);
                if cards.len() != expected {
                    warn!(
                        "Transcript has {} comments but {} cards came back",
                        expected,
                        cards.len()
                    );
                }
                let count = cards.len();
                self.replace_cards(cards);
                info!("Deck replaced with {} cards", count);
                Ok(SubmitOutcome::Replaced { cards: count })
            }
            Err(e) => {
                warn!("Extraction failed, keeping {} existing cards: {}", self.cards.len(), e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Run one extraction against the current transcript.
    pub async fn submit<E: Extractor>(&mut self, extractor: &E) -> Result<SubmitOutcome> {
        let transcript = match self.begin_submit()? {
            Some(t) => t,
            None => return Ok(SubmitOutcome::Skipped),
        };
        let result = extractor.extract(&transcript).await;
        self.finish_submit(result)
    }

    /// Screen views of every card, in deck order.
    pub fn screen_views(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|card| render(card, Medium::Screen))
            .collect()
    }

    pub fn print_pages(&self, capacity: NonZeroUsize) -> Vec<PagePair> {
        paginate(&self.cards, capacity)
    }

    pub fn export_json(&self) -> Result<String> {
        export_json(&self.cards)
    }
}
