//! Parsing-engine clients.
//!
//! Turning a transcript into flashcards is delegated to an outside service. [`Extractor`] is the
//! seam: the session only ever sees `extract(text) -> Vec<Flashcard>`, whichever client answers.

pub mod gemini;
pub mod prompt;
pub mod replay;

use std::future::Future;

use crate::deck::types::Flashcard;
use crate::error::Result;

#[allow(unused_imports)]
pub use {gemini::GeminiExtractor, replay::ReplayExtractor};

/// Something that can turn transcript text into an ordered deck.
///
/// Responses are all-or-nothing: an implementation returns either the complete deck or an
/// error, never a partially parsed one.
pub trait Extractor {
    fn extract(&self, transcript: &str) -> impl Future<Output = Result<Vec<Flashcard>>> + Send;
}
