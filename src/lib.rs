//! Annotated PGN to printable chess flashcards.
//!
//! A parsing engine turns each `{comment}` of a game into a card; this crate decodes the
//! positions, renders both sides of every card, and lays them out for duplex printing.

pub mod chess;
pub mod config;
pub mod deck;
pub mod error;
pub mod extract;
pub mod fs;
pub mod print;
pub mod render;
pub mod session;

pub use chess::board::{decode, Board};
pub use config::ExtractorConfig;
pub use deck::types::{BackContent, Flashcard, FrontContent, Side};
pub use error::{Error, Result};
pub use extract::{Extractor, GeminiExtractor, ReplayExtractor};
pub use print::{paginate, PagePair};
pub use render::card::{render, CardView, Medium};
pub use session::{Session, SubmitOutcome};
