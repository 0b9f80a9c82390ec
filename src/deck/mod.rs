//! Flashcard records and their JSON representation.
//!
//! A deck is a plain ordered `Vec<Flashcard>`; this module owns the record types, the
//! indented-JSON export used for saving and re-importing decks, and the bundled sample game.

pub mod export;
pub mod sample;
pub mod types;

#[allow(unused_imports)]
pub use {export::*, sample::*, types::*};
