//! Card views and their output formats.
//!
//! [`card`] turns a flashcard into front/back values. The other modules draw those values,
//! as HTML for print and as plain text for the terminal.

pub mod card;
pub mod html;
pub mod svg;
pub mod text;

#[allow(unused_imports)]
pub use card::*;
