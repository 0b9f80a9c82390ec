//! Board decoding and piece symbols.
//!
//! Nothing here checks chess rules: positions come from the parsing engine and are drawn
//! exactly as described.

pub mod board;
pub mod glyphs;

#[allow(unused_imports)]
pub use {board::*, glyphs::*};
