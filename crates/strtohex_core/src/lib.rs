//! strtohex core: pure token classification and hex list formatting.
mod convert;
mod hex;
mod token;

pub use convert::{convert, Conversion, TokenReport};
pub use hex::{HexEntry, HexList};
pub use token::{hex_entries, tokens, TokenKind};
