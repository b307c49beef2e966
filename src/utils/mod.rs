//! Shared utilities.

pub mod encoding;

pub use encoding::{Alphabet, AlphabetError};
