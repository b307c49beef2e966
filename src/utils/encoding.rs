//! Positional-numeral-system encoding of allocated integers into short codes.

use std::collections::HashSet;

/// Default 62-symbol alphabet: digits, lowercase, uppercase.
pub const BASE62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Configuration-time alphabet errors, surfaced at construction, not per call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain at least 2 symbols, got {0}")]
    TooShort(usize),
    #[error("alphabet contains duplicate symbol '{0}'")]
    Duplicate(char),
}

/// An ordered set of distinct symbols used for positional encoding.
///
/// The symbol at index 0 represents zero. Whether that symbol is literally
/// `'0'` is the caller's configuration responsibility; the encoder only
/// guarantees positional semantics.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Validates and builds an alphabet from an ordered symbol sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the sequence has fewer than 2 symbols or
    /// contains duplicates.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.len() < 2 {
            return Err(AlphabetError::TooShort(symbols.len()));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(AlphabetError::Duplicate(c));
            }
        }

        Ok(Self { symbols })
    }

    /// The standard `0-9a-zA-Z` alphabet.
    pub fn base62() -> Self {
        Self {
            symbols: BASE62.chars().collect(),
        }
    }

    /// Number of symbols (the encoding base).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol representing zero, also used for left-padding.
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    /// Encodes a non-negative integer as a positional-numeral string,
    /// most-significant symbol first.
    ///
    /// `encode(0)` is the single zero symbol. Deterministic and total over
    /// `u64`; decoding is not supported (codes are one-way identifiers).
    pub fn encode(&self, mut n: u64) -> String {
        if n == 0 {
            return self.zero_symbol().to_string();
        }

        let base = self.symbols.len() as u64;
        let mut out = Vec::new();

        while n > 0 {
            out.push(self.symbols[(n % base) as usize]);
            n /= base;
        }

        out.iter().rev().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::base62()
    }
}
