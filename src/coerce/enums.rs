//! Enum codecs for closed symbol sets
//!
//! The platform encodes a handful of fields as small closed vocabularies
//! (`"enabled"`/`"disabled"`, `"SYSTEM"`/`"USER"`, integer codes on some
//! endpoints). An [`EnumCodec`] maps between those wire values and the
//! symbolic names the models expose, and is total in both directions: any
//! unrecognized or absent value resolves to a declared default instead of
//! failing, so new wire values introduced by the platform never break older
//! clients.

use serde_json::Value;

/// Bidirectional mapping between a closed set of symbols and their wire
/// representation, with a guaranteed default.
///
/// Symbols are kept in declaration order; where the platform uses integer
/// codes for a field, the code is the symbol's position in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumCodec {
    symbols: &'static [&'static str],
    default: &'static str,
}

impl EnumCodec {
    /// Create a codec over an ordered symbol set.
    ///
    /// `default` must be a member of `symbols`; model descriptors verify
    /// this in their unit tests.
    pub const fn new(symbols: &'static [&'static str], default: &'static str) -> Self {
        Self { symbols, default }
    }

    /// The declared default symbol.
    pub fn default_symbol(&self) -> &'static str {
        self.default
    }

    /// The declared symbols, in stable order.
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    /// Decode a wire value into a symbol.
    ///
    /// Accepts the symbol itself or its positional integer code. Anything
    /// else, including `None` for an absent field, resolves to the default.
    pub fn decode(&self, wire: Option<&Value>) -> &'static str {
        match wire {
            Some(Value::String(s)) => self
                .symbols
                .iter()
                .find(|sym| *sym == s)
                .copied()
                .unwrap_or(self.default),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|i| self.symbols.get(i as usize))
                .copied()
                .unwrap_or(self.default),
            _ => self.default,
        }
    }

    /// Encode a symbol into its wire form.
    ///
    /// Mirrors [`decode`](Self::decode)'s leniency: an unrecognized symbol
    /// encodes as the default's wire form rather than failing.
    pub fn encode(&self, symbol: &str) -> &'static str {
        self.symbols
            .iter()
            .find(|sym| **sym == symbol)
            .copied()
            .unwrap_or(self.default)
    }

    /// Positional wire code for a symbol (the default's code if unknown).
    pub fn wire_code(&self, symbol: &str) -> usize {
        self.symbols
            .iter()
            .position(|sym| *sym == symbol)
            .unwrap_or_else(|| {
                self.symbols
                    .iter()
                    .position(|sym| *sym == self.default)
                    .unwrap_or(0)
            })
    }
}
