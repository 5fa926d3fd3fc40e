//! Output alphabet selection.
//!
//! An [`Alphabet`] is the ordered symbol table derived integers are mapped
//! into. It is built from three independent blocks, always concatenated in
//! the same order: uppercase, lowercase, digits.

use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const UPPERCASE: RangeInclusive<char> = 'A'..='Z';
const LOWERCASE: RangeInclusive<char> = 'a'..='z';
const DIGITS: RangeInclusive<char> = '0'..='9';

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character blocks a derived password may draw from.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetOptions {
    /// Include uppercase letters (A-Z).
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z).
    pub include_lowercase: bool,
    /// Include digits (0-9).
    pub include_digits: bool,
}

impl AlphabetOptions {
    /// No block selected. Yields an empty alphabet.
    pub const NONE: Self = Self {
        include_uppercase: false,
        include_lowercase: false,
        include_digits: false,
    };

    /// Every block selected.
    pub const ALL: Self = Self {
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
    };
}

impl Default for AlphabetOptions {
    fn default() -> Self {
        Self::ALL
    }
}

/// Ordered, duplicate-free sequence of output symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet for `options`.
    ///
    /// Blocks appear in the fixed order uppercase, lowercase, digits, each in
    /// ascending code-point order. An all-false selection is legal and gives
    /// an empty alphabet.
    #[must_use]
    pub fn new(options: &AlphabetOptions) -> Self {
        let blocks = [
            (options.include_uppercase, UPPERCASE),
            (options.include_lowercase, LOWERCASE),
            (options.include_digits, DIGITS),
        ];
        let symbols = blocks
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, block)| block)
            .collect();
        Self { symbols }
    }

    #[cfg(test)]
    pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no block was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns `true` if `c` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Map an arbitrary integer onto a symbol by modulo indexing.
    ///
    /// Returns `None` only for an empty alphabet.
    #[must_use]
    pub fn symbol_for(&self, value: u64) -> Option<char> {
        let len = u64::try_from(self.symbols.len()).ok()?;
        let index = value.checked_rem(len)?;
        let index = usize::try_from(index).ok()?;
        self.symbols.get(index).copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the alphabet for `options`. See [`Alphabet::new`].
#[must_use]
pub fn build_alphabet(options: &AlphabetOptions) -> Alphabet {
    Alphabet::new(options)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
