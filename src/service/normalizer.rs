//! Name normalization.
//!
//! Case-folds name tokens and, in ASCII mode, transliterates them: accents are
//! stripped by canonical decomposition, a fixed table covers letters that do
//! not decompose, apostrophes and hyphens are removed, and any remaining
//! non-ASCII character is dropped.

use unicode_normalization::UnicodeNormalization;

use crate::domain::{CaseMode, Name, NameParts};
use crate::error::Result;

/// Apostrophe-like characters removed in ASCII mode.
const APOSTROPHES: &[char] = &['\'', '`', '\u{2018}', '\u{2019}', '\u{02BC}'];

/// Hyphen-like characters removed in ASCII mode.
const HYPHENS: &[char] = &['-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}'];

/// Letters without a canonical decomposition.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('ł', "l"),
    ('Ł', "L"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('þ', "th"),
    ('Þ', "TH"),
    ('ı', "i"),
    ('ħ', "h"),
    ('Ħ', "H"),
];

/// Normalizes parsed names into tokens ready for templating.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    ascii: bool,
    case: CaseMode,
}

impl Normalizer {
    /// Create a normalizer.
    #[must_use]
    pub const fn new(ascii: bool, case: CaseMode) -> Self {
        Self { ascii, case }
    }

    /// Normalize every token of `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no token survives normalization.
    pub fn normalize(&self, name: &Name) -> Result<NameParts> {
        NameParts::from_tokens(name.tokens().iter().map(|t| self.normalize_token(t)))
    }

    /// Normalize one token.
    #[must_use]
    pub fn normalize_token(&self, token: &str) -> String {
        if self.ascii {
            self.case.apply(&to_ascii(token))
        } else {
            self.case.apply(token)
        }
    }
}

/// Transliterate `token` to ASCII.
#[must_use]
pub fn to_ascii(token: &str) -> String {
    let mut out = String::with_capacity(token.len());

    for c in token.nfd() {
        if c.is_ascii() {
            if !APOSTROPHES.contains(&c) && !HYPHENS.contains(&c) {
                out.push(c);
            }
        } else if let Some((_, ascii)) = TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
            out.push_str(ascii);
        }
        // Combining marks and anything else outside ASCII are dropped.
    }

    out
}
