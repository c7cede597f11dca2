//! Parsed names.

use crate::error::{AppError, Result};

/// A full name as read from input, split on whitespace.
///
/// The display form (whitespace collapsed to single spaces) is kept for
/// output only; handles are built from [`NameParts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    display: String,
    tokens: Vec<String>,
}

impl Name {
    /// Parse a raw name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the input has no non-whitespace token.
    pub fn parse(raw: &str) -> Result<Self> {
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(AppError::InvalidInput("name is empty".to_string()));
        }
        Ok(Self {
            display: tokens.join(" "),
            tokens,
        })
    }

    /// Name with whitespace collapsed, as shown in output.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Raw tokens in input order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Normalized name tokens split into first / middle(s) / last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    first: String,
    middles: Vec<String>,
    last: Option<String>,
}

impl NameParts {
    /// Build from normalized tokens, dropping empty ones.
    ///
    /// The first token is the first name and the last token the last name;
    /// anything between is a middle name. A single token has no last name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no non-empty token remains.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
        if tokens.is_empty() {
            return Err(AppError::InvalidInput(
                "name has no usable characters after normalization".to_string(),
            ));
        }

        let last = if tokens.len() > 1 { tokens.pop() } else { None };
        let first = tokens.remove(0);

        Ok(Self {
            first,
            middles: tokens,
            last,
        })
    }

    /// First name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Last name, absent for single-token names.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Middle names joined without separator, absent when there are none.
    #[must_use]
    pub fn middle(&self) -> Option<String> {
        if self.middles.is_empty() {
            None
        } else {
            Some(self.middles.concat())
        }
    }

    /// Initial of the first name.
    #[must_use]
    pub fn first_initial(&self) -> Option<&str> {
        initial(&self.first)
    }

    /// Initial of the last name.
    #[must_use]
    pub fn last_initial(&self) -> Option<&str> {
        self.last.as_deref().and_then(initial)
    }

    /// Initial of the first middle name.
    #[must_use]
    pub fn middle_initial(&self) -> Option<&str> {
        self.middles.first().map(String::as_str).and_then(initial)
    }
}

/// First character of `token` as a string slice.
fn initial(token: &str) -> Option<&str> {
    token.chars().next().map(|c| &token[..c.len_utf8()])
}
