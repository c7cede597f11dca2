//! Pattern parser for handle templates.
//!
//! Parses template strings like `{f}.{last}` and renders them against
//! normalized name parts.

use crate::domain::NameParts;

/// Parsed placeholder in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Literal text.
    Literal(String),
    /// First name.
    First,
    /// Last name.
    Last,
    /// Middle names joined.
    Middle,
    /// First-name initial.
    FirstInitial,
    /// Last-name initial.
    LastInitial,
    /// Initial of the first middle name.
    MiddleInitial,
}

/// Parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Source text, kept for traceability.
    source: String,
    /// Pattern parts.
    parts: Vec<Placeholder>,
}

impl ParsedPattern {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns a message if a placeholder is unknown or unclosed, or the
    /// template has no placeholder at all.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let mut parts = Vec::new();
        let mut chars = pattern.chars();
        let mut literal = String::new();

        while let Some(c) = chars.next() {
            if c == '{' {
                if !literal.is_empty() {
                    parts.push(Placeholder::Literal(std::mem::take(&mut literal)));
                }

                let mut placeholder = String::new();
                let mut found_close = false;

                for inner in chars.by_ref() {
                    if inner == '}' {
                        found_close = true;
                        break;
                    }
                    placeholder.push(inner);
                }

                if !found_close {
                    return Err(format!("unclosed placeholder in '{pattern}'"));
                }

                parts.push(parse_placeholder(&placeholder)?);
            } else if c == '}' {
                return Err(format!("unmatched '}}' in '{pattern}'"));
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            parts.push(Placeholder::Literal(literal));
        }

        if !parts.iter().any(|p| !matches!(p, Placeholder::Literal(_))) {
            return Err(format!("template '{pattern}' has no name placeholder"));
        }

        Ok(Self {
            source: pattern.to_string(),
            parts,
        })
    }

    /// Template text as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render this template for a name.
    ///
    /// Returns `None` when the template needs a name part the name does not
    /// have (a last name for single-token names, middle names when there are
    /// none).
    #[must_use]
    pub fn render(&self, name: &NameParts) -> Option<String> {
        let mut result = String::new();

        for part in &self.parts {
            match part {
                Placeholder::Literal(s) => result.push_str(s),
                Placeholder::First => result.push_str(name.first()),
                Placeholder::Last => result.push_str(name.last()?),
                Placeholder::Middle => result.push_str(&name.middle()?),
                Placeholder::FirstInitial => result.push_str(name.first_initial()?),
                Placeholder::LastInitial => result.push_str(name.last_initial()?),
                Placeholder::MiddleInitial => result.push_str(name.middle_initial()?),
            }
        }

        Some(result)
    }
}

/// Parse a placeholder string.
fn parse_placeholder(placeholder: &str) -> Result<Placeholder, String> {
    match placeholder {
        "first" => Ok(Placeholder::First),
        "last" => Ok(Placeholder::Last),
        "middle" => Ok(Placeholder::Middle),
        "f" => Ok(Placeholder::FirstInitial),
        "l" => Ok(Placeholder::LastInitial),
        "m" => Ok(Placeholder::MiddleInitial),
        _ => Err(format!("unknown placeholder: {{{placeholder}}}")),
    }
}
