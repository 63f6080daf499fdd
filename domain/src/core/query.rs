//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A free-text analysis query (Value Object)
///
/// Holds the text exactly as the user typed it. Only the emptiness check
/// looks at the trimmed form; the verbatim text is what gets logged and sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    text: String,
}

impl Query {
    /// Try to create a new query, returning None for empty or whitespace-only text
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Query {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::try_new(s).ok_or(DomainError::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_verbatim_text() {
        let q = Query::try_new("  Analyze Wakad ").unwrap();
        assert_eq!(q.text(), "  Analyze Wakad ");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Query::try_new("").is_none());
        assert!(Query::try_new("   ").is_none());
        assert!(Query::try_new("\t\n").is_none());
    }

    #[test]
    fn test_from_str() {
        let q: Query = "Analyze Wakad".parse().unwrap();
        assert_eq!(q.to_string(), "Analyze Wakad");
        assert_eq!(" ".parse::<Query>(), Err(DomainError::EmptyQuery));
    }
}
