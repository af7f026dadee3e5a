//! Study topic model.
//!
//! A topic is an opaque, trimmed, non-empty label. Identity is its
//! string value; duplicates are allowed and scheduled independently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A study topic.
///
/// Construct through [`Topic::parse`], which trims surrounding whitespace
/// and rejects blank input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Parses a raw label into a topic.
    ///
    /// Returns `None` if the label is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The topic label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
