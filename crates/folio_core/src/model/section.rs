//! Section identifiers shared by navigation and viewport observation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anchor marker that prefixes in-page navigation targets.
pub const ANCHOR_PREFIX: char = '#';

/// Scroll-addressable page region id, e.g. `projects`.
///
/// Stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Creates a section id after validation.
    ///
    /// # Errors
    /// - `SectionIdError::Empty` for blank values.
    /// - `SectionIdError::Invalid` when the value contains whitespace or `#`.
    pub fn new(value: impl Into<String>) -> Result<Self, SectionIdError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SectionIdError::Empty);
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c == ANCHOR_PREFIX)
        {
            return Err(SectionIdError::Invalid(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parses an in-page anchor (`#id`) into its section id.
    ///
    /// Returns `None` for external targets and for malformed anchors.
    pub fn from_anchor(href: &str) -> Option<Self> {
        let rest = href.trim().strip_prefix(ANCHOR_PREFIX)?;
        Self::new(rest).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `#id` anchor form.
    pub fn anchor(&self) -> String {
        format!("{ANCHOR_PREFIX}{}", self.0)
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = SectionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

/// Section id validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionIdError {
    Empty,
    Invalid(String),
}

impl Display for SectionIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "section id must not be empty"),
            Self::Invalid(value) => write!(f, "section id is invalid: `{value}`"),
        }
    }
}

impl Error for SectionIdError {}

#[cfg(test)]
mod tests {
    use super::{SectionId, SectionIdError};

    #[test]
    fn new_trims_and_accepts_plain_ids() {
        let id = SectionId::new(" projects ").expect("valid id");
        assert_eq!(id.as_str(), "projects");
        assert_eq!(id.anchor(), "#projects");
    }

    #[test]
    fn new_rejects_blank_and_marked_values() {
        assert_eq!(SectionId::new("  "), Err(SectionIdError::Empty));
        assert!(matches!(
            SectionId::new("#home"),
            Err(SectionIdError::Invalid(_))
        ));
        assert!(matches!(
            SectionId::new("two words"),
            Err(SectionIdError::Invalid(_))
        ));
    }

    #[test]
    fn from_anchor_only_accepts_in_page_targets() {
        assert_eq!(
            SectionId::from_anchor("#resume"),
            Some(SectionId::new("resume").expect("valid id"))
        );
        assert_eq!(SectionId::from_anchor("https://example.com"), None);
        assert_eq!(SectionId::from_anchor("#"), None);
    }
}
