//! Navigation records and target classification.

use crate::model::section::{SectionId, ANCHOR_PREFIX};
use serde::{Deserialize, Serialize};

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    /// `#id` for in-page anchors, anything else is an external destination.
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

impl NavigationItem {
    /// Returns the target section when this item is an in-page anchor.
    pub fn section(&self) -> Option<SectionId> {
        SectionId::from_anchor(&self.href)
    }
}

/// Navbar shortcut to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

/// Classified navigation destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page scroll target.
    Anchor(SectionId),
    /// Destination opened in a new browsing context.
    External(String),
    /// Blank value, bare `#`, or an anchor that is not a valid section id.
    Malformed,
}

impl NavTarget {
    /// Classifies one raw `href`.
    pub fn classify(href: &str) -> Self {
        let trimmed = href.trim();
        if trimmed.is_empty() {
            return Self::Malformed;
        }
        if trimmed.starts_with(ANCHOR_PREFIX) {
            return match SectionId::from_anchor(trimmed) {
                Some(id) => Self::Anchor(id),
                None => Self::Malformed,
            };
        }
        Self::External(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::NavTarget;
    use crate::model::section::SectionId;

    #[test]
    fn classify_separates_anchor_external_and_malformed() {
        assert_eq!(
            NavTarget::classify("#contact"),
            NavTarget::Anchor(SectionId::new("contact").expect("valid id"))
        );
        assert_eq!(
            NavTarget::classify(" https://github.com/example "),
            NavTarget::External("https://github.com/example".to_string())
        );
        assert_eq!(NavTarget::classify("#"), NavTarget::Malformed);
        assert_eq!(NavTarget::classify(""), NavTarget::Malformed);
    }
}
