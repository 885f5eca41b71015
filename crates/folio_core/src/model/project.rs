//! Project showcase record.
//!
//! # Responsibility
//! - Define the project card shape rendered by the projects grid.
//! - Declare per-project card actions as data.
//!
//! # Invariants
//! - `id` is unique and stable for the page session.
//! - `route` is the detail destination for `id`; the content store rejects
//!   payloads where it is missing or duplicated.
//! - `technologies` keeps author order; filtering never reorders it.

use serde::{Deserialize, Serialize};

/// Stable project identifier.
pub type ProjectId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub code_url: String,
    #[serde(default)]
    pub featured: bool,
    /// In-site detail page path, e.g. `/projects/vyrl`.
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub live_action: ProjectAction,
    #[serde(default)]
    pub code_action: ProjectAction,
}

impl Project {
    /// Resolves the "live demo" button into a concrete effect.
    pub fn live_effect(&self) -> ActionEffect {
        self.live_action.resolve(&self.live_url)
    }

    /// Resolves the "source code" button into a concrete effect.
    pub fn code_effect(&self) -> ActionEffect {
        self.code_action.resolve(&self.code_url)
    }
}

/// How a card button behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Open `target` in a new browsing context.
    External,
    /// Show `target` as a notice instead of navigating.
    Placeholder,
    /// Open the project's own URL for this button.
    #[default]
    Default,
}

/// Declarative action override attached to a project button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAction {
    #[serde(rename = "type", default)]
    pub kind: ActionKind,
    #[serde(default)]
    pub target: Option<String>,
}

impl ProjectAction {
    pub fn external(target: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::External,
            target: Some(target.into()),
        }
    }

    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Placeholder,
            target: Some(message.into()),
        }
    }

    /// Resolves this action against the button's fallback URL.
    ///
    /// Blank targets and blank fallbacks resolve to `ActionEffect::Nothing`.
    pub fn resolve(&self, fallback_url: &str) -> ActionEffect {
        let target = self
            .target
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        match self.kind {
            ActionKind::External => match target {
                Some(url) => ActionEffect::OpenExternal(url.to_string()),
                None => ActionEffect::Nothing,
            },
            ActionKind::Placeholder => match target {
                Some(message) => ActionEffect::Notice(message.to_string()),
                None => ActionEffect::Nothing,
            },
            ActionKind::Default => {
                let url = fallback_url.trim();
                if url.is_empty() {
                    ActionEffect::Nothing
                } else {
                    ActionEffect::OpenExternal(url.to_string())
                }
            }
        }
    }
}

/// Concrete effect of pressing a card button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    OpenExternal(String),
    Notice(String),
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::{ActionEffect, ActionKind, ProjectAction};

    #[test]
    fn default_action_uses_fallback_url() {
        let action = ProjectAction::default();
        assert_eq!(action.kind, ActionKind::Default);
        assert_eq!(
            action.resolve("https://example.com"),
            ActionEffect::OpenExternal("https://example.com".to_string())
        );
        assert_eq!(action.resolve("  "), ActionEffect::Nothing);
    }

    #[test]
    fn override_actions_ignore_fallback_url() {
        assert_eq!(
            ProjectAction::external("https://demo.example").resolve("https://other.example"),
            ActionEffect::OpenExternal("https://demo.example".to_string())
        );
        assert_eq!(
            ProjectAction::placeholder("Coming soon").resolve("https://other.example"),
            ActionEffect::Notice("Coming soon".to_string())
        );
    }

    #[test]
    fn override_without_target_is_inert() {
        let action = ProjectAction {
            kind: ActionKind::External,
            target: None,
        };
        assert_eq!(action.resolve("https://example.com"), ActionEffect::Nothing);
    }
}
