//! Project filter engine.
//!
//! # Responsibility
//! - Derive the visible project subset for the selected facet.
//! - Tell an empty catalog apart from an empty match.
//!
//! # Invariants
//! - Filtering never reorders or mutates the project list.
//! - Technology matching is a case-insensitive substring test.
//! - `All` is reachable from any selection in one step.

use crate::model::project::Project;
use log::debug;
use std::fmt::{Display, Formatter};

/// Facet id for the unfiltered view.
pub const FACET_ALL: &str = "all";
/// Facet id for featured projects.
pub const FACET_FEATURED: &str = "featured";

/// Selected project facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Featured,
    Tech(String),
}

impl FilterSelection {
    /// Parses a facet id as emitted by the filter buttons.
    ///
    /// `all` and `featured` are reserved (case-insensitive); anything else is
    /// a technology tag.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(FACET_ALL) {
            Self::All
        } else if trimmed.eq_ignore_ascii_case(FACET_FEATURED) {
            Self::Featured
        } else {
            Self::Tech(trimmed.to_string())
        }
    }

    /// Stable facet id.
    pub fn label(&self) -> &str {
        match self {
            Self::All => FACET_ALL,
            Self::Featured => FACET_FEATURED,
            Self::Tech(tag) => tag,
        }
    }

    /// Whether `project` belongs to this facet.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Featured => project.featured,
            Self::Tech(tag) => {
                let needle = tag.to_lowercase();
                project
                    .technologies
                    .iter()
                    .any(|technology| technology.to_lowercase().contains(needle.as_str()))
            }
        }
    }
}

impl Display for FilterSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the projects matching `selection` in their original order.
pub fn apply_filter<'a>(projects: &'a [Project], selection: &FilterSelection) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| selection.matches(project))
        .collect()
}

/// Unique technologies in first-seen order, truncated to `limit`.
pub fn popular_technologies(projects: &[Project], limit: usize) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for technology in projects.iter().flat_map(|project| project.technologies.iter()) {
        if seen.len() == limit {
            break;
        }
        if !seen.contains(&technology.as_str()) {
            seen.push(technology.as_str());
        }
    }
    seen
}

/// Classified filter result for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    /// The catalog itself is empty.
    NoProjects,
    /// Projects exist but none match the facet.
    NoMatches,
    Matches(Vec<&'a Project>),
}

/// Filter state owned by the projects grid.
#[derive(Debug, Clone)]
pub struct ProjectFilter<'a> {
    projects: &'a [Project],
    selection: FilterSelection,
}

impl<'a> ProjectFilter<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            selection: FilterSelection::All,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn select(&mut self, selection: FilterSelection) {
        if selection != self.selection {
            debug!(
                "event=filter_select module=filter from={} to={}",
                self.selection, selection
            );
        }
        self.selection = selection;
    }

    /// Returns to the unfiltered view.
    pub fn clear(&mut self) {
        self.select(FilterSelection::All);
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        apply_filter(self.projects, &self.selection)
    }

    pub fn outcome(&self) -> FilterOutcome<'a> {
        if self.projects.is_empty() {
            return FilterOutcome::NoProjects;
        }
        let visible = self.visible();
        if visible.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(visible)
        }
    }
}
