//! Read-only content store.
//!
//! # Responsibility
//! - Parse the static site payload (projects, résumé, links, navigation).
//! - Validate identity invariants once, at load time.
//! - Serve lookups by id to the filter, routing and page collaborators.
//!
//! # Invariants
//! - Project ids are unique; every project has a unique, non-empty route.
//! - Navigation anchors name valid, distinct section ids.
//! - The store is never mutated after construction.

use crate::model::navigation::{ExternalLink, NavTarget, NavigationItem};
use crate::model::profile::{
    Certification, Education, Experience, PersonalInfo, SkillCategory, SocialLink,
};
use crate::model::project::{Project, ProjectId};
use crate::model::section::SectionId;
use log::{error, info};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const BUNDLED_SITE_JSON: &str = include_str!("../content/site.json");

static BUNDLED_STORE: OnceCell<ContentStore> = OnceCell::new();

/// Content load/validation error.
#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateProjectId(ProjectId),
    MissingRoute(ProjectId),
    DuplicateRoute(String),
    InvalidSectionHref(String),
    DuplicateSection(SectionId),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read content payload: {err}"),
            Self::Parse(err) => write!(f, "invalid content payload: {err}"),
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id: {id}"),
            Self::MissingRoute(id) => write!(f, "project {id} has no detail route"),
            Self::DuplicateRoute(route) => write!(f, "detail route used twice: `{route}`"),
            Self::InvalidSectionHref(href) => {
                write!(f, "navigation anchor is not a valid section: `{href}`")
            }
            Self::DuplicateSection(id) => write!(f, "section declared twice: {id}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ContentError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Raw payload shape as authored on disk.
#[derive(Debug, Deserialize)]
struct ContentPayload {
    personal_info: PersonalInfo,
    navigation: Vec<NavigationItem>,
    #[serde(default)]
    external_links: Vec<ExternalLink>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
    #[serde(default)]
    skills: Vec<SkillCategory>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    experience: Vec<Experience>,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    certifications: Vec<Certification>,
}

/// Validated, immutable site content.
#[derive(Debug, Clone)]
pub struct ContentStore {
    personal_info: PersonalInfo,
    navigation: Vec<NavigationItem>,
    sections: Vec<SectionId>,
    external_links: Vec<ExternalLink>,
    social_links: Vec<SocialLink>,
    skills: Vec<SkillCategory>,
    projects: Vec<Project>,
    project_index: BTreeMap<ProjectId, usize>,
    experience: Vec<Experience>,
    education: Vec<Education>,
    certifications: Vec<Certification>,
}

impl ContentStore {
    /// Returns the payload compiled into the crate, parsed once per process.
    ///
    /// # Errors
    /// - Returns the parse/validation error if the bundled payload is broken.
    pub fn bundled() -> Result<&'static ContentStore, ContentError> {
        BUNDLED_STORE.get_or_try_init(|| {
            let store = Self::from_json(BUNDLED_SITE_JSON)?;
            info!(
                "event=content_load module=content status=ok source=bundled projects={} sections={}",
                store.projects.len(),
                store.sections.len()
            );
            Ok(store)
        })
    }

    /// Loads and validates a payload file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            error!(
                "event=content_load module=content status=error path={} error={}",
                path.display(),
                err
            );
            ContentError::Io(err)
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let payload: ContentPayload = serde_json::from_str(raw)?;
        Self::from_payload(payload)
    }

    fn from_payload(payload: ContentPayload) -> Result<Self, ContentError> {
        let mut project_index = BTreeMap::new();
        let mut routes = BTreeSet::new();
        for (position, project) in payload.projects.iter().enumerate() {
            if project_index.insert(project.id, position).is_some() {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            let route = project.route.trim();
            if route.is_empty() {
                return Err(ContentError::MissingRoute(project.id));
            }
            if !routes.insert(route.to_string()) {
                return Err(ContentError::DuplicateRoute(route.to_string()));
            }
        }

        let mut sections = Vec::new();
        for item in &payload.navigation {
            match NavTarget::classify(&item.href) {
                NavTarget::Anchor(id) => {
                    if sections.contains(&id) {
                        return Err(ContentError::DuplicateSection(id));
                    }
                    sections.push(id);
                }
                NavTarget::External(_) => {}
                NavTarget::Malformed => {
                    return Err(ContentError::InvalidSectionHref(item.href.clone()));
                }
            }
        }

        Ok(Self {
            personal_info: payload.personal_info,
            navigation: payload.navigation,
            sections,
            external_links: payload.external_links,
            social_links: payload.social_links,
            skills: payload.skills,
            projects: payload.projects,
            project_index,
            experience: payload.experience,
            education: payload.education,
            certifications: payload.certifications,
        })
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn navigation(&self) -> &[NavigationItem] {
        &self.navigation
    }

    /// Section ids in navigation order.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    /// Projects in authored order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.project_index
            .get(&id)
            .and_then(|position| self.projects.get(*position))
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }
}
