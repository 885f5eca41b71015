//! View-state engine for a single-page portfolio site.
//! Content, filtering, form rules and scroll-driven state live here; the
//! page host only renders and forwards events.

pub mod config;
pub mod content;
pub mod host;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod view;

pub use config::{ConfigError, EngineConfig};
pub use content::{ContentError, ContentStore};
pub use host::{HostCall, HostEnvironment, RecordingHost, ScrollBehavior};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::navigation::{ExternalLink, NavTarget, NavigationItem};
pub use model::profile::{
    Certification, Education, Experience, PersonalInfo, SkillCategory, SocialLink,
};
pub use model::project::{ActionEffect, ActionKind, Project, ProjectAction, ProjectId};
pub use model::section::{SectionId, SectionIdError};
pub use service::contact::{
    validate, validate_with, ContactForm, ContactTransport, FieldError, FormDraft, FormErrors,
    FormField, SimulatedTransport, SubmitBanner, SubmitRejected, SubmitStateError, SubmitStatus,
    TransportError,
};
pub use service::filter::{
    apply_filter, popular_technologies, FilterOutcome, FilterSelection, ProjectFilter,
};
pub use service::resume::{ResumeTab, ResumeTabs};
pub use service::routing::{
    detail_view, dispatch_code, dispatch_live, open_details, resolve_route, truncate_text,
    DetailView, RouteResolution,
};
pub use session::PageSession;
pub use view::animation::{
    particle_field, stagger_delay, Particle, Typewriter, DEFAULT_TYPEWRITER_SPEED,
    TIMELINE_STAGGER,
};
pub use view::navigation::{NavState, NavigationController};
pub use view::observer::{ObservationHandle, ObserverError, ViewportObserver, VisibilityEvent};
pub use view::reveal::RevealAnimator;
pub use view::sections::{SectionBox, SectionRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
