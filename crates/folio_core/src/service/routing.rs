//! Project detail routing and card actions.
//!
//! # Responsibility
//! - Map project ids to detail pages, with an explicit not-found result.
//! - Dispatch card buttons through their declared `ProjectAction`.
//!
//! # Invariants
//! - Unknown ids never panic; they resolve to `NotFound`.

use crate::content::ContentStore;
use crate::host::HostEnvironment;
use crate::model::project::{ActionEffect, Project, ProjectId};
use log::debug;

/// Destination of a "read more" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution<'a> {
    Detail(&'a str),
    NotFound,
}

/// What a detail page should render for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found(&'a Project),
    NotFound,
}

pub fn resolve_route(store: &ContentStore, id: ProjectId) -> RouteResolution<'_> {
    match store.project(id) {
        Some(project) => RouteResolution::Detail(project.route.trim()),
        None => RouteResolution::NotFound,
    }
}

pub fn detail_view(store: &ContentStore, id: ProjectId) -> DetailView<'_> {
    match store.project(id) {
        Some(project) => DetailView::Found(project),
        None => {
            debug!("event=detail_view module=routing status=not_found project_id={id}");
            DetailView::NotFound
        }
    }
}

/// Opens the detail page for `id`; unknown ids are logged no-ops.
pub fn open_details(store: &ContentStore, id: ProjectId, host: &mut dyn HostEnvironment) {
    match resolve_route(store, id) {
        RouteResolution::Detail(path) => host.open_route(path),
        RouteResolution::NotFound => {
            debug!("event=open_details module=routing status=not_found project_id={id}");
        }
    }
}

/// Handles the "live demo" button.
pub fn dispatch_live(project: &Project, host: &mut dyn HostEnvironment) {
    perform(project.live_effect(), host);
}

/// Handles the "source code" button.
pub fn dispatch_code(project: &Project, host: &mut dyn HostEnvironment) {
    perform(project.code_effect(), host);
}

fn perform(effect: ActionEffect, host: &mut dyn HostEnvironment) {
    match effect {
        ActionEffect::OpenExternal(url) => host.open_external(&url),
        ActionEffect::Notice(message) => host.show_notice(&message),
        ActionEffect::Nothing => {}
    }
}

/// Cuts `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn truncate_keeps_short_text_and_marks_cut_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("ééééé", 2), "éé...");
    }
}
