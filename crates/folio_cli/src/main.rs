//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage and the bundled content payload.
//! - Print deterministic filter/route/validation diagnostics.
//! - Write logs when `FOLIO_LOG_DIR` names an absolute directory.

use folio_core::{
    apply_filter, popular_technologies, resolve_route, validate, ContentStore, EngineConfig,
    FilterSelection, FormDraft, FormField, LogLevel, RouteResolution,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "FOLIO_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = folio_core::init_logging(LogLevel::build_default().as_str(), &log_dir) {
            eprintln!("folio_core logging disabled: {err}");
        }
    }

    let store = match ContentStore::bundled() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("folio_core content error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = EngineConfig::default();

    println!("folio_core version={}", folio_core::core_version());
    println!(
        "content projects={} sections={}",
        store.projects().len(),
        store.sections().len()
    );

    let mut facets = vec![FilterSelection::All, FilterSelection::Featured];
    facets.extend(
        popular_technologies(store.projects(), config.popular_technology_limit)
            .into_iter()
            .map(|tag| FilterSelection::Tech(tag.to_string())),
    );
    for facet in &facets {
        let ids: Vec<String> = apply_filter(store.projects(), facet)
            .iter()
            .map(|project| project.id.to_string())
            .collect();
        println!("filter {facet} -> [{}]", ids.join(","));
    }

    for project in store.projects() {
        let route = match resolve_route(store, project.id) {
            RouteResolution::Detail(path) => path,
            RouteResolution::NotFound => "<not found>",
        };
        println!("route {} -> {route}", project.id);
    }

    let sample = FormDraft {
        name: String::new(),
        email: "bad".to_string(),
        subject: String::new(),
        message: "short".to_string(),
    };
    let errors = validate(&sample);
    for field in FormField::ALL {
        if let Some(message) = errors.message(field) {
            println!("validate {} -> {message}", field.as_str());
        }
    }

    ExitCode::SUCCESS
}
