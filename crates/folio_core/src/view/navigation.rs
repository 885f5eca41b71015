//! Scroll-spy navigation controller.
//!
//! # Responsibility
//! - Resolve the active navigation entry from the scroll position.
//! - Perform anchor scrolling and external hand-off on navbar clicks.
//!
//! # Invariants
//! - The state is recomputed from layout on every applied scroll update;
//!   coalesced updates always keep the latest position.
//! - `navigate_to` never panics; unknown targets are logged no-ops.

use crate::config::EngineConfig;
use crate::host::{HostEnvironment, ScrollBehavior};
use crate::model::navigation::{NavTarget, NavigationItem};
use crate::model::section::SectionId;
use crate::view::sections::SectionRegistry;
use log::debug;

/// Section used for the top-of-page state.
pub const HOME_SECTION: &str = "home";

/// Scroll-spy state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavState {
    /// Reference line is above every laid-out section.
    #[default]
    AtTop,
    InSection(SectionId),
}

/// Navbar state machine for one page view.
#[derive(Debug, Clone)]
pub struct NavigationController {
    items: Vec<NavigationItem>,
    state: NavState,
    reference_offset_px: f64,
    scroll_offset_px: f64,
    scrolled_threshold_px: f64,
    scrolled: bool,
    menu_open: bool,
    pending_scroll: Option<f64>,
}

impl NavigationController {
    pub fn new(items: Vec<NavigationItem>, config: &EngineConfig) -> Self {
        Self {
            items,
            state: NavState::AtTop,
            reference_offset_px: config.reference_offset_px,
            scroll_offset_px: config.scroll_offset_px,
            scrolled_threshold_px: config.scrolled_threshold_px,
            scrolled: false,
            menu_open: false,
            pending_scroll: None,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Whether the page has scrolled far enough for the solid navbar style.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Applies one scroll position immediately.
    pub fn on_scroll(&mut self, registry: &SectionRegistry, scroll_y: f64) -> &NavState {
        self.pending_scroll = None;
        self.scrolled = scroll_y > self.scrolled_threshold_px;

        let next = resolve_state(registry, scroll_y + self.reference_offset_px);
        if next != self.state {
            debug!(
                "event=nav_transition module=navigation from={} to={} scroll_y={:.1}",
                describe(&self.state),
                describe(&next),
                scroll_y
            );
            self.state = next;
        }
        &self.state
    }

    /// Records a scroll position to apply on the next `flush`.
    ///
    /// Only the latest queued position is kept.
    pub fn queue_scroll(&mut self, scroll_y: f64) {
        self.pending_scroll = Some(scroll_y);
    }

    /// Applies the latest queued position, if any.
    ///
    /// Returns `true` when a queued position was applied.
    pub fn flush(&mut self, registry: &SectionRegistry) -> bool {
        match self.pending_scroll.take() {
            Some(scroll_y) => {
                self.on_scroll(registry, scroll_y);
                true
            }
            None => false,
        }
    }

    /// Section highlighted in the navbar; the top state maps to `home`.
    pub fn active_section(&self) -> Option<SectionId> {
        match &self.state {
            NavState::InSection(id) => Some(id.clone()),
            NavState::AtTop => self
                .items
                .iter()
                .filter_map(NavigationItem::section)
                .find(|id| id.as_str() == HOME_SECTION)
                .or_else(|| self.items.iter().find_map(NavigationItem::section)),
        }
    }

    /// Navbar entry to highlight.
    pub fn active_nav_item(&self) -> Option<&NavigationItem> {
        let active = self.active_section()?;
        self.items
            .iter()
            .find(|item| item.section().as_ref() == Some(&active))
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    /// Handles a navbar click.
    ///
    /// `#id` targets scroll smoothly to the section; anything else opens in a
    /// new context. Missing sections and malformed targets are no-ops.
    pub fn navigate_to(
        &mut self,
        registry: &SectionRegistry,
        target: &str,
        host: &mut dyn HostEnvironment,
    ) {
        self.menu_open = false;
        match NavTarget::classify(target) {
            NavTarget::Anchor(id) => {
                let Some(section_box) = registry.layout(&id) else {
                    debug!(
                        "event=navigate module=navigation status=skipped reason=section_missing target={}",
                        id
                    );
                    return;
                };
                let y = (section_box.top - self.scroll_offset_px).max(0.0);
                host.scroll_to(y, ScrollBehavior::Smooth);
            }
            NavTarget::External(url) => host.open_external(&url),
            NavTarget::Malformed => {
                debug!(
                    "event=navigate module=navigation status=skipped reason=malformed_target"
                );
            }
        }
    }
}

/// Picks the section for a document-space reference line.
fn resolve_state(registry: &SectionRegistry, line: f64) -> NavState {
    let mut nearest: Option<(&SectionId, f64)> = None;
    let mut topmost = f64::INFINITY;
    for (id, section_box) in registry.laid_out() {
        topmost = topmost.min(section_box.top);
        if section_box.contains(line) {
            return NavState::InSection(id.clone());
        }
        let distance = section_box.distance_to(line);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((id, distance));
        }
    }
    match nearest {
        Some((id, _)) if line >= topmost => NavState::InSection(id.clone()),
        _ => NavState::AtTop,
    }
}

fn describe(state: &NavState) -> String {
    match state {
        NavState::AtTop => "at_top".to_string(),
        NavState::InSection(id) => id.to_string(),
    }
}
