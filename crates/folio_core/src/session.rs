//! Page session composition root.
//!
//! # Responsibility
//! - Wire content, observer, reveal latches, navigation, filter, résumé tabs
//!   and contact form for one page view.
//! - Feed viewport updates to every consumer in one step.
//!
//! # Invariants
//! - The section registry is built once from navigation anchors and shared
//!   by observation and navigation.
//! - Unmounting a section releases its observation.

use crate::config::EngineConfig;
use crate::content::ContentStore;
use crate::host::HostEnvironment;
use crate::model::section::SectionId;
use crate::model::project::Project;
use crate::service::contact::{ContactForm, ContactTransport, SubmitBanner, SubmitRejected};
use crate::service::filter::ProjectFilter;
use crate::service::resume::ResumeTabs;
use crate::service::routing::truncate_text;
use crate::view::animation::Typewriter;
use crate::view::navigation::{NavState, NavigationController};
use crate::view::observer::{ObservationHandle, ObserverError, ViewportObserver};
use crate::view::reveal::RevealAnimator;
use crate::view::sections::{SectionBox, SectionRegistry};
use log::{info, warn};
use std::collections::BTreeMap;
use std::time::Duration;

const HERO_TITLE_SPEED: Duration = Duration::from_millis(80);

/// View state for one page view.
pub struct PageSession<'a> {
    store: &'a ContentStore,
    config: EngineConfig,
    registry: SectionRegistry,
    observer: ViewportObserver,
    observations: BTreeMap<SectionId, ObservationHandle>,
    reveal: RevealAnimator,
    navigation: NavigationController,
    filter: ProjectFilter<'a>,
    resume: ResumeTabs,
    contact: ContactForm,
}

impl<'a> PageSession<'a> {
    /// Builds a session; `observation_available = false` selects the
    /// always-visible fallback.
    pub fn new(store: &'a ContentStore, config: EngineConfig, observation_available: bool) -> Self {
        let registry = SectionRegistry::new(store.sections().iter().cloned());
        let observer = if observation_available {
            ViewportObserver::new()
        } else {
            warn!("event=session_start module=session status=degraded reason=observer_unavailable");
            ViewportObserver::unavailable()
        };
        info!(
            "event=session_start module=session sections={} projects={}",
            registry.ids().len(),
            store.projects().len()
        );
        Self {
            store,
            navigation: NavigationController::new(store.navigation().to_vec(), &config),
            filter: ProjectFilter::new(store.projects()),
            contact: ContactForm::from_config(&config),
            config,
            registry,
            observer,
            observations: BTreeMap::new(),
            reveal: RevealAnimator::new(),
            resume: ResumeTabs::new(),
        }
    }

    pub fn store(&self) -> &'a ContentStore {
        self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Records a measured section box; undeclared ids are ignored.
    pub fn set_layout(&mut self, section: &SectionId, section_box: SectionBox) -> bool {
        self.registry.set_layout(section, section_box)
    }

    /// Starts observing `section` at the configured reveal threshold.
    ///
    /// Re-watching replaces the previous observation.
    pub fn watch(&mut self, section: &SectionId) -> Result<(), ObserverError> {
        let handle =
            self.observer
                .observe(&self.registry, section, self.config.reveal_threshold)?;
        self.reveal.absorb(&handle);
        self.observations.insert(section.clone(), handle);
        Ok(())
    }

    /// Observes every declared section.
    pub fn watch_sections(&mut self) -> Result<(), ObserverError> {
        let sections = self.registry.ids().to_vec();
        for section in &sections {
            self.watch(section)?;
        }
        Ok(())
    }

    /// Releases the observation and layout of a removed section.
    ///
    /// The reveal latch stays set.
    pub fn unmount(&mut self, section: &SectionId) {
        self.observations.remove(section);
        self.registry.clear_layout(section);
    }

    /// Applies one viewport update to observation, reveal and scroll-spy.
    pub fn on_viewport(&mut self, scroll_y: f64, viewport_height: f64) -> &NavState {
        self.observer
            .report_viewport(&self.registry, scroll_y, viewport_height);
        for handle in self.observations.values() {
            self.reveal.absorb(handle);
        }
        self.navigation.on_scroll(&self.registry, scroll_y)
    }

    /// Handles a navbar click.
    pub fn navigate_to(&mut self, target: &str, host: &mut dyn HostEnvironment) {
        self.navigation.navigate_to(&self.registry, target, host);
    }

    pub fn should_reveal(&self, section: &SectionId) -> bool {
        self.reveal.should_reveal(section)
    }

    pub fn active_observations(&self) -> usize {
        self.observer.active_registrations()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    pub fn filter(&self) -> &ProjectFilter<'a> {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut ProjectFilter<'a> {
        &mut self.filter
    }

    pub fn resume(&self) -> &ResumeTabs {
        &self.resume
    }

    pub fn resume_mut(&mut self) -> &mut ResumeTabs {
        &mut self.resume
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Submits the contact form bounded by the configured timeout.
    pub async fn submit_contact<T: ContactTransport>(
        &mut self,
        transport: &T,
    ) -> Result<SubmitBanner, SubmitRejected> {
        let timeout = self.config.submit_timeout();
        self.contact.submit(transport, timeout).await
    }

    /// Typed-out hero title.
    pub fn hero_title(&self) -> Typewriter {
        Typewriter::new(self.store.personal_info().title.clone(), HERO_TITLE_SPEED)
    }

    /// Card description shortened to the configured preview length.
    pub fn card_preview(&self, project: &Project) -> String {
        truncate_text(&project.description, self.config.description_preview_chars)
    }
}
