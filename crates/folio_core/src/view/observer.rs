//! Viewport observer with scoped registrations.
//!
//! # Responsibility
//! - Track, per registration, whether a section crossed its visibility
//!   threshold and queue exactly one event when it does.
//! - Release registrations when their handle is dropped.
//! - Degrade to "always visible" when the runtime cannot observe.
//! - Evaluate a new registration against the last reported viewport.
//!
//! # Invariants
//! - One registration fires at most once; re-crossing needs a new handle.
//! - Registrations never share event queues.
//! - A dropped handle leaves no registration behind.

use crate::model::section::SectionId;
use crate::view::sections::SectionRegistry;
use log::debug;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

/// Visibility notification for one registration.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEvent {
    pub section: SectionId,
    /// Ratio reported when the threshold was crossed.
    pub ratio: f64,
}

/// Observation setup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    UnknownSection(SectionId),
}

impl Display for ObserverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSection(id) => write!(f, "section is not registered: {id}"),
        }
    }
}

impl Error for ObserverError {}

#[derive(Debug)]
struct Registration {
    section: SectionId,
    threshold: f64,
    last_ratio: f64,
    fired: bool,
    queue: VecDeque<VisibilityEvent>,
}

impl Registration {
    /// Records `ratio`; returns `true` when it fires this registration.
    fn record(&mut self, ratio: f64) -> bool {
        self.last_ratio = ratio;
        if self.fired || !self.meets(ratio) {
            return false;
        }
        self.fired = true;
        self.queue.push_back(VisibilityEvent {
            section: self.section.clone(),
            ratio,
        });
        true
    }

    fn meets(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

#[derive(Debug, Default)]
struct ObserverState {
    next_id: u64,
    registrations: BTreeMap<u64, Registration>,
    /// Last `(scroll_y, viewport_height)` passed to `report_viewport`.
    viewport: Option<(f64, f64)>,
}

/// Intersection tracker for the sections of one page view.
#[derive(Debug)]
pub struct ViewportObserver {
    available: bool,
    state: Rc<RefCell<ObserverState>>,
}

impl ViewportObserver {
    /// Observer for a runtime with intersection support.
    pub fn new() -> Self {
        Self {
            available: true,
            state: Rc::new(RefCell::new(ObserverState::default())),
        }
    }

    /// Observer for a runtime without intersection support.
    ///
    /// Every registration reports visible immediately so content still renders.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Registers one observation of `section` at `threshold` (clamped to `0..=1`).
    ///
    /// # Errors
    /// - `ObserverError::UnknownSection` when `section` is not declared in `registry`.
    pub fn observe(
        &self,
        registry: &SectionRegistry,
        section: &SectionId,
        threshold: f64,
    ) -> Result<ObservationHandle, ObserverError> {
        if !registry.contains(section) {
            return Err(ObserverError::UnknownSection(section.clone()));
        }
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };

        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;

        let mut registration = Registration {
            section: section.clone(),
            threshold,
            last_ratio: 0.0,
            fired: false,
            queue: VecDeque::new(),
        };
        if !self.available {
            registration.record(1.0);
            debug!(
                "event=observe_fallback module=observer section={} status=always_visible",
                section
            );
        } else if let Some((scroll_y, viewport_height)) = state.viewport {
            let initial = registry
                .layout(section)
                .map(|section_box| section_box.visible_ratio(scroll_y, viewport_height));
            if let Some(ratio) = initial {
                if registration.record(ratio) {
                    debug!(
                        "event=section_visible module=observer section={} ratio={:.3} threshold={:.3} initial=true",
                        section, ratio, threshold
                    );
                }
            }
        }
        state.registrations.insert(id, registration);

        Ok(ObservationHandle {
            id,
            section: section.clone(),
            state: Rc::downgrade(&self.state),
        })
    }

    /// Feeds the current visible fraction of one section.
    ///
    /// Out-of-range ratios are clamped; NaN counts as zero.
    pub fn report_ratio(&self, section: &SectionId, ratio: f64) {
        if !self.available {
            return;
        }
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };

        let mut state = self.state.borrow_mut();
        for registration in state
            .registrations
            .values_mut()
            .filter(|registration| &registration.section == section)
        {
            if !registration.record(ratio) {
                continue;
            }
            debug!(
                "event=section_visible module=observer section={} ratio={:.3} threshold={:.3}",
                section, ratio, registration.threshold
            );
        }
    }

    /// Derives ratios for every laid-out section from the viewport and reports them.
    pub fn report_viewport(&self, registry: &SectionRegistry, scroll_y: f64, viewport_height: f64) {
        self.state.borrow_mut().viewport = Some((scroll_y, viewport_height));
        for (section, section_box) in registry.laid_out() {
            self.report_ratio(section, section_box.visible_ratio(scroll_y, viewport_height));
        }
    }

    /// Number of live registrations.
    pub fn active_registrations(&self) -> usize {
        self.state.borrow().registrations.len()
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped observation; dropping it releases the registration.
#[derive(Debug)]
pub struct ObservationHandle {
    id: u64,
    section: SectionId,
    state: Weak<RefCell<ObserverState>>,
}

impl ObservationHandle {
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// Takes the next queued event.
    pub fn poll(&self) -> Option<VisibilityEvent> {
        let state = self.state.upgrade()?;
        let mut state = state.borrow_mut();
        state
            .registrations
            .get_mut(&self.id)
            .and_then(|registration| registration.queue.pop_front())
    }

    /// Takes every queued event in arrival order.
    pub fn drain(&self) -> Vec<VisibilityEvent> {
        std::iter::from_fn(|| self.poll()).collect()
    }

    /// Whether this registration has crossed its threshold.
    pub fn has_fired(&self) -> bool {
        self.with_registration(|registration| registration.fired)
            .unwrap_or(false)
    }

    /// Most recent ratio seen by this registration.
    pub fn last_ratio(&self) -> f64 {
        self.with_registration(|registration| registration.last_ratio)
            .unwrap_or(0.0)
    }

    /// Releases the registration now.
    pub fn release(self) {}

    fn with_registration<T>(&self, read: impl FnOnce(&Registration) -> T) -> Option<T> {
        let state = self.state.upgrade()?;
        let state = state.borrow();
        state.registrations.get(&self.id).map(read)
    }
}

impl Drop for ObservationHandle {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let removed = state.borrow_mut().registrations.remove(&self.id);
        if removed.is_some() {
            debug!(
                "event=observe_release module=observer section={}",
                self.section
            );
        }
    }
}
