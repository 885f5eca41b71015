//! One-shot reveal latches.
//!
//! # Invariants
//! - A latch only moves `false -> true`; nothing resets it during a session.
//! - Repeated or out-of-order visibility reports are harmless.

use crate::model::section::SectionId;
use crate::view::observer::ObservationHandle;
use log::debug;
use std::collections::BTreeSet;

/// Per-section "has been revealed" state.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    revealed: BTreeSet<SectionId>,
    order: Vec<SectionId>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section's transition-in should be (or stay) applied.
    pub fn should_reveal(&self, section: &SectionId) -> bool {
        self.revealed.contains(section)
    }

    /// Latches `section` when `visible` is true.
    ///
    /// Returns `true` only for the call that flipped the latch.
    pub fn mark_revealed_if_visible(&mut self, section: &SectionId, visible: bool) -> bool {
        if !visible || self.revealed.contains(section) {
            return false;
        }
        self.revealed.insert(section.clone());
        self.order.push(section.clone());
        debug!("event=section_reveal module=reveal section={}", section);
        true
    }

    /// Applies every queued visibility event of `handle`.
    ///
    /// Returns `true` when the handle's section was newly revealed.
    pub fn absorb(&mut self, handle: &ObservationHandle) -> bool {
        let mut flipped = false;
        for event in handle.drain() {
            flipped |= self.mark_revealed_if_visible(&event.section, true);
        }
        flipped
    }

    /// Revealed sections in reveal order.
    pub fn revealed_sections(&self) -> &[SectionId] {
        &self.order
    }
}
