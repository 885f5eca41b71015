//! Section declarations and live layout boxes.

use crate::model::section::SectionId;
use std::collections::BTreeMap;

/// Vertical extent of one section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < bottom`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Distance from `y` to the nearest edge, zero when contained.
    pub fn distance_to(&self, y: f64) -> f64 {
        if self.contains(y) {
            0.0
        } else if y < self.top {
            self.top - y
        } else {
            y - self.bottom()
        }
    }

    /// Fraction of this box inside the viewport `[scroll_y, scroll_y + viewport_height)`.
    ///
    /// Zero-height boxes never intersect.
    pub fn visible_ratio(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        if self.height <= 0.0 || viewport_height <= 0.0 {
            return 0.0;
        }
        let visible_top = self.top.max(scroll_y);
        let visible_bottom = self.bottom().min(scroll_y + viewport_height);
        ((visible_bottom - visible_top).max(0.0) / self.height).clamp(0.0, 1.0)
    }
}

/// Ordered section declarations with optional measured layout.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    order: Vec<SectionId>,
    layout: BTreeMap<SectionId, SectionBox>,
}

impl SectionRegistry {
    /// Declares sections in page order; duplicates keep their first position.
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        let mut order = Vec::new();
        for id in sections {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        Self {
            order,
            layout: BTreeMap::new(),
        }
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.order.contains(id)
    }

    pub fn ids(&self) -> &[SectionId] {
        &self.order
    }

    pub fn first(&self) -> Option<&SectionId> {
        self.order.first()
    }

    /// Records the measured box of a declared section.
    ///
    /// Returns `false` (and records nothing) for undeclared ids.
    pub fn set_layout(&mut self, id: &SectionId, section_box: SectionBox) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.layout.insert(id.clone(), section_box);
        true
    }

    /// Forgets the measured box, e.g. when the section unmounts.
    pub fn clear_layout(&mut self, id: &SectionId) {
        self.layout.remove(id);
    }

    pub fn layout(&self, id: &SectionId) -> Option<SectionBox> {
        self.layout.get(id).copied()
    }

    /// Laid-out sections in page order.
    pub fn laid_out(&self) -> impl Iterator<Item = (&SectionId, SectionBox)> {
        self.order
            .iter()
            .filter_map(|id| self.layout.get(id).map(|section_box| (id, *section_box)))
    }
}
