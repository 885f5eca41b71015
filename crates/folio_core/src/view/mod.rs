//! Scroll-driven view state.
//!
//! # Responsibility
//! - Track section layout and visibility for the current page view.
//! - Drive one-shot reveal animations and scroll-spy navigation.
//!
//! # Invariants
//! - Section ids are declared once (`SectionRegistry`) and shared by the
//!   observer and the navigation controller.
//! - All state is single-threaded and lives for one page session.

pub mod animation;
pub mod navigation;
pub mod observer;
pub mod reveal;
pub mod sections;
