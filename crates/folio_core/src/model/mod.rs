//! Static content records consumed by the view-state engine.
//!
//! # Responsibility
//! - Define the immutable record shapes loaded from the content payload.
//! - Keep identifiers (`SectionId`, project ids) strongly typed.
//!
//! # Invariants
//! - Records are never mutated after the content store is built.
//! - Per-project behavior is declared in data (`ProjectAction`), not
//!   branched on by id in handlers.

pub mod navigation;
pub mod profile;
pub mod project;
pub mod section;
