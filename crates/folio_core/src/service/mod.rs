//! Page use-case services.
//!
//! # Responsibility
//! - Pure rules over content (filtering, routing) and form state.
//! - Keep host/UI layers free of business rules.

pub mod contact;
pub mod filter;
pub mod resume;
pub mod routing;
