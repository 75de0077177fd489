//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own reply generation so route handlers can stay focused
//! on form parsing and status-code mapping.

pub mod context;
pub mod fallback;
pub mod responder;
