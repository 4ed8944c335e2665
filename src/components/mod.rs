//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces; pages own the
//! signals and callbacks and pass them down as props.

pub mod agreement_modal;
pub mod cta;
pub mod slideshow;
pub mod status_grid;
