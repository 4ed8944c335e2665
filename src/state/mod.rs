//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`status`, `home`, `agreement`) so individual
//! components can depend on small focused models. Pages wrap these in
//! `RwSignal`s; the structs themselves stay plain and unit-testable.

pub mod agreement;
pub mod home;
pub mod status;
