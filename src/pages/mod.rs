//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (timers, fetches, navigation)
//! and delegates rendering details to `components`.

pub mod create_order;
pub mod home;
pub mod landing;
pub mod orders;
pub mod profile;
