//! Networking modules for the HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls (hydrate-gated, with SSR stubs) and owns
//! the counts-fetcher capability; `types` defines the wire DTOs.

pub mod api;
pub mod types;
