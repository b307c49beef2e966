//! Application layer orchestrating domain logic.
//!
//! - [`services::shorten_service::ShortenService`] - code allocation and creation
//! - [`services::resolve_service::ResolveService`] - code resolution and hit tracking

pub mod services;
