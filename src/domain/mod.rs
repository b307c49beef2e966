//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - core business data structures
//! - [`repositories`] - data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits are implemented in
//! [`crate::infrastructure::persistence`] and orchestrated by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
