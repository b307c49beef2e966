//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns:
//!
//! - [`ShortRecord`] - a code-to-URL mapping with usage metadata
//! - [`NewShortRecord`] - input for creating a record
//!
//! The allocation counter has no entity of its own: it is a singleton
//! integer reachable only through
//! [`crate::domain::repositories::CounterRepository`].

pub mod short_record;

pub use short_record::{NewShortRecord, ShortRecord};
