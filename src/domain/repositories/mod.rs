//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShortRecordRepository`] - short record insert/lookup/hit tracking
//! - [`CounterRepository`] - atomic sequential allocation

pub mod counter_repository;
pub mod record_repository;

pub use counter_repository::CounterRepository;
pub use record_repository::ShortRecordRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use record_repository::MockShortRecordRepository;
