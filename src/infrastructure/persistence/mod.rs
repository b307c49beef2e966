//! Concrete repository implementations.
//!
//! # Repositories
//!
//! - [`PgShortRecordRepository`] / [`PgCounterRepository`] - PostgreSQL via
//!   SQLx prepared statements
//! - [`MemoryShortRecordRepository`] / [`MemoryCounterRepository`] - process-local
//!   stores for tests and database-less deployments

pub mod memory;
pub mod pg_counter_repository;
pub mod pg_record_repository;

pub use memory::{MemoryCounterRepository, MemoryShortRecordRepository};
pub use pg_counter_repository::PgCounterRepository;
pub use pg_record_repository::PgShortRecordRepository;
