//! Storage layer: repository traits, the in-memory backend, and the
//! import/seed plumbing built on top of them.
//!
//! # Module Organization
//!
//! - [`repository`]: Focused per-entity repository traits and error types
//! - [`repositories`]: Repository implementations ([`MemoryRepository`])
//! - [`checksum`]: SHA-256 versioning of import payloads
//! - [`services`]: Orchestration functions the request handlers call
//! - [`seed`]: Explicit demo dataset injection

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

pub use checksum::calculate_checksum;
pub use repositories::MemoryRepository;
pub use repository::{
    ContractRepository, FullRepository, PersonnelRepository, RepositoryError, RepositoryResult,
    ScheduleRepository, VehicleRepository,
};
