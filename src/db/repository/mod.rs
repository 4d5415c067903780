//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract storage operations. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`personnel`]: CRUD operations for crew records
//! - [`vehicle`]: CRUD operations for fleet vehicles
//! - [`contract`]: CRUD operations for customer contracts
//! - [`schedule`]: CRUD operations for work schedules plus the health probe
//!
//! # Trait Composition
//!
//! A complete repository implementation typically implements all traits:
//!
//! ```ignore
//! impl PersonnelRepository for MyRepo { ... }
//! impl VehicleRepository for MyRepo { ... }
//! impl ContractRepository for MyRepo { ... }
//! impl ScheduleRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let crew = repo.list_personnel().await?;
//!     let jobs = repo.list_schedules().await?;
//!     Ok(())
//! }
//! ```

pub mod contract;
pub mod error;
pub mod personnel;
pub mod schedule;
pub mod vehicle;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use contract::ContractRepository;
pub use personnel::PersonnelRepository;
pub use schedule::ScheduleRepository;
pub use vehicle::VehicleRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// all four repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
pub trait FullRepository:
    PersonnelRepository + VehicleRepository + ContractRepository + ScheduleRepository
{
}

// Blanket implementation: any type implementing all four traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: PersonnelRepository + VehicleRepository + ContractRepository + ScheduleRepository
{
}
