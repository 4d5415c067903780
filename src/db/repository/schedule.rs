//! Work schedule repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::records::WorkSchedule;

/// Repository trait for work schedule records.
///
/// Besides CRUD this trait carries the storage health probe, since the
/// schedule store is the one every request path touches.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // ==================== Health ====================

    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Schedule Operations ====================

    /// Retrieve one work schedule by ID.
    ///
    /// # Returns
    /// * `Ok(WorkSchedule)` - The record
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn get_schedule(&self, id: &str) -> RepositoryResult<WorkSchedule>;

    /// List all work schedules in insertion order.
    async fn list_schedules(&self) -> RepositoryResult<Vec<WorkSchedule>>;

    /// Store a new work schedule.
    ///
    /// # Arguments
    /// * `record` - The record to store; a blank `id` is assigned one
    ///
    /// # Returns
    /// * `Ok(WorkSchedule)` - The stored record including its assigned ID
    /// * `Err(RepositoryError::ValidationError)` - If the ID is already taken
    async fn add_schedule(&self, record: WorkSchedule) -> RepositoryResult<WorkSchedule>;

    /// Replace an existing work schedule.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn update_schedule(&self, record: WorkSchedule) -> RepositoryResult<WorkSchedule>;

    /// Delete a work schedule by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn delete_schedule(&self, id: &str) -> RepositoryResult<()>;
}
