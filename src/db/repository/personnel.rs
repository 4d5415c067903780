//! Personnel repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::records::Personnel;

/// Repository trait for personnel records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PersonnelRepository: Send + Sync {
    /// Retrieve one personnel record by ID.
    ///
    /// # Arguments
    /// * `id` - The ID of the record to retrieve
    ///
    /// # Returns
    /// * `Ok(Personnel)` - The record
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn get_personnel(&self, id: &str) -> RepositoryResult<Personnel>;

    /// List all personnel records in insertion order.
    async fn list_personnel(&self) -> RepositoryResult<Vec<Personnel>>;

    /// Store a new personnel record.
    ///
    /// # Arguments
    /// * `record` - The record to store; a blank `id` is assigned one
    ///
    /// # Returns
    /// * `Ok(Personnel)` - The stored record including its assigned ID
    /// * `Err(RepositoryError::ValidationError)` - If the ID is already taken
    async fn add_personnel(&self, record: Personnel) -> RepositoryResult<Personnel>;

    /// Replace an existing personnel record.
    ///
    /// # Arguments
    /// * `record` - The full replacement record; `record.id` selects the target
    ///
    /// # Returns
    /// * `Ok(Personnel)` - The stored record
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn update_personnel(&self, record: Personnel) -> RepositoryResult<Personnel>;

    /// Delete a personnel record by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn delete_personnel(&self, id: &str) -> RepositoryResult<()>;
}
