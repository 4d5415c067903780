//! Vehicle repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::records::Vehicle;

/// Repository trait for fleet vehicle records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Retrieve one vehicle by ID.
    ///
    /// # Returns
    /// * `Ok(Vehicle)` - The record
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn get_vehicle(&self, id: &str) -> RepositoryResult<Vehicle>;

    /// List all vehicles in insertion order.
    async fn list_vehicles(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Store a new vehicle.
    ///
    /// # Arguments
    /// * `record` - The record to store; a blank `id` is assigned one
    ///
    /// # Returns
    /// * `Ok(Vehicle)` - The stored record including its assigned ID
    /// * `Err(RepositoryError::ValidationError)` - If the ID is already taken
    async fn add_vehicle(&self, record: Vehicle) -> RepositoryResult<Vehicle>;

    /// Replace an existing vehicle.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn update_vehicle(&self, record: Vehicle) -> RepositoryResult<Vehicle>;

    /// Delete a vehicle by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn delete_vehicle(&self, id: &str) -> RepositoryResult<()>;
}
