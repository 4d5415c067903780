//! Contract repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::records::Contract;

/// Repository trait for customer contract records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Retrieve one contract by ID.
    ///
    /// # Returns
    /// * `Ok(Contract)` - The record
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn get_contract(&self, id: &str) -> RepositoryResult<Contract>;

    /// List all contracts in insertion order.
    async fn list_contracts(&self) -> RepositoryResult<Vec<Contract>>;

    /// Store a new contract.
    ///
    /// # Arguments
    /// * `record` - The record to store; a blank `id` is assigned one
    ///
    /// # Returns
    /// * `Ok(Contract)` - The stored record including its assigned ID
    /// * `Err(RepositoryError::ValidationError)` - If the ID is already taken
    async fn add_contract(&self, record: Contract) -> RepositoryResult<Contract>;

    /// Replace an existing contract.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn update_contract(&self, record: Contract) -> RepositoryResult<Contract>;

    /// Delete a contract by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn delete_contract(&self, id: &str) -> RepositoryResult<()>;
}
