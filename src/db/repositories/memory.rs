//! In-memory repository implementation.
//!
//! The spreadsheet remains the external source of truth for the unit's data,
//! so the backend keeps its working copy in memory. Each entity lives in an
//! arena (a `Vec` preserving insertion order) with a HashMap index from ID to
//! arena slot, all behind one `RwLock`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::db::repository::{
    ContractRepository, PersonnelRepository, RepositoryError, RepositoryResult,
    ScheduleRepository, VehicleRepository,
};
use crate::models::records::{Contract, Personnel, Vehicle, WorkSchedule};

// ==================== Arena ====================

trait Record: Clone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })*
    };
}

impl_record!(Personnel, Vehicle, Contract, WorkSchedule);

/// Ordered record storage with an ID index.
struct Arena<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Arena<T> {
    fn get(&self, id: &str, entity: &str) -> RepositoryResult<T> {
        self.index
            .get(id)
            .map(|&slot| self.records[slot].clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("{entity} '{id}'")))
    }

    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn add(&mut self, mut record: T, entity: &str) -> RepositoryResult<T> {
        if record.id().trim().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        } else if self.index.contains_key(record.id()) {
            return Err(RepositoryError::ValidationError(format!(
                "{entity} '{}' already exists",
                record.id()
            )));
        }
        self.index
            .insert(record.id().to_string(), self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: T, entity: &str) -> RepositoryResult<T> {
        let slot = *self
            .index
            .get(record.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("{entity} '{}'", record.id())))?;
        self.records[slot] = record.clone();
        Ok(record)
    }

    fn delete(&mut self, id: &str, entity: &str) -> RepositoryResult<()> {
        let slot = self
            .index
            .remove(id)
            .ok_or_else(|| RepositoryError::NotFound(format!("{entity} '{id}'")))?;
        self.records.remove(slot);
        // Slots after the removed one shift down by one.
        for idx in self.index.values_mut() {
            if *idx > slot {
                *idx -= 1;
            }
        }
        Ok(())
    }
}

// ==================== Repository ====================

struct Store {
    personnel: Arena<Personnel>,
    vehicles: Arena<Vehicle>,
    contracts: Arena<Contract>,
    schedules: Arena<WorkSchedule>,
    is_healthy: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            personnel: Arena::default(),
            vehicles: Arena::default(),
            contracts: Arena::default(),
            schedules: Arena::default(),
            is_healthy: true,
        }
    }
}

/// In-memory repository.
///
/// Cloning is cheap and shares the underlying store, so one instance can be
/// handed to every request handler.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl MemoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the health status for testing probe failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.store.write().is_healthy = healthy;
    }
}

#[async_trait]
impl PersonnelRepository for MemoryRepository {
    async fn get_personnel(&self, id: &str) -> RepositoryResult<Personnel> {
        self.store.read().personnel.get(id, "personnel")
    }

    async fn list_personnel(&self) -> RepositoryResult<Vec<Personnel>> {
        Ok(self.store.read().personnel.list())
    }

    async fn add_personnel(&self, record: Personnel) -> RepositoryResult<Personnel> {
        self.store.write().personnel.add(record, "personnel")
    }

    async fn update_personnel(&self, record: Personnel) -> RepositoryResult<Personnel> {
        self.store.write().personnel.update(record, "personnel")
    }

    async fn delete_personnel(&self, id: &str) -> RepositoryResult<()> {
        self.store.write().personnel.delete(id, "personnel")
    }
}

#[async_trait]
impl VehicleRepository for MemoryRepository {
    async fn get_vehicle(&self, id: &str) -> RepositoryResult<Vehicle> {
        self.store.read().vehicles.get(id, "vehicle")
    }

    async fn list_vehicles(&self) -> RepositoryResult<Vec<Vehicle>> {
        Ok(self.store.read().vehicles.list())
    }

    async fn add_vehicle(&self, record: Vehicle) -> RepositoryResult<Vehicle> {
        self.store.write().vehicles.add(record, "vehicle")
    }

    async fn update_vehicle(&self, record: Vehicle) -> RepositoryResult<Vehicle> {
        self.store.write().vehicles.update(record, "vehicle")
    }

    async fn delete_vehicle(&self, id: &str) -> RepositoryResult<()> {
        self.store.write().vehicles.delete(id, "vehicle")
    }
}

#[async_trait]
impl ContractRepository for MemoryRepository {
    async fn get_contract(&self, id: &str) -> RepositoryResult<Contract> {
        self.store.read().contracts.get(id, "contract")
    }

    async fn list_contracts(&self) -> RepositoryResult<Vec<Contract>> {
        Ok(self.store.read().contracts.list())
    }

    async fn add_contract(&self, record: Contract) -> RepositoryResult<Contract> {
        self.store.write().contracts.add(record, "contract")
    }

    async fn update_contract(&self, record: Contract) -> RepositoryResult<Contract> {
        self.store.write().contracts.update(record, "contract")
    }

    async fn delete_contract(&self, id: &str) -> RepositoryResult<()> {
        self.store.write().contracts.delete(id, "contract")
    }
}

#[async_trait]
impl ScheduleRepository for MemoryRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.store.read().is_healthy)
    }

    async fn get_schedule(&self, id: &str) -> RepositoryResult<WorkSchedule> {
        self.store.read().schedules.get(id, "schedule")
    }

    async fn list_schedules(&self) -> RepositoryResult<Vec<WorkSchedule>> {
        Ok(self.store.read().schedules.list())
    }

    async fn add_schedule(&self, record: WorkSchedule) -> RepositoryResult<WorkSchedule> {
        self.store.write().schedules.add(record, "schedule")
    }

    async fn update_schedule(&self, record: WorkSchedule) -> RepositoryResult<WorkSchedule> {
        self.store.write().schedules.update(record, "schedule")
    }

    async fn delete_schedule(&self, id: &str) -> RepositoryResult<()> {
        self.store.write().schedules.delete(id, "schedule")
    }
}

// ==================== Tests ====================
