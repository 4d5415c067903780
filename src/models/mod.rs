//! Domain models for the maintenance unit.
//!
//! - [`records`]: validated entity records (personnel, vehicles, contracts,
//!   work schedules)
//! - [`rows`]: schema-validated decoding of spreadsheet-shaped rows
//! - [`time`]: date + time-of-day combination helpers

pub mod records;
pub mod rows;
pub mod time;

pub use records::{Contract, ContractStatus, Personnel, Vehicle, VehicleKind, WorkSchedule};
pub use rows::{decode_schedule_row, SchemaMismatch};
