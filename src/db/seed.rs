//! Demo dataset for local development.
//!
//! Seeding is explicit and injected at startup (see the server binary and
//! the `seed_demo_data` config flag); nothing is populated implicitly.

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::records::{
    Contract, ContractStatus, Personnel, Vehicle, VehicleKind, WorkSchedule,
};

/// Populate a repository with a small, self-consistent demo dataset.
///
/// The dataset references itself by ID (schedules point at seeded contracts,
/// personnel, and vehicles) so the calendar and dashboard views have
/// something meaningful to show.
pub async fn seed_demo_data<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
    let crew = [
        ("p-1", "A. V. Ivanov", "test engineer", 4, "+7 900 111-22-33"),
        ("p-2", "S. P. Orlov", "electrical fitter", 3, "+7 900 222-33-44"),
        ("p-3", "M. K. Belova", "lab technician", 3, "+7 900 333-44-55"),
    ];
    for (id, full_name, position, safety_group, phone) in crew {
        repo.add_personnel(Personnel {
            id: id.into(),
            full_name: full_name.into(),
            position: position.into(),
            safety_group: Some(safety_group),
            phone: Some(phone.into()),
        })
        .await?;
    }

    repo.add_vehicle(Vehicle {
        id: "v-1".into(),
        name: "Mobile test lab".into(),
        plate_number: "AB 123 CD".into(),
        kind: VehicleKind::Laboratory,
        inspection_due: Some("2026-11-01".into()),
    })
    .await?;
    repo.add_vehicle(Vehicle {
        id: "v-2".into(),
        name: "Crew van".into(),
        plate_number: "EF 456 GH".into(),
        kind: VehicleKind::Van,
        inspection_due: Some("2026-09-15".into()),
    })
    .await?;

    repo.add_contract(Contract {
        id: "c-1".into(),
        number: "2026/014".into(),
        customer: "Gorvodokanal".into(),
        starts_on: "2026-01-10".into(),
        ends_on: "2026-12-20".into(),
        status: ContractStatus::Active,
    })
    .await?;
    repo.add_contract(Contract {
        id: "c-2".into(),
        number: "2026/027".into(),
        customer: "Substation North".into(),
        starts_on: "2026-06-01".into(),
        ends_on: "2026-08-31".into(),
        status: ContractStatus::Active,
    })
    .await?;

    let schedules = [
        (
            "ws-1",
            "Transformer testing, substation 110/10",
            "2026-08-10",
            "08:00",
            "2026-08-10",
            "17:00",
            "c-1",
            vec!["p-1", "p-2"],
            Some("v-1"),
        ),
        (
            "ws-2",
            "Cable line insulation test",
            "2026-08-10",
            "14:00",
            "2026-08-10",
            "19:00",
            "c-2",
            vec!["p-3"],
            Some("v-2"),
        ),
        (
            "ws-3",
            "Relay protection maintenance",
            "2026-08-12",
            "09:00",
            "2026-08-12",
            "13:00",
            "c-1",
            vec!["p-2"],
            None,
        ),
    ];
    for (id, title, start_date, start_time, end_date, end_time, contract, crew, vehicle) in
        schedules
    {
        repo.add_schedule(WorkSchedule {
            id: id.into(),
            title: title.into(),
            start_date: start_date.into(),
            start_time: start_time.into(),
            end_date: end_date.into(),
            end_time: end_time.into(),
            contract_id: Some(contract.into()),
            assignee_ids: crew.into_iter().map(String::from).collect(),
            vehicle_id: vehicle.map(String::from),
            notes: None,
        })
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::MemoryRepository;
    use crate::db::repository::{
        ContractRepository, PersonnelRepository, ScheduleRepository, VehicleRepository,
    };

    #[tokio::test]
    async fn test_seed_populates_every_entity() {
        let repo = MemoryRepository::new();
        seed_demo_data(&repo).await.unwrap();

        assert_eq!(repo.list_personnel().await.unwrap().len(), 3);
        assert_eq!(repo.list_vehicles().await.unwrap().len(), 2);
        assert_eq!(repo.list_contracts().await.unwrap().len(), 2);
        assert_eq!(repo.list_schedules().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_seed_references_are_consistent() {
        let repo = MemoryRepository::new();
        seed_demo_data(&repo).await.unwrap();

        for schedule in repo.list_schedules().await.unwrap() {
            if let Some(contract_id) = &schedule.contract_id {
                repo.get_contract(contract_id).await.unwrap();
            }
            if let Some(vehicle_id) = &schedule.vehicle_id {
                repo.get_vehicle(vehicle_id).await.unwrap();
            }
            for assignee in &schedule.assignee_ids {
                repo.get_personnel(assignee).await.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_seeding_twice_fails_on_duplicate_ids() {
        let repo = MemoryRepository::new();
        seed_demo_data(&repo).await.unwrap();
        assert!(seed_demo_data(&repo).await.is_err());
    }
}
