//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository or the service layer for the actual work.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    ContactResistanceRequest, ContactResistanceResult, ContractListResponse, DashboardQuery,
    HealthResponse, ImportRequest, PersonnelListResponse, ResistanceCorrectionRequest,
    ResistanceCorrectionResult, ScheduleListResponse, TanDeltaRequest, TanDeltaResult,
    TurnsRatioRequest, TurnsRatioResult, VehicleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CalendarData, Contract, DashboardData, ImportSummary, Personnel, Vehicle, WorkSchedule};
use crate::conversion;
use crate::db::services as db_services;
use crate::models::time::DATE_FORMAT;
use crate::services::dashboard::DEFAULT_EXPIRY_WINDOW_DAYS;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let storage = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        storage,
    }))
}

// =============================================================================
// Personnel CRUD
// =============================================================================

/// GET /v1/personnel
pub async fn list_personnel(State(state): State<AppState>) -> HandlerResult<PersonnelListResponse> {
    let personnel = state.repository.list_personnel().await?;
    let total = personnel.len();
    Ok(Json(PersonnelListResponse { personnel, total }))
}

/// POST /v1/personnel
pub async fn create_personnel(
    State(state): State<AppState>,
    Json(record): Json<Personnel>,
) -> Result<(StatusCode, Json<Personnel>), AppError> {
    let stored = state.repository.add_personnel(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/personnel/{id}
pub async fn get_personnel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Personnel> {
    Ok(Json(state.repository.get_personnel(&id).await?))
}

/// PUT /v1/personnel/{id}
pub async fn update_personnel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut record): Json<Personnel>,
) -> HandlerResult<Personnel> {
    record.id = id;
    Ok(Json(state.repository.update_personnel(record).await?))
}

/// DELETE /v1/personnel/{id}
pub async fn delete_personnel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_personnel(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Vehicle CRUD
// =============================================================================

/// GET /v1/vehicles
pub async fn list_vehicles(State(state): State<AppState>) -> HandlerResult<VehicleListResponse> {
    let vehicles = state.repository.list_vehicles().await?;
    let total = vehicles.len();
    Ok(Json(VehicleListResponse { vehicles, total }))
}

/// POST /v1/vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(record): Json<Vehicle>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let stored = state.repository.add_vehicle(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/vehicles/{id}
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Vehicle> {
    Ok(Json(state.repository.get_vehicle(&id).await?))
}

/// PUT /v1/vehicles/{id}
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut record): Json<Vehicle>,
) -> HandlerResult<Vehicle> {
    record.id = id;
    Ok(Json(state.repository.update_vehicle(record).await?))
}

/// DELETE /v1/vehicles/{id}
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_vehicle(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Contract CRUD
// =============================================================================

/// GET /v1/contracts
pub async fn list_contracts(State(state): State<AppState>) -> HandlerResult<ContractListResponse> {
    let contracts = state.repository.list_contracts().await?;
    let total = contracts.len();
    Ok(Json(ContractListResponse { contracts, total }))
}

/// POST /v1/contracts
pub async fn create_contract(
    State(state): State<AppState>,
    Json(record): Json<Contract>,
) -> Result<(StatusCode, Json<Contract>), AppError> {
    let stored = state.repository.add_contract(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/contracts/{id}
pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Contract> {
    Ok(Json(state.repository.get_contract(&id).await?))
}

/// PUT /v1/contracts/{id}
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut record): Json<Contract>,
) -> HandlerResult<Contract> {
    record.id = id;
    Ok(Json(state.repository.update_contract(record).await?))
}

/// DELETE /v1/contracts/{id}
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_contract(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Schedule CRUD, Import & Calendar
// =============================================================================

/// GET /v1/schedules
pub async fn list_schedules(State(state): State<AppState>) -> HandlerResult<ScheduleListResponse> {
    let schedules = state.repository.list_schedules().await?;
    let total = schedules.len();
    Ok(Json(ScheduleListResponse { schedules, total }))
}

/// POST /v1/schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(record): Json<WorkSchedule>,
) -> Result<(StatusCode, Json<WorkSchedule>), AppError> {
    let stored = state.repository.add_schedule(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/schedules/{id}
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<WorkSchedule> {
    Ok(Json(state.repository.get_schedule(&id).await?))
}

/// PUT /v1/schedules/{id}
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut record): Json<WorkSchedule>,
) -> HandlerResult<WorkSchedule> {
    record.id = id;
    Ok(Json(state.repository.update_schedule(record).await?))
}

/// DELETE /v1/schedules/{id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_schedule(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/schedules/import
///
/// Import a batch of spreadsheet-shaped rows. Valid rows are stored, invalid
/// rows are reported per-row; the batch is not transactional.
pub async fn import_schedules(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> HandlerResult<ImportSummary> {
    let summary =
        db_services::import_schedule_rows(state.repository.as_ref(), &request.rows).await?;
    Ok(Json(summary))
}

/// GET /v1/schedules/calendar
///
/// Calendar payload with overlap grouping and color indices.
pub async fn get_calendar(State(state): State<AppState>) -> HandlerResult<CalendarData> {
    let data = crate::services::build_calendar(state.repository.as_ref()).await?;
    Ok(Json(data))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Landing-page aggregations for an optional reference date (default: today).
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardData> {
    let reference = match &query.date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| AppError::BadRequest(format!("invalid date '{raw}', expected YYYY-MM-DD")))?,
        None => Utc::now().date_naive(),
    };
    let window_days = query.window_days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
    if window_days < 0 {
        return Err(AppError::BadRequest(
            "window_days must not be negative".to_string(),
        ));
    }

    let data =
        crate::services::build_dashboard(state.repository.as_ref(), reference, window_days).await?;
    Ok(Json(data))
}

// =============================================================================
// Calculators
// =============================================================================

/// POST /v1/calculators/resistance-correction
pub async fn resistance_correction(
    Json(request): Json<ResistanceCorrectionRequest>,
) -> HandlerResult<ResistanceCorrectionResult> {
    let result = conversion::correct_resistance(
        &request.measured,
        &request.measured_at,
        &request.reference,
        request.material,
        request.standard_uncertainty.as_deref(),
        request.resolution.as_deref(),
    )?;
    Ok(Json(result.into()))
}

/// POST /v1/calculators/tan-delta
pub async fn tan_delta(Json(request): Json<TanDeltaRequest>) -> HandlerResult<TanDeltaResult> {
    let result = conversion::correct_tan_delta(
        &request.measured,
        &request.measured_at,
        &request.reference,
        request.equipment,
    )?;
    Ok(Json(result.into()))
}

/// POST /v1/calculators/contact-resistance
pub async fn contact_resistance(
    Json(request): Json<ContactResistanceRequest>,
) -> HandlerResult<ContactResistanceResult> {
    let result = conversion::contact_resistance(&request.voltage_drop, &request.current)?;
    Ok(Json(result.into()))
}

/// POST /v1/calculators/turns-ratio
pub async fn turns_ratio(Json(request): Json<TurnsRatioRequest>) -> HandlerResult<TurnsRatioResult> {
    let result = conversion::turns_ratio_error(
        &request.primary_voltage,
        &request.secondary_voltage,
        &request.measured_ratio,
    )?;
    Ok(Json(result.into()))
}
