use serde::{Deserialize, Serialize};

use crate::conversion::{
    ContactResistance, EquipmentKind, Material, ResistanceCorrection, TanDeltaCorrection,
    TurnsRatioCheck,
};

// ==================== Resistance correction ====================

/// Form input for the resistance temperature correction calculator.
///
/// Numeric fields arrive as the raw strings typed into the form; parsing
/// and validation happen in the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceCorrectionRequest {
    pub measured: String,
    pub measured_at: String,
    pub reference: String,
    pub material: Material,
    #[serde(default)]
    pub standard_uncertainty: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceCorrectionResult {
    pub corrected_ohms: f64,
    pub reference_temperature_c: f64,
    pub expanded_uncertainty_ohms: Option<f64>,
}

impl From<ResistanceCorrection> for ResistanceCorrectionResult {
    fn from(value: ResistanceCorrection) -> Self {
        Self {
            corrected_ohms: value.corrected.value(),
            reference_temperature_c: value.reference_temperature.value(),
            expanded_uncertainty_ohms: value.expanded_uncertainty.map(|u| u.value()),
        }
    }
}

// ==================== Tan delta correction ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TanDeltaRequest {
    pub measured: String,
    pub measured_at: String,
    pub reference: String,
    pub equipment: EquipmentKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TanDeltaResult {
    pub corrected_percent: f64,
    pub correction_factor: f64,
}

impl From<TanDeltaCorrection> for TanDeltaResult {
    fn from(value: TanDeltaCorrection) -> Self {
        Self {
            corrected_percent: value.corrected.value(),
            correction_factor: value.correction_factor,
        }
    }
}

// ==================== Contact resistance ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResistanceRequest {
    pub voltage_drop: String,
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResistanceResult {
    pub resistance_micro_ohms: f64,
    pub test_current_a: f64,
}

impl From<ContactResistance> for ContactResistanceResult {
    fn from(value: ContactResistance) -> Self {
        Self {
            resistance_micro_ohms: value.resistance.value(),
            test_current_a: value.test_current.value(),
        }
    }
}

// ==================== Turns ratio ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnsRatioRequest {
    pub primary_voltage: String,
    pub secondary_voltage: String,
    pub measured_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnsRatioResult {
    pub nominal_ratio: f64,
    pub deviation_percent: f64,
    pub within_tolerance: bool,
}

impl From<TurnsRatioCheck> for TurnsRatioResult {
    fn from(value: TurnsRatioCheck) -> Self {
        Self {
            nominal_ratio: value.nominal_ratio,
            deviation_percent: value.deviation.value(),
            within_tolerance: value.within_tolerance,
        }
    }
}

pub const POST_RESISTANCE_CORRECTION: &str = "post_resistance_correction";
pub const POST_TAN_DELTA: &str = "post_tan_delta";
pub const POST_CONTACT_RESISTANCE: &str = "post_contact_resistance";
pub const POST_TURNS_RATIO: &str = "post_turns_ratio";
