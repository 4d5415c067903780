//! Transformer turns-ratio deviation check.

use serde::{Deserialize, Serialize};

use super::units::Percent;
use super::{parse_number, ConversionError};

/// Acceptance threshold for the ratio deviation, in percent.
pub const TOLERANCE_PERCENT: f64 = 0.5;

/// Result of a turns-ratio deviation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnsRatioCheck {
    /// Nominal ratio `VP / VS` from the nameplate voltages.
    pub nominal_ratio: f64,
    /// Deviation of the measured ratio from nominal.
    pub deviation: Percent,
    pub within_tolerance: bool,
}

/// Check a measured turns ratio against the nameplate voltages.
///
/// The nominal ratio is `K = VP / VS` and the deviation is
/// `((K_measured - K) / K) * 100` percent. The check passes when the
/// absolute deviation does not exceed [`TOLERANCE_PERCENT`].
///
/// # Arguments
///
/// * `primary_voltage` - Nameplate primary voltage VP, in volts
/// * `secondary_voltage` - Nameplate secondary voltage VS, in volts
/// * `measured_ratio` - Ratio reported by the test set
pub fn turns_ratio_error(
    primary_voltage: &str,
    secondary_voltage: &str,
    measured_ratio: &str,
) -> Result<TurnsRatioCheck, ConversionError> {
    let vp = parse_number("primary_voltage", primary_voltage)?;
    let vs = parse_number("secondary_voltage", secondary_voltage)?;
    let measured = parse_number("measured_ratio", measured_ratio)?;

    if vs == 0.0 {
        return Err(ConversionError::invalid(
            "secondary_voltage",
            "secondary voltage must be nonzero",
        ));
    }
    let nominal = vp / vs;
    if nominal == 0.0 {
        return Err(ConversionError::invalid(
            "primary_voltage",
            "nominal ratio must be nonzero",
        ));
    }

    let deviation = (measured - nominal) / nominal * 100.0;
    if !deviation.is_finite() {
        return Err(ConversionError::invalid(
            "measured_ratio",
            "computation does not produce a finite value",
        ));
    }

    Ok(TurnsRatioCheck {
        nominal_ratio: nominal,
        deviation: Percent::new(deviation),
        within_tolerance: deviation.abs() <= TOLERANCE_PERCENT,
    })
}
