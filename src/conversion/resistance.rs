//! Winding resistance correction to a reference temperature.

use serde::{Deserialize, Serialize};

use super::units::{Celsius, Ohms};
use super::{parse_number, parse_optional_number, ConversionError};

/// Conductor material of the measured winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Copper,
    Aluminum,
}

impl Material {
    /// Temperature constant K of the linear resistance model, in °C.
    pub fn temperature_constant(&self) -> f64 {
        match self {
            Material::Copper => 235.0,
            Material::Aluminum => 225.0,
        }
    }
}

/// Result of a resistance temperature correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceCorrection {
    pub corrected: Ohms,
    pub reference_temperature: Celsius,
    /// Expanded uncertainty (coverage factor 2) of the corrected value.
    /// Present only when both the calibration-standard uncertainty and the
    /// instrument resolution were supplied.
    pub expanded_uncertainty: Option<Ohms>,
}

/// Correct a measured resistance to a reference temperature.
///
/// Uses the linear conductor model `R2 = R1 * (K + t2) / (K + t1)` with the
/// material constant K (235 °C copper, 225 °C aluminum).
///
/// # Arguments
///
/// * `measured` - Measured resistance R1, in ohms
/// * `measured_at` - Temperature t1 at measurement time, in °C
/// * `reference` - Reference temperature t2 to correct to, in °C
/// * `material` - Conductor material, selects K
/// * `standard_uncertainty` - Calibration-standard expanded uncertainty, in
///   ohms (optional)
/// * `resolution` - Instrument resolution step, in ohms (optional)
///
/// The uncertainty estimate is Type B: `uc = sqrt((U_std/2)^2 +
/// ((res/2)/sqrt(3))^2)`, reported expanded as `U = 2 * uc`. Supplying only
/// one of the two contributions yields no estimate rather than a partial one.
pub fn correct_resistance(
    measured: &str,
    measured_at: &str,
    reference: &str,
    material: Material,
    standard_uncertainty: Option<&str>,
    resolution: Option<&str>,
) -> Result<ResistanceCorrection, ConversionError> {
    let r1 = parse_number("measured", measured)?;
    let t1 = parse_number("measured_at", measured_at)?;
    let t2 = parse_number("reference", reference)?;

    let k = material.temperature_constant();
    let denominator = k + t1;
    if denominator == 0.0 {
        return Err(ConversionError::invalid(
            "measured_at",
            format!("measurement temperature {t1} °C makes the correction denominator zero"),
        ));
    }

    let corrected = r1 * (k + t2) / denominator;
    if !corrected.is_finite() {
        return Err(ConversionError::invalid(
            "measured",
            "correction does not produce a finite value",
        ));
    }

    let u_std = parse_optional_number("standard_uncertainty", standard_uncertainty)?;
    let res = parse_optional_number("resolution", resolution)?;
    let expanded_uncertainty = match (u_std, res) {
        (Some(u_std), Some(res)) => {
            let standard_term = u_std / 2.0;
            let resolution_term = (res / 2.0) / 3.0_f64.sqrt();
            let combined = (standard_term.powi(2) + resolution_term.powi(2)).sqrt();
            Some(Ohms::new(2.0 * combined))
        }
        _ => None,
    };

    Ok(ResistanceCorrection {
        corrected: Ohms::new(corrected),
        reference_temperature: Celsius::new(t2),
        expanded_uncertainty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(value: f64, expected: f64, label: &str) {
        let diff = (value - expected).abs();
        assert!(
            diff < 1e-9,
            "Mismatch for {}: expected {}, got {}",
            label,
            expected,
            value
        );
    }

    #[test]
    fn test_copper_correction_to_20c() {
        // R1 = 1.000 Ω at 30 °C corrected to 20 °C:
        // 1.000 * (235 + 20) / (235 + 30) = 0.9622641509...
        let result = correct_resistance("1.000", "30", "20", Material::Copper, None, None)
            .expect("valid inputs");
        assert_close(result.corrected.value(), 255.0 / 265.0, "corrected R");
        assert_eq!(result.reference_temperature.value(), 20.0);
        assert!(result.expanded_uncertainty.is_none());
    }

    #[test]
    fn test_aluminum_uses_225() {
        let result = correct_resistance("1.000", "20", "20", Material::Aluminum, None, None)
            .expect("valid inputs");
        // Same temperature, no change regardless of K.
        assert_close(result.corrected.value(), 1.0, "corrected R");

        let warmer = correct_resistance("1.000", "25", "20", Material::Aluminum, None, None)
            .expect("valid inputs");
        assert_close(warmer.corrected.value(), 245.0 / 250.0, "corrected R");
    }

    #[test]
    fn test_uncertainty_requires_both_contributions() {
        let only_std =
            correct_resistance("1.0", "25", "20", Material::Copper, Some("0.02"), None).unwrap();
        assert!(only_std.expanded_uncertainty.is_none());

        let only_res =
            correct_resistance("1.0", "25", "20", Material::Copper, None, Some("0.001")).unwrap();
        assert!(only_res.expanded_uncertainty.is_none());

        let blank_counts_as_absent = correct_resistance(
            "1.0",
            "25",
            "20",
            Material::Copper,
            Some("0.02"),
            Some("  "),
        )
        .unwrap();
        assert!(blank_counts_as_absent.expanded_uncertainty.is_none());
    }

    #[test]
    fn test_uncertainty_type_b_budget() {
        let result = correct_resistance(
            "1.0",
            "25",
            "20",
            Material::Copper,
            Some("0.02"),
            Some("0.001"),
        )
        .unwrap();
        let standard_term: f64 = 0.02 / 2.0;
        let resolution_term: f64 = (0.001 / 2.0) / 3.0_f64.sqrt();
        let expected = 2.0 * (standard_term.powi(2) + resolution_term.powi(2)).sqrt();
        assert_close(
            result.expanded_uncertainty.unwrap().value(),
            expected,
            "expanded uncertainty",
        );
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        let err = correct_resistance("1.0", "-235", "20", Material::Copper, None, None)
            .expect_err("K + t1 = 0 must fail");
        assert!(err.to_string().contains("denominator zero"));

        let err = correct_resistance("1.0", "-225", "20", Material::Aluminum, None, None)
            .expect_err("K + t1 = 0 must fail");
        assert!(err.to_string().contains("denominator zero"));
    }

    #[test]
    fn test_non_numeric_inputs_name_the_field() {
        let err = correct_resistance("1,0", "30", "20", Material::Copper, None, None)
            .expect_err("comma decimal must fail");
        assert!(err.to_string().contains("'measured'"));

        let err = correct_resistance("1.0", "", "20", Material::Copper, None, None)
            .expect_err("blank temperature must fail");
        assert!(err.to_string().contains("'measured_at'"));
    }

    #[test]
    fn test_negative_resistance_passes_through() {
        // Physically dubious readings are the operator's call; only the
        // arithmetic validity is enforced here.
        let result =
            correct_resistance("-1.0", "30", "20", Material::Copper, None, None).unwrap();
        assert!(result.corrected.value() < 0.0);
    }
}
