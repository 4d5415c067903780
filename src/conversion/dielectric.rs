//! Dielectric loss tangent (tan δ) temperature correction.

use serde::{Deserialize, Serialize};

use super::units::Percent;
use super::{parse_number, ConversionError};

/// Equipment class under test, selecting the empirical correction base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Transformer,
    Bushing,
    Cable,
}

impl EquipmentKind {
    /// Base of the exponential temperature model.
    pub fn correction_base(&self) -> f64 {
        match self {
            EquipmentKind::Transformer => 1.04,
            EquipmentKind::Bushing => 1.03,
            EquipmentKind::Cable => 1.00,
        }
    }
}

/// Result of a tan δ temperature correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TanDeltaCorrection {
    pub corrected: Percent,
    /// The applied factor `base^(t1 - t2)`.
    pub correction_factor: f64,
}

/// Correct a measured tan δ to a reference temperature.
///
/// The correction factor is `base^(t1 - t2)` with the base selected by
/// equipment kind (1.04 transformer, 1.03 bushing, 1.00 cable), and the
/// corrected value is `tan δ / factor`. Cables use base 1.00, which makes
/// the correction an identity.
///
/// # Arguments
///
/// * `measured` - Measured tan δ, in percent
/// * `measured_at` - Temperature t1 at measurement time, in °C
/// * `reference` - Reference temperature t2 to correct to, in °C
/// * `equipment` - Equipment class, selects the base
pub fn correct_tan_delta(
    measured: &str,
    measured_at: &str,
    reference: &str,
    equipment: EquipmentKind,
) -> Result<TanDeltaCorrection, ConversionError> {
    let tan_delta = parse_number("measured", measured)?;
    let t1 = parse_number("measured_at", measured_at)?;
    let t2 = parse_number("reference", reference)?;

    let factor = equipment.correction_base().powf(t1 - t2);
    if !factor.is_finite() || factor == 0.0 {
        return Err(ConversionError::invalid(
            "measured_at",
            "temperature difference is outside the correction model's range",
        ));
    }

    let corrected = tan_delta / factor;
    if !corrected.is_finite() {
        return Err(ConversionError::invalid(
            "measured",
            "correction does not produce a finite value",
        ));
    }

    Ok(TanDeltaCorrection {
        corrected: Percent::new(corrected),
        correction_factor: factor,
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
    fn test_transformer_correction_down_to_20c() {
        // tan δ = 0.8 % at 35 °C, transformer: factor = 1.04^15.
        let result = correct_tan_delta("0.8", "35", "20", EquipmentKind::Transformer)
            .expect("valid inputs");
        let factor = 1.04_f64.powf(15.0);
        assert_close(result.correction_factor, factor, "factor");
        assert_close(result.corrected.value(), 0.8 / factor, "corrected tan δ");
    }

    #[test]
    fn test_bushing_uses_smaller_base() {
        let transformer =
            correct_tan_delta("1.0", "30", "20", EquipmentKind::Transformer).unwrap();
        let bushing = correct_tan_delta("1.0", "30", "20", EquipmentKind::Bushing).unwrap();
        assert!(bushing.correction_factor < transformer.correction_factor);
        assert_close(bushing.correction_factor, 1.03_f64.powf(10.0), "factor");
    }

    #[test]
    fn test_cable_correction_is_identity() {
        let result = correct_tan_delta("1.7", "45", "20", EquipmentKind::Cable).unwrap();
        assert_close(result.correction_factor, 1.0, "factor");
        assert_close(result.corrected.value(), 1.7, "corrected tan δ");
    }

    #[test]
    fn test_measurement_below_reference_raises_value() {
        // Colder than reference: factor < 1, corrected value grows.
        let result = correct_tan_delta("0.5", "10", "20", EquipmentKind::Transformer).unwrap();
        assert!(result.correction_factor < 1.0);
        assert!(result.corrected.value() > 0.5);
    }

    #[test]
    fn test_same_temperature_is_identity() {
        let result = correct_tan_delta("0.9", "20", "20", EquipmentKind::Transformer).unwrap();
        assert_close(result.correction_factor, 1.0, "factor");
        assert_close(result.corrected.value(), 0.9, "corrected tan δ");
    }

    #[test]
    fn test_invalid_inputs_name_the_field() {
        let err = correct_tan_delta("", "35", "20", EquipmentKind::Transformer)
            .expect_err("blank tan δ must fail");
        assert!(err.to_string().contains("'measured'"));

        let err = correct_tan_delta("0.8", "warm", "20", EquipmentKind::Transformer)
            .expect_err("non-numeric temperature must fail");
        assert!(err.to_string().contains("'measured_at'"));
    }

    #[test]
    fn test_extreme_temperature_difference_is_rejected() {
        // 1.04^huge overflows; the calculator reports a model-range error
        // instead of returning infinity.
        let err = correct_tan_delta("0.8", "1e6", "20", EquipmentKind::Transformer)
            .expect_err("overflowing factor must fail");
        assert!(err.to_string().contains("range"));
    }
}
