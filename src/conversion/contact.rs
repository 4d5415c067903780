//! Contact resistance from a voltage-drop measurement.

use serde::{Deserialize, Serialize};

use super::units::{Amperes, MicroOhms};
use super::{parse_number, ConversionError};

/// Result of a contact resistance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResistance {
    pub resistance: MicroOhms,
    pub test_current: Amperes,
}

/// Compute contact resistance from a voltage drop and test current.
///
/// `R = (U_mV / I_A) * 1000`, reported in microohms. A zero test current is
/// rejected outright; division by it is never attempted.
///
/// # Arguments
///
/// * `voltage_drop` - Measured voltage drop, in millivolts
/// * `current` - Injected test current, in amperes
pub fn contact_resistance(
    voltage_drop: &str,
    current: &str,
) -> Result<ContactResistance, ConversionError> {
    let u_mv = parse_number("voltage_drop", voltage_drop)?;
    let i_a = parse_number("current", current)?;

    if i_a == 0.0 {
        return Err(ConversionError::invalid(
            "current",
            "test current must be nonzero",
        ));
    }

    let resistance = u_mv / i_a * 1000.0;
    if !resistance.is_finite() {
        return Err(ConversionError::invalid(
            "voltage_drop",
            "computation does not produce a finite value",
        ));
    }

    Ok(ContactResistance {
        resistance: MicroOhms::new(resistance),
        test_current: Amperes::new(i_a),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_computation() {
        // 12 mV at 100 A: 0.12 mΩ = 120 µΩ.
        let result = contact_resistance("12", "100").expect("valid inputs");
        assert_eq!(result.resistance.value(), 120.0);
        assert_eq!(result.test_current.value(), 100.0);
    }

    #[test]
    fn test_fractional_values() {
        let result = contact_resistance("2.5", "50").unwrap();
        assert_eq!(result.resistance.value(), 50.0);
    }

    #[test]
    fn test_zero_current_is_rejected() {
        let err = contact_resistance("12", "0").expect_err("zero current must fail");
        assert_eq!(
            err.to_string(),
            "invalid input for 'current': test current must be nonzero"
        );
    }

    #[test]
    fn test_negative_current_allowed() {
        // Reversed polarity readings are legitimate; sign carries through.
        let result = contact_resistance("12", "-100").unwrap();
        assert_eq!(result.resistance.value(), -120.0);
    }

    #[test]
    fn test_invalid_inputs_name_the_field() {
        let err = contact_resistance("twelve", "100").expect_err("text voltage must fail");
        assert!(err.to_string().contains("'voltage_drop'"));

        let err = contact_resistance("12", "").expect_err("blank current must fail");
        assert!(err.to_string().contains("'current'"));
    }
}
