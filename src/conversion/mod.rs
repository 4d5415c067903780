//! Measurement conversion calculators used in electrical testing.
//!
//! Four independent pure calculators:
//!
//! - [`resistance`]: winding resistance correction to a reference temperature
//! - [`dielectric`]: dielectric loss tangent correction for temperature
//! - [`contact`]: contact resistance from voltage-drop readings
//! - [`turns_ratio`]: transformer turns-ratio deviation check
//!
//! Inputs arrive as the raw strings typed into the frontend forms plus enum
//! selectors; outputs are unit newtypes. Every malformed input is an explicit
//! [`ConversionError`], and no calculator ever returns NaN or infinity.

pub mod contact;
pub mod dielectric;
pub mod resistance;
pub mod turns_ratio;
pub mod units;

pub use contact::{contact_resistance, ContactResistance};
pub use dielectric::{correct_tan_delta, EquipmentKind, TanDeltaCorrection};
pub use resistance::{correct_resistance, Material, ResistanceCorrection};
pub use turns_ratio::{turns_ratio_error, TurnsRatioCheck, TOLERANCE_PERCENT};

use thiserror::Error;

/// A calculator input could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl ConversionError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a required numeric field from its raw form string.
///
/// Rejects blank, non-numeric, and non-finite values.
pub(crate) fn parse_number(field: &str, raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::invalid(field, "value is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::invalid(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(ConversionError::invalid(field, "value must be finite"));
    }
    Ok(value)
}

/// Parse an optional numeric field. Absent or blank means `None`.
pub(crate) fn parse_optional_number(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<f64>, ConversionError> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_number(field, text).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_plain_and_signed() {
        assert_eq!(parse_number("r1", "1.25").unwrap(), 1.25);
        assert_eq!(parse_number("t1", "-40").unwrap(), -40.0);
        assert_eq!(parse_number("t1", " 20 ").unwrap(), 20.0);
    }

    #[test]
    fn test_parse_number_rejects_blank() {
        let err = parse_number("r1", "   ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input for 'r1': value is required"
        );
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        let err = parse_number("current", "12,5").unwrap_err();
        assert!(err.to_string().contains("'12,5' is not a number"));
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert!(parse_number("r1", "inf").is_err());
        assert!(parse_number("r1", "NaN").is_err());
    }

    #[test]
    fn test_parse_optional_number() {
        assert_eq!(parse_optional_number("u_std", None).unwrap(), None);
        assert_eq!(parse_optional_number("u_std", Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_number("u_std", Some("0.01")).unwrap(),
            Some(0.01)
        );
        assert!(parse_optional_number("u_std", Some("abc")).is_err());
    }
}
