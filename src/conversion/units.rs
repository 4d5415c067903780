//! Measurement unit newtypes.
//!
//! Wrapping raw `f64` readings keeps ohms from being added to millivolts by
//! accident and makes calculator signatures self-describing.

use serde::{Deserialize, Serialize};

macro_rules! unit_newtype {
    ($(#[$doc:meta])* $name:ident, $symbol:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
        pub struct $name(pub f64);

        impl $name {
            pub fn new(value: f64) -> Self {
                $name(value)
            }

            pub fn value(&self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {}", self.0, $symbol)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                $name(value)
            }
        }
    };
}

unit_newtype!(
    /// Resistance in ohms.
    Ohms,
    "Ω"
);
unit_newtype!(
    /// Resistance in microohms, used for contact resistance readings.
    MicroOhms,
    "µΩ"
);
unit_newtype!(
    /// Test current in amperes.
    Amperes,
    "A"
);
unit_newtype!(
    /// Temperature in degrees Celsius.
    Celsius,
    "°C"
);
unit_newtype!(
    /// Dimensionless ratio expressed in percent.
    Percent,
    "%"
);
