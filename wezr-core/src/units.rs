use std::{convert::TryFrom, fmt, str::FromStr};

use thiserror::Error;

/// Unit system requested from the API. The API converts values itself; this
/// type only selects the code sent upstream and the rendered suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Si,
    Us,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit system '{0}'. Supported unit systems: si, us.")]
pub struct UnknownUnits(pub String);

impl Units {
    /// Code sent in the `units=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Si => "si",
            Units::Us => "us",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Si => "°C",
            Units::Us => "°F",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Si, Units::Us]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = UnknownUnits;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "si" => Ok(Units::Si),
            "us" => Ok(Units::Us),
            _ => Err(UnknownUnits(value.to_string())),
        }
    }
}

impl FromStr for Units {
    type Err = UnknownUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::try_from(s)
    }
}
