use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GeoError;

/// Linear units a projection can be requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LinearUnit {
    UsSurveyFoot,
    Metre,
    Foot,
}

impl LinearUnit {
    /// Name as it appears in the `UNIT[...]` clause of EPSG WKT
    pub fn name(&self) -> &'static str {
        match self {
            LinearUnit::UsSurveyFoot => "us survey foot",
            LinearUnit::Metre => "metre",
            LinearUnit::Foot => "foot",
        }
    }

    /// Case-insensitive comparison against a unit name parsed out of WKT
    pub fn matches(&self, unit_name: &str) -> bool {
        self.name().eq_ignore_ascii_case(unit_name.trim())
    }
}

impl FromStr for LinearUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LinearUnit::UsSurveyFoot, LinearUnit::Metre, LinearUnit::Foot]
            .into_iter()
            .find(|unit| unit.matches(s))
            .ok_or_else(|| GeoError::UnsupportedUnit(s.to_string()))
    }
}

impl TryFrom<String> for LinearUnit {
    type Error = GeoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
