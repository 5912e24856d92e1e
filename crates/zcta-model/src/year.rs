//! Census table generations and year selection.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A versioned snapshot of Census ZCTA geography.
///
/// ZCTA boundaries are redrawn once per decennial census, so every year maps
/// onto the most recent generation at or before it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum YearGeneration {
    /// 2010 Census boundaries (used for 2010 through 2019).
    #[serde(rename = "2010")]
    Gen2010,
    /// 2020 Census boundaries.
    #[default]
    #[serde(rename = "2020")]
    Gen2020,
}

impl YearGeneration {
    pub const ALL: [Self; 2] = [Self::Gen2010, Self::Gen2020];

    /// The census year this generation was published for.
    pub const fn census_year(self) -> u16 {
        match self {
            Self::Gen2010 => 2010,
            Self::Gen2020 => 2020,
        }
    }

    /// Select the generation for a calendar year.
    ///
    /// Years before 2020 (including years before 2010) use the 2010 tables.
    pub const fn from_year(year: i64) -> Self {
        match year {
            2010 => Self::Gen2010,
            2020 => Self::Gen2020,
            y if y < 2020 => Self::Gen2010,
            _ => Self::Gen2020,
        }
    }

    /// Select the generation for a textual year.
    ///
    /// Input that is not an integer falls back to [`YearGeneration::Gen2020`]
    /// with a warning. Integers outside the `i64` range are still years and
    /// follow their sign.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(year) => Self::from_year(year),
            Err(err) if *err.kind() == IntErrorKind::NegOverflow => Self::Gen2010,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Self::Gen2020,
            Err(_) => {
                let fallback = Self::default();
                warn!(
                    year = %raw,
                    fallback = %fallback,
                    "invalid year; using default census generation"
                );
                fallback
            }
        }
    }
}

impl From<i64> for YearGeneration {
    fn from(year: i64) -> Self {
        Self::from_year(year)
    }
}

impl fmt::Display for YearGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.census_year())
    }
}
