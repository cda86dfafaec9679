// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The fixed step length of a simulation horizon, and helpers for turning
//! step indices and date strings into timestamps.

use std::{fmt::Display, str::FromStr};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::Error;

/// The unit of a [`Frequency`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrequencyUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl FrequencyUnit {
    fn symbol(&self) -> &'static str {
        match self {
            FrequencyUnit::Second => "S",
            FrequencyUnit::Minute => "min",
            FrequencyUnit::Hour => "H",
            FrequencyUnit::Day => "D",
            FrequencyUnit::Week => "W",
        }
    }

    fn duration(&self, multiplier: i64) -> Duration {
        match self {
            FrequencyUnit::Second => Duration::seconds(multiplier),
            FrequencyUnit::Minute => Duration::minutes(multiplier),
            FrequencyUnit::Hour => Duration::hours(multiplier),
            FrequencyUnit::Day => Duration::days(multiplier),
            FrequencyUnit::Week => Duration::weeks(multiplier),
        }
    }
}

/// The distance between two consecutive timesteps, e.g. `H` for hourly or
/// `15min` for quarter-hourly results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frequency {
    multiplier: u32,
    unit: FrequencyUnit,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::hourly()
    }
}

impl Frequency {
    /// Creates a new frequency of `multiplier` units.
    ///
    /// Returns an error if `multiplier` is zero.
    pub fn try_new(multiplier: u32, unit: FrequencyUnit) -> Result<Self, Error> {
        if multiplier == 0 {
            return Err(Error::invalid_frequency(format!(
                "Frequency must be positive, got 0{}.",
                unit.symbol()
            )));
        }
        Ok(Self { multiplier, unit })
    }

    /// One step per hour.
    pub fn hourly() -> Self {
        Self {
            multiplier: 1,
            unit: FrequencyUnit::Hour,
        }
    }

    /// Returns the number of units in one step.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Returns the unit of the frequency.
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Returns the length of one step.
    pub fn step(&self) -> Duration {
        self.unit.duration(i64::from(self.multiplier))
    }

    /// Returns the timestamp of the step with the given `index`, counting
    /// from `start`.
    pub fn timestamp_at(&self, start: NaiveDateTime, index: usize) -> Result<NaiveDateTime, Error> {
        let overflow = || {
            Error::invalid_timestamp(format!(
                "Step {index} of {self} from {start} is out of the supported date range."
            ))
        };
        let index = i32::try_from(index).map_err(|_| overflow())?;
        let offset = self.step().checked_mul(index).ok_or_else(overflow)?;
        start.checked_add_signed(offset).ok_or_else(overflow)
    }

    /// Returns `periods` contiguous timestamps, starting at `start`.
    pub fn date_range(
        &self,
        start: NaiveDateTime,
        periods: usize,
    ) -> Result<Vec<NaiveDateTime>, Error> {
        (0..periods).map(|i| self.timestamp_at(start, i)).collect()
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.multiplier == 1 {
            write!(f, "{}", self.unit.symbol())
        } else {
            write!(f, "{}{}", self.multiplier, self.unit.symbol())
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Parses strings of the form `[<multiplier>]<unit>`, e.g. `H`, `2h`,
    /// `15min`, `15T`, `D` or `W`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);

        let multiplier = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|e| {
                Error::invalid_frequency(format!("Invalid multiplier in '{s}': {e}"))
            })?
        };

        let unit = match unit {
            "S" | "s" => FrequencyUnit::Second,
            "T" | "min" => FrequencyUnit::Minute,
            "H" | "h" => FrequencyUnit::Hour,
            "D" | "d" => FrequencyUnit::Day,
            "W" | "w" => FrequencyUnit::Week,
            "" => {
                return Err(Error::invalid_frequency(format!(
                    "Missing unit in frequency '{s}'."
                )))
            }
            other => {
                return Err(Error::invalid_frequency(format!(
                    "Unknown unit '{other}' in frequency '{s}'."
                )))
            }
        };

        Self::try_new(multiplier, unit)
    }
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parses a timestamp like `2016-01-01 00:00:00`, `2016-01-01 00:00` or
/// `2016-01-01`.  A bare date means midnight.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, Error> {
    let s = s.trim();
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::invalid_timestamp(format!("Can't parse '{s}' as a timestamp.")))
}
