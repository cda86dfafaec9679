// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the
//! `EnergySystemGraph` and the `ResultTable`.

use chrono::NaiveDateTime;

use crate::{frequency::parse_timestamp, Error, Frequency};

/// Configuration options for the `EnergySystemGraph`.
#[derive(Clone, Default, Debug)]
pub struct EnergySystemGraphConfig {
    /// Whether to allow buses to be connected directly to other buses.  By
    /// default, buses can only be connected to components.
    pub allow_bus_to_bus_connections: bool,
}

/// Configuration options for building a `ResultTable`.
#[derive(Clone, Default, Debug)]
pub struct ResultTableConfig {
    /// Timestamp of the first step of every time series.
    pub start: NaiveDateTime,

    /// Distance between two consecutive steps.  Defaults to hourly.
    pub frequency: Frequency,
}

impl ResultTableConfig {
    /// Creates a config with the given start timestamp and an hourly
    /// frequency.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            frequency: Frequency::default(),
        }
    }

    /// Replaces the frequency.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Creates a config from a start date like `2016-01-01 00:00:00` and a
    /// frequency like `H`.
    pub fn try_from_strs(start: &str, frequency: &str) -> Result<Self, Error> {
        Ok(Self::new(parse_timestamp(start)?).with_frequency(frequency.parse()?))
    }
}
