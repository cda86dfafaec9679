// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The rows of a [`ResultTable`][crate::ResultTable] and their composite key.

use std::fmt::Display;
use std::sync::Arc;

use chrono::NaiveDateTime;

/// The direction of a series relative to the bus it is listed under.
///
/// The declaration order is also the sort order of the result table:
/// inputs, then outputs, then everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlowDirection {
    /// A predecessor feeding the bus.
    Input,
    /// A successor fed by the bus.
    Output,
    /// Auxiliary series attached to the bus, like duals or labeled series.
    Other,
}

impl FlowDirection {
    /// Returns the lowercase name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowDirection::Input => "input",
            FlowDirection::Output => "output",
            FlowDirection::Other => "other",
        }
    }
}

impl Display for FlowDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The composite key a [`TableRow`] is identified and sorted by.
///
/// Fields are compared in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub bus_id: Arc<str>,
    pub bus_category: Arc<str>,
    pub direction: FlowDirection,
    pub counterparty_id: Arc<str>,
    pub timestamp: NaiveDateTime,
}

impl Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.bus_id, self.bus_category, self.direction, self.counterparty_id, self.timestamp
        )
    }
}

/// The value of one series at one timestep.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: RowKey,
    pub value: f64,
}
