// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A long-format, time-indexed table of the flows into and out of every bus
//! of an energy system, built from solver results.

mod builder;
mod row;
mod slice;
mod totals;

pub use row::{FlowDirection, RowKey, TableRow};
pub use slice::{BusSlice, PivotRowKey, PivotedView};
pub use totals::FlowTotal;

use chrono::NaiveDateTime;

use crate::{Edge, EnergySystemGraph, Error, Frequency, Node, ResultMapping, ResultTableConfig};

/// The counterparty id used for series a bus holds about itself, e.g. the
/// duals of its balance constraint.
pub const DUALS_LABEL: &str = "duals";

/// Solver results as rows of (bus id, bus category, direction, counterparty
/// id, timestamp, value), sorted by everything but the value.
///
/// A table is built once by [`try_new`][ResultTable::try_new] and is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    rows: Vec<TableRow>,
    start: NaiveDateTime,
    frequency: Frequency,
}

impl ResultTable {
    /// Builds the table for all buses of `esg` that have entries in
    /// `results`.
    ///
    /// For each such bus, the table gets:
    ///  - an `input` series for every predecessor that has results,
    ///  - an `output` series for every other entity the bus has results for,
    ///  - an `other` series for every text label, and one named
    ///    [`DUALS_LABEL`] for a series keyed by the bus itself.
    ///
    /// Returns an error if `results` names an entity that is not part of
    /// `esg`, if a predecessor with results has none towards the bus, or if
    /// two series end up with the same key.
    pub fn try_new<N, E>(
        esg: &EnergySystemGraph<N, E>,
        results: &ResultMapping,
        config: &ResultTableConfig,
    ) -> Result<Self, Error>
    where
        N: Node,
        E: Edge,
    {
        let rows = builder::ResultTableBuilder::new(esg, results, config).build()?;
        Ok(Self {
            rows,
            start: config.start,
            frequency: config.frequency,
        })
    }

    /// Returns the rows, sorted by their key.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Returns an iterator over the rows, sorted by their key.
    pub fn iter(&self) -> std::slice::Iter<'_, TableRow> {
        self.rows.iter()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the timestamp of the first step.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the distance between two steps.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the ids of the buses with at least one row, in table order.
    pub fn bus_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rows.iter().map(|r| &*r.key.bus_id).collect();
        ids.dedup();
        ids
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a TableRow;
    type IntoIter = std::slice::Iter<'a, TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
