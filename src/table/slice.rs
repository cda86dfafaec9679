// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Selecting the rows of one or more buses over a date range, and pivoting
//! the counterparties into columns.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{Error, ResultTable};

use super::{FlowDirection, RowKey};

/// A filter on the rows of a [`ResultTable`].
///
/// Fields that are `None` match every row.  The date range is inclusive on
/// both ends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusSlice {
    pub bus_id: Option<String>,
    pub bus_category: Option<String>,
    pub direction: Option<FlowDirection>,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
}

impl BusSlice {
    /// A slice matching every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// A slice matching all rows of the given bus.
    pub fn bus(bus_id: impl Into<String>) -> Self {
        Self {
            bus_id: Some(bus_id.into()),
            ..Default::default()
        }
    }

    /// A slice matching everything flowing into the given bus.
    pub fn inputs_of(bus_id: impl Into<String>) -> Self {
        Self::bus(bus_id).with_direction(FlowDirection::Input)
    }

    /// A slice matching everything the given bus feeds.
    pub fn outputs_of(bus_id: impl Into<String>) -> Self {
        Self::bus(bus_id).with_direction(FlowDirection::Output)
    }

    /// A slice matching the duals and labeled series of the given bus.
    pub fn other_of(bus_id: impl Into<String>) -> Self {
        Self::bus(bus_id).with_direction(FlowDirection::Other)
    }

    /// Restricts the slice to buses of the given category.
    pub fn with_category(mut self, bus_category: impl Into<String>) -> Self {
        self.bus_category = Some(bus_category.into());
        self
    }

    /// Restricts the slice to the given direction.
    pub fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Restricts the slice to rows at or after `date_from`.
    pub fn from_date(mut self, date_from: NaiveDateTime) -> Self {
        self.date_from = Some(date_from);
        self
    }

    /// Restricts the slice to rows at or before `date_to`.
    pub fn to_date(mut self, date_to: NaiveDateTime) -> Self {
        self.date_to = Some(date_to);
        self
    }

    /// Returns `true` if the row with the given key is part of the slice.
    pub fn matches(&self, key: &RowKey) -> bool {
        self.bus_id.as_deref().map_or(true, |id| id == &*key.bus_id)
            && self
                .bus_category
                .as_deref()
                .map_or(true, |category| category == &*key.bus_category)
            && self.direction.map_or(true, |d| d == key.direction)
            && self.date_from.map_or(true, |from| key.timestamp >= from)
            && self.date_to.map_or(true, |to| key.timestamp <= to)
    }
}

/// The row index of a [`PivotedView`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PivotRowKey {
    pub bus_id: Arc<str>,
    pub bus_category: Arc<str>,
    pub direction: FlowDirection,
    pub timestamp: NaiveDateTime,
}

impl From<&RowKey> for PivotRowKey {
    fn from(key: &RowKey) -> Self {
        Self {
            bus_id: key.bus_id.clone(),
            bus_category: key.bus_category.clone(),
            direction: key.direction,
            timestamp: key.timestamp,
        }
    }
}

/// A wide view of a slice of a [`ResultTable`]: one column per counterparty,
/// one row per (bus, category, direction, timestamp).
///
/// A cell is `None` where the counterparty has no value for that row, e.g.
/// because its series is shorter than the others.
#[derive(Clone, Debug, PartialEq)]
pub struct PivotedView {
    index: Vec<PivotRowKey>,
    columns: Vec<Arc<str>>,
    cells: Vec<Option<f64>>,
}

impl PivotedView {
    /// Returns the row index, sorted.
    pub fn index(&self) -> &[PivotRowKey] {
        &self.index
    }

    /// Returns the column names, i.e. the counterparty ids, sorted.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| &**c)
    }

    /// Returns the timestamps of the rows, in index order.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.index.iter().map(|k| k.timestamp)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the view has no rows.  Views returned by
    /// [`ResultTable::slice_bus`] always have rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the cells of the row at position `row`.
    pub fn row(&self, row: usize) -> Option<&[Option<f64>]> {
        self.cells.chunks(self.columns.len()).nth(row)
    }

    /// Returns the cells of the column named `column`, in index order.
    pub fn column(&self, column: &str) -> Option<Vec<Option<f64>>> {
        let position = self.column_position(column)?;
        Some(
            self.cells
                .chunks(self.columns.len())
                .map(|row| row[position])
                .collect(),
        )
    }

    /// Returns the value at position `row` of the column named `column`.
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        let position = self.column_position(column)?;
        self.row(row).and_then(|cells| cells[position])
    }

    /// Returns the number of cells that hold a value.
    pub fn value_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.binary_search_by(|c| (**c).cmp(column)).ok()
    }
}

impl ResultTable {
    /// Selects the rows matching `slice` and pivots their counterparties into
    /// columns.
    ///
    /// Returns an `EmptyResult` error if no row matches, so that a failed
    /// selection can't be mistaken for a small one.
    pub fn slice_bus(&self, slice: &BusSlice) -> Result<PivotedView, Error> {
        if let (Some(from), Some(to)) = (slice.date_from, slice.date_to) {
            if from > to {
                tracing::warn!("Slice date range is inverted: {} > {}.", from, to);
            }
        }

        let selected: Vec<_> = self.iter().filter(|r| slice.matches(&r.key)).collect();
        if selected.is_empty() {
            return Err(Error::empty_result(format!(
                "No rows match {}.",
                describe(slice)
            )));
        }

        let index: Vec<PivotRowKey> = selected
            .iter()
            .map(|r| PivotRowKey::from(&r.key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: Vec<Arc<str>> = selected
            .iter()
            .map(|r| r.key.counterparty_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let width = columns.len();
        let mut cells = vec![None; index.len() * width];
        for row in selected {
            let pivot_key = PivotRowKey::from(&row.key);
            let (Ok(i), Ok(j)) = (
                index.binary_search(&pivot_key),
                columns.binary_search(&row.key.counterparty_id),
            ) else {
                return Err(Error::internal(format!(
                    "Row {} is missing from the pivot index.",
                    row.key
                )));
            };
            cells[i * width + j] = Some(row.value);
        }

        Ok(PivotedView {
            index,
            columns,
            cells,
        })
    }
}

fn describe(slice: &BusSlice) -> String {
    let mut parts = vec![];
    if let Some(id) = &slice.bus_id {
        parts.push(format!("bus {id}"));
    }
    if let Some(category) = &slice.bus_category {
        parts.push(format!("category {category}"));
    }
    if let Some(direction) = slice.direction {
        parts.push(format!("direction {direction}"));
    }
    match (slice.date_from, slice.date_to) {
        (Some(from), Some(to)) => parts.push(format!("dates {from} to {to}")),
        (Some(from), None) => parts.push(format!("dates from {from}")),
        (None, Some(to)) => parts.push(format!("dates until {to}")),
        (None, None) => {}
    }
    if parts.is_empty() {
        "the slice".to_string()
    } else {
        parts.join(", ")
    }
}
