// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Energy System Result Table

This is a library for reshaping the results of an energy system optimization
into a long-format, time-indexed table, and for slicing that table per bus.

An energy system is a graph of *buses* (commodity carriers like electricity or
gas) and the *components* feeding them or drawing from them: sources, sinks,
transformers, storages and commodities.  After a solve, every entity has a
time series per counterparty it exchanges flows with.  This library turns
those series into rows keyed by (bus id, bus category, flow direction,
counterparty id, timestamp).

## The `Node` and `Edge` traits

The topology is given as an [`EnergySystemGraph`], instances of which can be
created by passing an iterator of entities and the connections between them
to the [`try_new`][EnergySystemGraph::try_new] method.

Because this library doesn't know about the modeling layer's types, it uses
traits to interact with them.  The entity and connection types must implement
the [`Node`] and [`Edge`] traits, respectively.  Check out the documentation
for these traits for sample implementations.

## Validation

The [`try_new`][EnergySystemGraph::try_new] method checks that:

- All entities have a category and a unique id, and buses have a carrier.
- All connections point to existing entities, and no entity is connected to
  itself.
- Buses are only connected to components.
- Sources and commodities only feed buses, and sinks are only fed by buses.
- Transformers and storages are connected only to buses.

## Building the table

Solver results are collected in a [`ResultMapping`] and turned into a
[`ResultTable`] with [`ResultTable::try_new`]:

- every predecessor of a bus that has results becomes an `input` series,
- every other entity the bus has results for becomes an `output` series,
- text-labeled series become `other` series, as does a series keyed by the
  bus itself, which is listed under [`DUALS_LABEL`].

Series are expanded into one row per step, with timestamps taken from the
start and [`Frequency`] in the [`ResultTableConfig`].

## Querying

[`ResultTable::slice_bus`] selects rows with a [`BusSlice`] and pivots the
counterparties into the columns of a [`PivotedView`].
[`ResultTable::totals`] sums up every series over the horizon.
*/

mod config;
pub use config::{EnergySystemGraphConfig, ResultTableConfig};

mod entity_category;
pub use entity_category::{EntityCategory, TransformerType};

mod frequency;
pub use frequency::{parse_timestamp, Frequency, FrequencyUnit};

mod graph;
pub use graph::{iterators, EnergySystemGraph};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod results;
pub use results::{Counterparty, EntityResults, ResultMapping, Series};

mod table;
pub use table::{
    BusSlice, FlowDirection, FlowTotal, PivotRowKey, PivotedView, ResultTable, RowKey, TableRow,
    DUALS_LABEL,
};

mod error;
pub use error::Error;

#[cfg(test)]
mod test_utils;
