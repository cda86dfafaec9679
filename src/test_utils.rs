// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the crate.
//!
//! - the `TestEntity` and `TestConnection` types, which implement the `Node`
//!   and `Edge` traits respectively.
//! - the `EnergySystemBuilder`, which can declaratively build energy systems
//!   and their solver results for use in tests.

use chrono::NaiveDateTime;

use crate::{
    frequency::parse_timestamp, Edge, EnergySystemGraph, EnergySystemGraphConfig, EntityCategory,
    Error, Node, ResultMapping, ResultTable, ResultTableConfig, Series, TransformerType,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEntity(String, EntityCategory, String);

impl TestEntity {
    pub(crate) fn new(id: &str, category: EntityCategory) -> Self {
        TestEntity(id.to_string(), category, String::new())
    }

    pub(crate) fn bus(id: &str, carrier: &str) -> Self {
        TestEntity(id.to_string(), EntityCategory::Bus, carrier.to_string())
    }
}

impl Node for TestEntity {
    fn entity_id(&self) -> &str {
        &self.0
    }

    fn category(&self) -> EntityCategory {
        self.1
    }

    fn carrier(&self) -> &str {
        &self.2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestConnection(String, String);

impl TestConnection {
    pub(crate) fn new(source: &str, destination: &str) -> Self {
        TestConnection(source.to_string(), destination.to_string())
    }
}

impl Edge for TestConnection {
    fn source(&self) -> &str {
        &self.0
    }

    fn destination(&self) -> &str {
        &self.1
    }
}

/// Parses a timestamp literal, panicking on malformed input.
pub(crate) fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

/// A builder for creating energy systems and matching solver results easily,
/// for use in tests.
#[derive(Default)]
pub(crate) struct EnergySystemBuilder {
    entities: Vec<TestEntity>,
    connections: Vec<TestConnection>,
    results: ResultMapping,
}

impl EnergySystemBuilder {
    /// Creates a new `EnergySystemBuilder`.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds an entity to the system.
    pub(crate) fn add_entity(&mut self, id: &str, category: EntityCategory) -> &mut Self {
        self.entities.push(TestEntity::new(id, category));
        self
    }

    /// Adds a bus with the given carrier to the system.
    pub(crate) fn bus(&mut self, id: &str, carrier: &str) -> &mut Self {
        self.entities.push(TestEntity::bus(id, carrier));
        self
    }

    /// Adds a source to the system.
    pub(crate) fn source(&mut self, id: &str) -> &mut Self {
        self.add_entity(id, EntityCategory::Source)
    }

    /// Adds a sink to the system.
    pub(crate) fn sink(&mut self, id: &str) -> &mut Self {
        self.add_entity(id, EntityCategory::Sink)
    }

    /// Adds a simple transformer to the system.
    pub(crate) fn transformer(&mut self, id: &str) -> &mut Self {
        self.add_entity(id, EntityCategory::Transformer(TransformerType::Simple))
    }

    /// Adds a storage to the system.
    pub(crate) fn storage(&mut self, id: &str) -> &mut Self {
        self.add_entity(id, EntityCategory::Storage)
    }

    /// Connects two entities without recording any results.
    pub(crate) fn connect(&mut self, from: &str, to: &str) -> &mut Self {
        self.connections.push(TestConnection::new(from, to));
        self
    }

    /// Connects two entities and records the series of the flow between them.
    pub(crate) fn flow(&mut self, from: &str, to: &str, series: &[f64]) -> &mut Self {
        self.connect(from, to);
        self.results.insert_flow(from, to, series.to_vec());
        self
    }

    /// Records a text-labeled series for the given entity.
    pub(crate) fn label(&mut self, id: &str, label: &str, series: &[f64]) -> &mut Self {
        self.results.insert_label(id, label, series.to_vec());
        self
    }

    /// Records the duals of the given bus.
    pub(crate) fn duals(&mut self, id: &str, series: &[f64]) -> &mut Self {
        self.results.insert_duals(id, series.to_vec());
        self
    }

    /// Records a series without touching the topology.
    pub(crate) fn raw_result(&mut self, id: &str, to: &str, series: Series) -> &mut Self {
        self.results.insert_flow(id, to, series);
        self
    }

    /// Returns the results recorded so far.
    pub(crate) fn results(&self) -> &ResultMapping {
        &self.results
    }

    /// Builds and returns the energy system graph from the entities and
    /// connections added to the builder.
    pub(crate) fn build_graph(
        &self,
        config: Option<EnergySystemGraphConfig>,
    ) -> Result<EnergySystemGraph<TestEntity, TestConnection>, Error> {
        EnergySystemGraph::try_new(
            self.entities.clone(),
            self.connections.clone(),
            config.unwrap_or_default(),
        )
    }

    /// Builds the graph and the result table, with hourly steps starting at
    /// `start`.
    pub(crate) fn build_table(&self, start: &str) -> Result<ResultTable, Error> {
        let graph = self.build_graph(None)?;
        ResultTable::try_new(&graph, &self.results, &ResultTableConfig::new(ts(start)))
    }
}
