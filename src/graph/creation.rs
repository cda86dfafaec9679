// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`EnergySystemGraph`] instances from given entities
//! and connections.

use petgraph::graph::DiGraph;

use crate::{entity_category::CategoryPredicates, Edge, EnergySystemGraphConfig, Error, Node};

use super::{EdgeMap, EnergySystemGraph, NodeIndexMap};

/// `EnergySystemGraph` instantiation.
impl<N, E> EnergySystemGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`EnergySystemGraph`] from the given entities and
    /// connections.
    ///
    /// Returns an error if the graph is invalid.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        entities: NodeIterator,
        connections: EdgeIterator,
        config: EnergySystemGraphConfig,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(entities)?;

        let mut esg = Self {
            graph,
            node_indices: indices,
            edges: EdgeMap::new(),
            config,
        };
        esg.add_connections(connections)?;

        esg.validate()?;

        Ok(esg)
    }

    fn create_graph(
        entities: impl IntoIterator<Item = N>,
    ) -> Result<(DiGraph<N, ()>, NodeIndexMap), Error> {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();

        for entity in entities {
            let eid = entity.entity_id().to_string();

            if eid.is_empty() {
                return Err(Error::invalid_entity(format!(
                    "Entity ID can't be empty for {} entity.",
                    entity.category()
                )));
            }
            if entity.is_unspecified() {
                return Err(Error::invalid_entity(format!(
                    "EntityCategory not specified for entity: {eid}"
                )));
            }
            if entity.is_bus() && entity.carrier().is_empty() {
                return Err(Error::invalid_entity(format!(
                    "Carrier not specified for bus: {eid}"
                )));
            }
            if indices.contains_key(&eid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate entity ID found: {eid}"
                )));
            }

            let idx = graph.add_node(entity);
            indices.insert(eid, idx);
        }

        Ok((graph, indices))
    }

    fn add_connections(&mut self, connections: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for connection in connections {
            let sid = connection.source();
            let did = connection.destination();

            if sid == did {
                return Err(Error::invalid_connection(format!(
                    "Connection:({sid}, {did}) Can't connect an entity to itself."
                )));
            }
            for eid in [sid, did] {
                if !self.node_indices.contains_key(eid) {
                    return Err(Error::invalid_connection(format!(
                        "Connection:({sid}, {did}) Can't find an entity with ID {eid}"
                    )));
                }
            }

            let source_idx = self.node_indices[sid];
            let dest_idx = self.node_indices[did];
            self.graph.update_edge(source_idx, dest_idx, ());
            self.edges.insert((source_idx, dest_idx), connection);
        }

        Ok(())
    }
}
