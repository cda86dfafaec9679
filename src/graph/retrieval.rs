// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving entities and connections from an
//! [`EnergySystemGraph`].

use crate::entity_category::CategoryPredicates;
use crate::iterators::{Connections, Entities, Neighbors};
use crate::{Edge, EnergySystemGraph, Error, Node};

/// `Entity` and `Connection` retrieval.
impl<N, E> EnergySystemGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the entity with the given `entity_id`, if it exists.
    pub fn entity(&self, entity_id: &str) -> Result<&N, Error> {
        self.node_indices
            .get(entity_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::entity_not_found(format!("Entity with id {entity_id} not found.")))
    }

    /// Returns an iterator over the entities in the graph.
    pub fn entities(&self) -> Entities<'_, N> {
        Entities {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the buses in the graph.
    pub fn buses(&self) -> impl Iterator<Item = &N> {
        self.entities().filter(|n| n.is_bus())
    }

    /// Returns an iterator over the connections in the graph.
    pub fn connections(&self) -> Connections<'_, N, E> {
        Connections {
            esg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the *predecessors* of the entity with the
    /// given `entity_id`, i.e. the entities flowing into it.
    ///
    /// Returns an error if the given `entity_id` does not exist.
    pub fn predecessors(&self, entity_id: &str) -> Result<Neighbors<'_, N>, Error> {
        self.neighbors(entity_id, petgraph::Direction::Incoming)
    }

    /// Returns an iterator over the *successors* of the entity with the
    /// given `entity_id`, i.e. the entities it flows into.
    ///
    /// Returns an error if the given `entity_id` does not exist.
    pub fn successors(&self, entity_id: &str) -> Result<Neighbors<'_, N>, Error> {
        self.neighbors(entity_id, petgraph::Direction::Outgoing)
    }

    fn neighbors(
        &self,
        entity_id: &str,
        direction: petgraph::Direction,
    ) -> Result<Neighbors<'_, N>, Error> {
        self.node_indices
            .get(entity_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self.graph.neighbors_directed(index, direction),
            })
            .ok_or_else(|| Error::entity_not_found(format!("Entity with id {entity_id} not found.")))
    }
}
