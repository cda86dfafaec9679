// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the entities of an energy system, i.e. buses
//! and the components feeding or drawing from them, and the flows between
//! them.

mod creation;
mod retrieval;
mod validation;

pub mod iterators;

use crate::{Edge, EnergySystemGraphConfig, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Node`s stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any `entity_id`, so
/// that Nodes in the `DiGraph` can be retrieved from their `entity_id`s.
pub(crate) type NodeIndexMap = HashMap<String, NodeIndex>;

/// `Edge`s are not stored in the `DiGraph` instance, so we need to store them
/// separately.
///
/// `EdgeMap` can be used to lookup the `Edge` for any pair of source and
/// destination `NodeIndex` values.
pub(crate) type EdgeMap<E> = HashMap<(NodeIndex, NodeIndex), E>;

/// A graph representation of the entities of an energy system and the flows
/// between them.
pub struct EnergySystemGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: DiGraph<N, ()>,
    node_indices: NodeIndexMap,
    edges: EdgeMap<E>,
    config: EnergySystemGraphConfig,
}
