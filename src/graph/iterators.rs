// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over entities and connections in an `EnergySystemGraph`.

use petgraph::graph::DiGraph;

use crate::{Edge, EnergySystemGraph, Node};

/// An iterator over the entities in an `EnergySystemGraph`.
pub struct Entities<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<N>>,
}

impl<'a, N> Iterator for Entities<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the connections in an `EnergySystemGraph`.
pub struct Connections<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(crate) esg: &'a EnergySystemGraph<N, E>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<()>>,
}

impl<'a, N, E> Iterator for Connections<'a, N, E>
where
    N: Node,
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .and_then(|e| self.esg.edges.get(&(e.source(), e.target())))
    }
}

/// An iterator over the neighbors of an entity in an `EnergySystemGraph`.
pub struct Neighbors<'a, N>
where
    N: Node,
{
    pub(crate) graph: &'a DiGraph<N, ()>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, ()>,
}

impl<'a, N> Iterator for Neighbors<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
