// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Helper methods for checking invariants of an [`EnergySystemGraph`].

use crate::{Edge, Error, Node};

use super::EnergySystemGraphValidator;

impl<N, E> EnergySystemGraphValidator<'_, N, E>
where
    N: Node,
    E: Edge,
{
    /// Checks that the given node is a leaf node.
    pub(super) fn ensure_leaf(&self, node: &N) -> Result<(), Error> {
        if let Some(successor) = self.esg.successors(node.entity_id())?.next() {
            return Err(Error::invalid_graph(format!(
                "{}:{} can't have any successors. Found {}:{}.",
                node.category(),
                node.entity_id(),
                successor.category(),
                successor.entity_id()
            )));
        }
        Ok(())
    }

    /// Checks that the given node is a root node.
    pub(super) fn ensure_root(&self, node: &N) -> Result<(), Error> {
        if let Some(predecessor) = self.esg.predecessors(node.entity_id())?.next() {
            return Err(Error::invalid_graph(format!(
                "{}:{} can't have any predecessors. Found {}:{}.",
                node.category(),
                node.entity_id(),
                predecessor.category(),
                predecessor.entity_id()
            )));
        }
        Ok(())
    }

    /// Checks that the given predicate holds for all predecessors of the given node.
    pub(super) fn ensure_on_predecessors(
        &self,
        node: &N,
        predicate: impl Fn(&N) -> bool,
        failure_message: &str,
    ) -> Result<(), Error> {
        for predecessor in self.esg.predecessors(node.entity_id())? {
            if !predicate(predecessor) {
                return Err(Error::invalid_graph(format!(
                    "{}:{} can only have predecessors that are {}. Found {}:{}.",
                    node.category(),
                    node.entity_id(),
                    failure_message,
                    predecessor.category(),
                    predecessor.entity_id()
                )));
            }
        }
        Ok(())
    }

    /// Checks that the given predicate holds for all successors of the given node.
    pub(super) fn ensure_on_successors(
        &self,
        node: &N,
        predicate: impl Fn(&N) -> bool,
        failure_message: &str,
    ) -> Result<(), Error> {
        for successor in self.esg.successors(node.entity_id())? {
            if !predicate(successor) {
                return Err(Error::invalid_graph(format!(
                    "{}:{} can only have successors that are {}. Found {}:{}.",
                    node.category(),
                    node.entity_id(),
                    failure_message,
                    successor.category(),
                    successor.entity_id()
                )));
            }
        }
        Ok(())
    }
}
