// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating that all entities in an [`EnergySystemGraph`] are
//! connected correctly.

use crate::{entity_category::CategoryPredicates, Edge, Error, Node};

use super::EnergySystemGraphValidator;

impl<N, E> EnergySystemGraphValidator<'_, N, E>
where
    N: Node,
    E: Edge,
{
    /// Validates that buses are only connected to components, unless
    /// bus-to-bus connections are allowed by the config.
    pub(super) fn validate_buses(&self) -> Result<(), Error> {
        for bus in self.esg.entities().filter(|n| n.is_bus()) {
            if self.esg.config.allow_bus_to_bus_connections {
                for successor in self.esg.successors(bus.entity_id())?.filter(|n| n.is_bus()) {
                    tracing::warn!(
                        "Bus {} is connected directly to bus {}.",
                        bus.entity_id(),
                        successor.entity_id()
                    );
                }
                continue;
            }
            self.ensure_on_predecessors(bus, |n| !n.is_bus(), "not Buses")?;
            self.ensure_on_successors(bus, |n| !n.is_bus(), "not Buses")?;
        }
        Ok(())
    }

    /// Validates that Sources and Commodities:
    ///  - don't have any predecessors,
    ///  - have only Buses as successors.
    pub(super) fn validate_sources(&self) -> Result<(), Error> {
        for source in self
            .esg
            .entities()
            .filter(|n| n.is_source() || n.is_commodity())
        {
            self.ensure_root(source)?;
            self.ensure_on_successors(source, |n| n.is_bus(), "Buses")?;
        }
        Ok(())
    }

    /// Validates that Sinks:
    ///  - have only Buses as predecessors,
    ///  - don't have any successors.
    pub(super) fn validate_sinks(&self) -> Result<(), Error> {
        for sink in self.esg.entities().filter(|n| n.is_sink()) {
            self.ensure_leaf(sink)?;
            self.ensure_on_predecessors(sink, |n| n.is_bus(), "Buses")?;
        }
        Ok(())
    }

    /// Validates that Transformers have only Buses as predecessors and
    /// successors.
    pub(super) fn validate_transformers(&self) -> Result<(), Error> {
        for transformer in self.esg.entities().filter(|n| n.is_transformer()) {
            self.ensure_on_predecessors(transformer, |n| n.is_bus(), "Buses")?;
            self.ensure_on_successors(transformer, |n| n.is_bus(), "Buses")?;
        }
        Ok(())
    }

    /// Validates that Storages have only Buses as predecessors and
    /// successors.
    pub(super) fn validate_storages(&self) -> Result<(), Error> {
        for storage in self.esg.entities().filter(|n| n.is_storage()) {
            self.ensure_on_predecessors(storage, |n| n.is_bus(), "Buses")?;
            self.ensure_on_successors(storage, |n| n.is_bus(), "Buses")?;
        }
        Ok(())
    }
}
