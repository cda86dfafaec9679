// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating an [`EnergySystemGraph`].

mod invariant_checks;
mod validate_neighbors;

use crate::{Edge, EnergySystemGraph, Error, Node};

pub(crate) struct EnergySystemGraphValidator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    esg: &'a EnergySystemGraph<N, E>,
}

impl<N, E> EnergySystemGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Checks that every entity is connected only to entities it can
    /// exchange flows with.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = EnergySystemGraphValidator { esg: self };

        validator.validate_buses()?;
        validator.validate_sources()?;
        validator.validate_sinks()?;
        validator.validate_transformers()?;
        validator.validate_storages()?;

        Ok(())
    }
}
