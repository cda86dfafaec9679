// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The raw output of an optimization run: for every entity, the time series
//! of its flows towards each of its counterparties.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::Error;

/// The values of one flow, one per simulation step.
pub type Series = Vec<f64>;

/// The other end of a result series.
///
/// Most series describe a flow towards another entity.  Solvers also attach
/// auxiliary series to entities under a plain text label, and series keyed by
/// the entity itself (e.g. the duals of a bus's balance constraint).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Counterparty {
    Entity(String),
    Label(String),
}

impl Counterparty {
    /// Creates a counterparty referring to the entity with the given id.
    pub fn entity(entity_id: impl Into<String>) -> Self {
        Self::Entity(entity_id.into())
    }

    /// Creates a text-labeled counterparty.
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Returns the entity id or the label.
    pub fn id(&self) -> &str {
        match self {
            Self::Entity(id) | Self::Label(id) => id,
        }
    }

    /// Returns `true` if this is a text label rather than an entity.
    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label(_))
    }

    /// Returns `true` if this counterparty is the entity with the given id.
    pub fn is_entity(&self, entity_id: &str) -> bool {
        matches!(self, Self::Entity(id) if id == entity_id)
    }
}

impl Display for Counterparty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity(id) => write!(f, "{id}"),
            Self::Label(label) => write!(f, "'{label}'"),
        }
    }
}

/// The series of one entity, keyed by counterparty.
pub type EntityResults = BTreeMap<Counterparty, Series>;

/// Solver results, keyed by the id of the entity they belong to.
///
/// The mapping is filled once after a solve and handed to
/// [`ResultTable::try_new`][crate::ResultTable::try_new]; it is not modified
/// by this library.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultMapping {
    results: BTreeMap<String, EntityResults>,
}

impl ResultMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `series` as the results of `entity_id` towards `counterparty`.
    ///
    /// Returns the series previously stored under the same key, if any.
    pub fn insert(
        &mut self,
        entity_id: impl Into<String>,
        counterparty: Counterparty,
        series: Series,
    ) -> Option<Series> {
        self.results
            .entry(entity_id.into())
            .or_default()
            .insert(counterparty, series)
    }

    /// Stores the flow from `from` to the entity `to`.
    pub fn insert_flow(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        series: Series,
    ) -> Option<Series> {
        self.insert(from, Counterparty::entity(to), series)
    }

    /// Stores a text-labeled auxiliary series of `entity_id`.
    pub fn insert_label(
        &mut self,
        entity_id: impl Into<String>,
        label: impl Into<String>,
        series: Series,
    ) -> Option<Series> {
        self.insert(entity_id, Counterparty::label(label), series)
    }

    /// Stores a series keyed by the entity itself, e.g. the duals of a bus.
    pub fn insert_duals(&mut self, entity_id: impl Into<String>, series: Series) -> Option<Series> {
        let entity_id = entity_id.into();
        let counterparty = Counterparty::entity(entity_id.clone());
        self.insert(entity_id, counterparty, series)
    }

    /// Parses textual `values` and stores them like [`insert`][Self::insert].
    ///
    /// Returns an error naming the first value that is not a number.  Nothing
    /// is stored in that case.
    pub fn try_insert_parsed<S: AsRef<str>>(
        &mut self,
        entity_id: impl Into<String>,
        counterparty: Counterparty,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Option<Series>, Error> {
        let entity_id = entity_id.into();
        let series = values
            .into_iter()
            .enumerate()
            .map(|(step, value)| {
                let value = value.as_ref();
                value.trim().parse::<f64>().map_err(|e| {
                    Error::invalid_series(format!(
                        "Series {entity_id} -> {counterparty}: value '{value}' at step {step} \
                         is not a number: {e}"
                    ))
                })
            })
            .collect::<Result<Series, Error>>()?;

        Ok(self.insert(entity_id, counterparty, series))
    }

    /// Returns `true` if there are results for the given entity.
    pub fn contains_entity(&self, entity_id: &str) -> bool {
        self.results.contains_key(entity_id)
    }

    /// Returns all series of the given entity, if there are any.
    pub fn entity_results(&self, entity_id: &str) -> Option<&EntityResults> {
        self.results.get(entity_id)
    }

    /// Returns the series of `entity_id` towards `counterparty`, if any.
    pub fn series(&self, entity_id: &str, counterparty: &Counterparty) -> Option<&Series> {
        self.results
            .get(entity_id)
            .and_then(|results| results.get(counterparty))
    }

    /// Returns an iterator over the entities and their series, ordered by
    /// entity id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityResults)> {
        self.results.iter().map(|(id, results)| (id.as_str(), results))
    }

    /// Returns the number of entities with results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if there are no results at all.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
