// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Turns a [`ResultMapping`] into the sorted rows of a
//! [`ResultTable`][crate::ResultTable].

use std::sync::Arc;

use crate::{
    entity_category::CategoryPredicates, Counterparty, Edge, EnergySystemGraph, Error, Node,
    ResultMapping, ResultTableConfig,
};

use super::{FlowDirection, RowKey, TableRow, DUALS_LABEL};

/// One series, and where it goes in the table.
struct ResultEntry<'a> {
    bus_id: Arc<str>,
    bus_category: Arc<str>,
    direction: FlowDirection,
    counterparty_id: Arc<str>,
    series: &'a [f64],
}

pub(super) struct ResultTableBuilder<'a, N, E>
where
    N: Node,
    E: Edge,
{
    esg: &'a EnergySystemGraph<N, E>,
    results: &'a ResultMapping,
    config: &'a ResultTableConfig,
}

impl<'a, N, E> ResultTableBuilder<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(super) fn new(
        esg: &'a EnergySystemGraph<N, E>,
        results: &'a ResultMapping,
        config: &'a ResultTableConfig,
    ) -> Self {
        Self {
            esg,
            results,
            config,
        }
    }

    /// Collects all series, expands them into rows and sorts the rows once.
    pub(super) fn build(self) -> Result<Vec<TableRow>, Error> {
        let entries = self.collect_entries()?;

        let num_rows = entries.iter().map(|e| e.series.len()).sum();
        let mut rows = Vec::with_capacity(num_rows);
        for entry in &entries {
            for (step, value) in entry.series.iter().enumerate() {
                rows.push(TableRow {
                    key: RowKey {
                        bus_id: entry.bus_id.clone(),
                        bus_category: entry.bus_category.clone(),
                        direction: entry.direction,
                        counterparty_id: entry.counterparty_id.clone(),
                        timestamp: self
                            .config
                            .frequency
                            .timestamp_at(self.config.start, step)?,
                    },
                    value: *value,
                });
            }
        }

        rows.sort_by(|a, b| a.key.cmp(&b.key));

        if let Some(pair) = rows.windows(2).find(|pair| pair[0].key == pair[1].key) {
            return Err(Error::duplicate_row(format!(
                "Row {} appears more than once.",
                pair[0].key
            )));
        }

        tracing::debug!(
            "Built result table with {} rows from {} series.",
            rows.len(),
            entries.len()
        );

        Ok(rows)
    }

    fn collect_entries(&self) -> Result<Vec<ResultEntry<'a>>, Error> {
        let mut entries = vec![];

        for (entity_id, entity_results) in self.results.iter() {
            let entity = self.esg.entity(entity_id)?;
            if !entity.is_bus() {
                tracing::debug!("Skipping results of {}, which is not a bus.", entity_id);
                continue;
            }

            let bus_id: Arc<str> = Arc::from(entity_id);
            let bus_category: Arc<str> = Arc::from(entity.carrier());
            let num_entries = entries.len();

            let mut push = |direction, counterparty_id: &str, series: &'a [f64]| {
                entries.push(ResultEntry {
                    bus_id: bus_id.clone(),
                    bus_category: bus_category.clone(),
                    direction,
                    counterparty_id: Arc::from(counterparty_id),
                    series,
                })
            };

            let to_bus = Counterparty::entity(entity_id);
            for predecessor in self.esg.predecessors(entity_id)? {
                let predecessor_id = predecessor.entity_id();
                if !self.results.contains_entity(predecessor_id) {
                    continue;
                }
                let series = self.results.series(predecessor_id, &to_bus).ok_or_else(|| {
                    Error::series_not_found(format!(
                        "{predecessor_id} has results, but none towards bus {entity_id}."
                    ))
                })?;
                push(FlowDirection::Input, predecessor_id, series.as_slice());
            }

            for (counterparty, series) in entity_results {
                match counterparty {
                    _ if counterparty.is_entity(entity_id) => {
                        push(FlowDirection::Other, DUALS_LABEL, series.as_slice())
                    }
                    Counterparty::Label(label) => {
                        push(FlowDirection::Other, label.as_str(), series.as_slice())
                    }
                    Counterparty::Entity(id) => {
                        push(FlowDirection::Output, id.as_str(), series.as_slice())
                    }
                }
            }

            tracing::debug!(
                "Collected {} series for bus {}.",
                entries.len() - num_entries,
                entity_id
            );
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{ts, EnergySystemBuilder};
    use crate::{Error, FlowDirection, ResultTable, ResultTableConfig, DUALS_LABEL};

    fn rows_of(
        table: &ResultTable,
        bus_id: &str,
        direction: FlowDirection,
        counterparty_id: &str,
    ) -> Vec<(String, f64)> {
        table
            .iter()
            .filter(|r| {
                &*r.key.bus_id == bus_id
                    && r.key.direction == direction
                    && &*r.key.counterparty_id == counterparty_id
            })
            .map(|r| (r.key.timestamp.format("%H:%M").to_string(), r.value))
            .collect()
    }

    fn chp_system() -> EnergySystemBuilder {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_gas", "gas")
            .bus("b_el", "el")
            .bus("b_th", "th")
            .add_entity("rgas", crate::EntityCategory::Commodity)
            .transformer("pp_chp")
            .sink("demand_el")
            .sink("demand_th")
            .flow("rgas", "b_gas", &[5.0, 6.0, 7.0])
            .flow("b_gas", "pp_chp", &[5.0, 6.0, 7.0])
            .flow("pp_chp", "b_el", &[2.0, 2.4, 2.8])
            .flow("pp_chp", "b_th", &[1.5, 1.8, 2.1])
            .flow("b_el", "demand_el", &[2.0, 2.4, 2.8])
            .flow("b_th", "demand_th", &[1.5, 1.8, 2.1])
            .duals("b_el", &[30.0, 31.0, 32.0]);
        builder
    }

    #[test]
    fn test_example_scenario() -> Result<(), Error> {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("B", "el")
            .source("A")
            .flow("A", "B", &[1.0, 2.0, 3.0])
            .label("B", "dual", &[9.0, 9.0]);
        let table = builder.build_table("2020-01-01 00:00")?;

        assert_eq!(table.len(), 5);
        assert_eq!(
            rows_of(&table, "B", FlowDirection::Input, "A"),
            vec![
                ("00:00".to_string(), 1.0),
                ("01:00".to_string(), 2.0),
                ("02:00".to_string(), 3.0),
            ]
        );
        assert_eq!(
            rows_of(&table, "B", FlowDirection::Other, "dual"),
            vec![("00:00".to_string(), 9.0), ("01:00".to_string(), 9.0)]
        );
        assert!(table.iter().all(|r| &*r.key.bus_category == "el"));

        Ok(())
    }

    #[test]
    fn test_row_count_and_order() -> Result<(), Error> {
        let table = chp_system().build_table("2016-01-01 00:00:00")?;

        // b_gas: input rgas, output pp_chp.  b_el: input pp_chp, output
        // demand_el, duals.  b_th: input pp_chp, output demand_th.
        assert_eq!(table.len(), 7 * 3);
        assert_eq!(table.bus_ids(), vec!["b_el", "b_gas", "b_th"]);

        let mut resorted = table.rows().to_vec();
        resorted.sort_by(|a, b| a.key.cmp(&b.key));
        assert_eq!(resorted, table.rows());
        assert!(table.rows().windows(2).all(|w| w[0].key < w[1].key));

        assert_eq!(
            table
                .iter()
                .filter(|r| &*r.key.bus_id == "b_el")
                .map(|r| (r.key.direction, &*r.key.counterparty_id))
                .collect::<Vec<_>>(),
            vec![
                (FlowDirection::Input, "pp_chp"),
                (FlowDirection::Input, "pp_chp"),
                (FlowDirection::Input, "pp_chp"),
                (FlowDirection::Output, "demand_el"),
                (FlowDirection::Output, "demand_el"),
                (FlowDirection::Output, "demand_el"),
                (FlowDirection::Other, DUALS_LABEL),
                (FlowDirection::Other, DUALS_LABEL),
                (FlowDirection::Other, DUALS_LABEL),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_duals_label() -> Result<(), Error> {
        let table = chp_system().build_table("2016-01-01 00:00:00")?;

        assert_eq!(
            rows_of(&table, "b_el", FlowDirection::Other, DUALS_LABEL),
            vec![
                ("00:00".to_string(), 30.0),
                ("01:00".to_string(), 31.0),
                ("02:00".to_string(), 32.0),
            ]
        );
        assert!(rows_of(&table, "b_el", FlowDirection::Output, "b_el").is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_and_isolated() -> Result<(), Error> {
        let mut builder = EnergySystemBuilder::new();
        builder.bus("b_el", "el").bus("b_island", "el");
        assert!(builder
            .build_table("2016-01-01")
            .is_ok_and(|t| t.is_empty()));

        builder.source("pv").flow("pv", "b_el", &[1.0, 2.0]);
        builder.label("b_el", "excess", &[0.0, 0.0]);
        builder.label("b_island", "note", &[]);
        let table = builder.build_table("2016-01-01")?;
        assert_eq!(table.len(), 4);
        assert_eq!(table.bus_ids(), vec!["b_el"]);

        Ok(())
    }

    #[test]
    fn test_series_lengths_may_differ() -> Result<(), Error> {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .source("pv")
            .sink("demand")
            .flow("pv", "b_el", &[1.0, 2.0, 3.0, 4.0])
            .flow("b_el", "demand", &[1.0]);
        let graph = builder.build_graph(None)?;
        let config = ResultTableConfig::try_from_strs("2016-01-01 00:00", "15min")?;
        let table = ResultTable::try_new(&graph, builder.results(), &config)?;

        assert_eq!(table.len(), 5);
        assert_eq!(table.start(), ts("2016-01-01 00:00"));
        assert_eq!(table.frequency().to_string(), "15min");
        assert_eq!(
            rows_of(&table, "b_el", FlowDirection::Input, "pv")
                .into_iter()
                .map(|(t, _)| t)
                .collect::<Vec<_>>(),
            vec!["00:00", "00:15", "00:30", "00:45"]
        );
        assert_eq!(
            table.rows().last().map(|r| r.key.timestamp),
            Some(ts("2016-01-01 00:00"))
        );

        Ok(())
    }

    #[test]
    fn test_predecessors_without_results() -> Result<(), Error> {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .source("pv")
            .source("wind")
            .connect("wind", "b_el")
            .flow("pv", "b_el", &[1.0, 2.0])
            .label("b_el", "excess", &[0.0]);
        let table = builder.build_table("2016-01-01")?;

        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|r| &*r.key.counterparty_id != "wind"));
        assert_eq!(
            rows_of(&table, "b_el", FlowDirection::Input, "pv"),
            vec![("00:00".to_string(), 1.0), ("01:00".to_string(), 2.0)]
        );
        assert_eq!(
            rows_of(&table, "b_el", FlowDirection::Other, "excess"),
            vec![("00:00".to_string(), 0.0)]
        );

        Ok(())
    }

    #[test]
    fn test_non_bus_entities_ignored() -> Result<(), Error> {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .transformer("pp_coal")
            .bus("b_coal", "coal")
            .connect("b_coal", "pp_coal")
            .flow("pp_coal", "b_el", &[1.0, 1.0])
            .label("pp_coal", "co2", &[0.3, 0.3]);
        let table = builder.build_table("2016-01-01")?;

        // b_el has no own entry in the results, so it contributes nothing.
        assert!(table.is_empty());

        builder.label("b_el", "excess", &[0.0, 0.0]);
        let table = builder.build_table("2016-01-01")?;
        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|r| &*r.key.counterparty_id != "co2"));

        Ok(())
    }

    #[test]
    fn test_errors() {
        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .source("pv")
            .connect("pv", "b_el")
            .label("b_el", "excess", &[0.0])
            .label("pv", "curtailment", &[1.0]);
        assert!(builder.build_table("2016-01-01").is_err_and(|e| e
            == Error::series_not_found("pv has results, but none towards bus b_el.")));

        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .raw_result("wind", "b_el", vec![1.0]);
        assert!(builder
            .build_table("2016-01-01")
            .is_err_and(|e| e == Error::entity_not_found("Entity with id wind not found.")));

        let mut builder = EnergySystemBuilder::new();
        builder
            .bus("b_el", "el")
            .duals("b_el", &[1.0])
            .label("b_el", DUALS_LABEL, &[2.0]);
        assert!(builder.build_table("2016-01-01").is_err_and(|e| e
            == Error::duplicate_row(
                "Row (b_el, el, other, duals, 2016-01-01 00:00:00) appears more than once."
            )));
    }
}
