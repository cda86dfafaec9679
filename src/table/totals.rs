// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Horizon-wide aggregates of every series in a [`ResultTable`].

use std::sync::Arc;

use crate::ResultTable;

use super::FlowDirection;

/// The sum and maximum of one series over the whole horizon.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowTotal {
    pub bus_id: Arc<str>,
    pub bus_category: Arc<str>,
    pub direction: FlowDirection,
    pub counterparty_id: Arc<str>,
    pub steps: usize,
    pub sum: f64,
    pub max: f64,
}

impl ResultTable {
    /// Returns one [`FlowTotal`] per series, in table order.
    pub fn totals(&self) -> Vec<FlowTotal> {
        let mut totals: Vec<FlowTotal> = vec![];

        for row in self.iter() {
            let key = &row.key;
            let continues_last = totals.last().is_some_and(|total| {
                total.bus_id == key.bus_id
                    && total.bus_category == key.bus_category
                    && total.direction == key.direction
                    && total.counterparty_id == key.counterparty_id
            });

            if let (true, Some(total)) = (continues_last, totals.last_mut()) {
                total.steps += 1;
                total.sum += row.value;
                total.max = total.max.max(row.value);
                continue;
            }

            totals.push(FlowTotal {
                bus_id: key.bus_id.clone(),
                bus_category: key.bus_category.clone(),
                direction: key.direction,
                counterparty_id: key.counterparty_id.clone(),
                steps: 1,
                sum: row.value,
                max: row.value,
            });
        }

        totals
    }

    /// Returns the total of the series of `bus_id` towards `counterparty_id`
    /// in the given direction, if there is one.
    pub fn total(
        &self,
        bus_id: &str,
        direction: FlowDirection,
        counterparty_id: &str,
    ) -> Option<FlowTotal> {
        self.totals().into_iter().find(|t| {
            &*t.bus_id == bus_id && t.direction == direction && &*t.counterparty_id == counterparty_id
        })
    }
}
