// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent an entity and a connection.

use crate::entity_category::EntityCategory;

/**
This trait needs to be implemented by the type that represents an entity of
the energy system.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a small modeling layer:</summary>

```ignore
impl energy_system_result_table::Node for model::Bus {
    fn entity_id(&self) -> &str {
        &self.uid
    }

    fn category(&self) -> energy_system_result_table::EntityCategory {
        energy_system_result_table::EntityCategory::Bus
    }

    fn carrier(&self) -> &str {
        &self.carrier
    }
}

impl energy_system_result_table::Node for model::Component {
    fn entity_id(&self) -> &str {
        &self.uid
    }

    fn category(&self) -> energy_system_result_table::EntityCategory {
        use energy_system_result_table::{EntityCategory as ec, TransformerType as tt};

        match self.kind {
            model::ComponentKind::Source | model::ComponentKind::RenewableSource => ec::Source,
            model::ComponentKind::Sink => ec::Sink,
            model::ComponentKind::SimpleTransformer => ec::Transformer(tt::Simple),
            model::ComponentKind::SimpleChp => ec::Transformer(tt::CombinedHeatPower),
            model::ComponentKind::Storage => ec::Storage,
            model::ComponentKind::Commodity => ec::Commodity,
        }
    }

    fn carrier(&self) -> &str {
        ""
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the unique identifier of the entity.
    fn entity_id(&self) -> &str;
    /// Returns the category of the entity.
    fn category(&self) -> EntityCategory;
    /// Returns the carrier of the entity, e.g. `el` or `gas`.
    ///
    /// For buses this becomes the bus category column of the result table.
    fn carrier(&self) -> &str;
}

/**
This trait needs to be implemented by the type that represents a connection,
i.e. a directed flow between two entities.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation:</summary>

```ignore
impl energy_system_result_table::Edge for model::Flow {
    fn source(&self) -> &str {
        &self.from_uid
    }

    fn destination(&self) -> &str {
        &self.to_uid
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the id of the entity the flow starts at.
    fn source(&self) -> &str;
    /// Returns the id of the entity the flow ends at.
    fn destination(&self) -> &str;
}
