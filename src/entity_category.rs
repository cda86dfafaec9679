// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `EntityCategory` enum, which represents the
//! category of an entity in an energy system.

use crate::graph_traits::Node;
use std::fmt::Display;

/// Represents the type of a transformer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformerType {
    Simple,
    CombinedHeatPower,
}

impl Display for TransformerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformerType::Simple => write!(f, "Simple"),
            TransformerType::CombinedHeatPower => write!(f, "CombinedHeatPower"),
        }
    }
}

/// Represents the category of an entity.
///
/// The category is decided once, when the caller's model type is converted
/// into something implementing [`Node`][crate::Node], and is never inferred
/// from names afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityCategory {
    Unspecified,
    Bus,
    Source,
    Sink,
    Transformer(TransformerType),
    Storage,
    Commodity,
}

impl Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Unspecified => write!(f, "Unspecified"),
            EntityCategory::Bus => write!(f, "Bus"),
            EntityCategory::Source => write!(f, "Source"),
            EntityCategory::Sink => write!(f, "Sink"),
            EntityCategory::Transformer(transformer_type) => {
                write!(f, "{}Transformer", transformer_type)
            }
            EntityCategory::Storage => write!(f, "Storage"),
            EntityCategory::Commodity => write!(f, "Commodity"),
        }
    }
}

/// Predicates for checking the entity category of a `Node`.
pub(crate) trait CategoryPredicates: Node {
    fn is_unspecified(&self) -> bool {
        self.category() == EntityCategory::Unspecified
    }

    fn is_bus(&self) -> bool {
        self.category() == EntityCategory::Bus
    }

    fn is_source(&self) -> bool {
        self.category() == EntityCategory::Source
    }

    fn is_sink(&self) -> bool {
        self.category() == EntityCategory::Sink
    }

    fn is_transformer(&self) -> bool {
        matches!(self.category(), EntityCategory::Transformer(_))
    }

    fn is_storage(&self) -> bool {
        self.category() == EntityCategory::Storage
    }

    fn is_commodity(&self) -> bool {
        self.category() == EntityCategory::Commodity
    }
}

/// Implement the `CategoryPredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> CategoryPredicates for T {}
