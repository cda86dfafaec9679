// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur in the library.

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors and predicates for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident, $pred:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub(crate) enum ErrorKind {
            $(
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                    }
                }
            )*
        }

        /// Predicates for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Returns `true` if this is an error of the `",
                    stringify!($kind),
                    "` kind."
                )]
                pub fn $pred(&self) -> bool {
                    self.kind == ErrorKind::$kind
                }
            )*
        }
    };
}

ErrorKind!(
    (DuplicateRow, duplicate_row, is_duplicate_row),
    (EmptyResult, empty_result, is_empty_result),
    (EntityNotFound, entity_not_found, is_entity_not_found),
    (Internal, internal, is_internal),
    (InvalidConnection, invalid_connection, is_invalid_connection),
    (InvalidEntity, invalid_entity, is_invalid_entity),
    (InvalidFrequency, invalid_frequency, is_invalid_frequency),
    (InvalidGraph, invalid_graph, is_invalid_graph),
    (InvalidSeries, invalid_series, is_invalid_series),
    (InvalidTimestamp, invalid_timestamp, is_invalid_timestamp),
    (SeriesNotFound, series_not_found, is_series_not_found)
);

/// An error that can occur while building an
/// [EnergySystemGraph][crate::EnergySystemGraph], building a
/// [ResultTable][crate::ResultTable] or querying it.
#[derive(Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl Error {
    /// Returns the human readable description of the error.
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_predicates() {
        let err = Error::empty_result("No rows match bus b_el.");
        assert_eq!(err.to_string(), "EmptyResult: No rows match bus b_el.");
        assert!(err.is_empty_result());
        assert!(!err.is_duplicate_row());
        assert_eq!(err.description(), "No rows match bus b_el.");

        let err = Error::invalid_frequency("Unknown unit: x");
        assert_eq!(err.to_string(), "InvalidFrequency: Unknown unit: x");
        assert!(err.is_invalid_frequency());
    }
}
