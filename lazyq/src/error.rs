use thiserror::Error;
use tracing::debug;

/// Query error
///
/// Raised synchronously by the operator that needed an element (or a
/// unique key) and could not produce one. Lazy operators never raise
/// these; a pipeline only fails at the call that pulls the offending
/// element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty sequence.
    ///
    /// An element-access or aggregate operator required at least one
    /// (matching) item and found none.
    #[error("sequence contains no matching items")]
    EmptySequence,
    /// Multiple matches.
    ///
    /// `single` or `single_or_default` found more than one matching item.
    #[error("sequence contains more than one matching item")]
    MultipleMatches,
    /// Index out of range.
    ///
    /// `element_at` was asked for an index at or beyond the end of the
    /// sequence.
    #[error("no item at index {index}, sequence has {len} items")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of items the sequence turned out to have
        len: usize,
    },
    /// Duplicate key.
    ///
    /// Two items produced equal keys while building a dictionary with
    /// `try_to_dict_by`.
    #[error("duplicate key {key}")]
    DuplicateKey {
        /// Debug rendering of the key
        key: String,
    },
    /// Not numeric.
    ///
    /// `average` met an item that has no `f64` value.
    #[error("item has no numeric value")]
    NotNumeric,
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn empty_sequence(operator: &'static str) -> Error {
    debug!(operator, "empty sequence");
    Error::EmptySequence
}

pub(crate) fn multiple_matches(operator: &'static str) -> Error {
    debug!(operator, "more than one match");
    Error::MultipleMatches
}

pub(crate) fn not_numeric() -> Error {
    debug!("item has no f64 value");
    Error::NotNumeric
}
