//! Error types for network construction and queries.

use thiserror::Error;

/// Errors raised while building a network, registering factors, or
/// answering queries.
///
/// Construction-time failures (`Structure`, `Configuration`) are fatal: no
/// usable model exists afterwards. Query-time failures are caller errors
/// and leave the model untouched; each call fails independently and there
/// is no partial result. All failures are deterministic functions of the
/// input, so retrying without changing the input never helps.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error
/// variants without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ModelError {
    /// The declared parent graph is malformed: a cycle, a dangling parent
    /// reference, a duplicate node, or an invalid state domain.
    #[error("structure error: {0}")]
    Structure(String),

    /// A factor specification is incomplete or invalid, e.g. a tabular
    /// factor that does not cover every parent-state combination or a row
    /// that does not sum to one.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A query or evidence key names a variable the network does not declare.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// An evidence value lies outside the corresponding variable's domain.
    #[error("invalid state '{state}' for variable '{node}'")]
    InvalidState {
        /// The variable the state was assigned to.
        node: String,
        /// The offending state label.
        state: String,
    },

    /// The query is malformed, e.g. the query variable also appears in the
    /// evidence.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A joint-probability evaluation received an assignment that does not
    /// cover every node.
    #[error("incomplete assignment: {0}")]
    IncompleteAssignment(String),
}
