//! Data-driven network specification.
//!
//! The set of nodes, their domains, the parent structure, and every
//! factor's numbers are configuration, not code: a [`NetworkSpec`] can be
//! deserialized from JSON and compiled into a
//! [`Model`](crate::engine::model::Model) with
//! [`Model::from_spec`](crate::engine::model::Model::from_spec), so an
//! alternate network substitutes without code changes.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "name": "Rain", "states": ["yes", "no"],
//!       "factor": { "type": "table", "rows": [
//!         { "distribution": { "yes": 0.2, "no": 0.8 } } ] } },
//!     { "name": "WetGrass", "states": ["yes", "no"], "parents": ["Rain"],
//!       "factor": { "type": "table", "rows": [
//!         { "given": ["yes"], "distribution": { "yes": 0.9, "no": 0.1 } },
//!         { "given": ["no"], "distribution": { "yes": 0.05, "no": 0.95 } } ] } }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::errors::ModelError;

/// A complete, self-contained network description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Node declarations, in any order.
    pub nodes: Vec<NodeSpec>,
}

impl NetworkSpec {
    /// Parses a specification from JSON.
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        serde_json::from_str(source)
            .map_err(|e| ModelError::Configuration(format!("malformed network spec: {e}")))
    }
}

/// One node: its name, ordered domain, parents, and factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    /// The variable name.
    pub name: String,
    /// The ordered list of distinct state labels.
    pub states: Vec<String>,
    /// Parent variable names, in the order the factor's rows reference them.
    #[serde(default)]
    pub parents: Vec<String>,
    /// The node's conditional probability factor.
    pub factor: FactorSpec,
}

/// A factor specification, either tabular or parametric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FactorSpec {
    /// One explicit distribution per parent-state combination. A root
    /// node's prior is a single row with an empty `given` list.
    Table {
        /// The rows; together they must cover every combination of
        /// parent states exactly once.
        rows: Vec<TableRow>,
    },
    /// A logistic link for a binary-domain node: the probability of
    /// `positive_state` is `sigmoid(intercept + sum of matching weights)`.
    Logistic {
        /// The bias term of the linear predictor.
        intercept: f64,
        /// The state that receives the sigmoid probability.
        positive_state: String,
        /// Per-parent-state indicator contributions; a parent state with
        /// no entry contributes zero.
        weights: Vec<LogisticWeight>,
    },
}

/// One tabular row: a parent-state combination and its distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Parent state labels, in parent declaration order. Empty for roots.
    #[serde(default)]
    pub given: Vec<String>,
    /// Probability per state label of the node itself; must cover the
    /// whole domain and sum to 1.
    pub distribution: HashMap<String, f64>,
}

/// One indicator weight of a logistic factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticWeight {
    /// The parent variable the indicator tests.
    pub parent: String,
    /// The parent state that activates the weight.
    pub state: String,
    /// The contribution added to the linear predictor when active.
    pub weight: f64,
}
