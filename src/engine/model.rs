//! A network structure paired with its registered factors.
//!
//! [`Model`] is the query surface: it owns an immutable [`Network`] and a
//! factor per node, validates caller input, and dispatches to the joint
//! evaluator and the enumeration engine. Models are cheap to share:
//! every query is a pure computation with no interior mutability.

use crate::config::{FactorSpec, NetworkSpec};
use crate::engine::assignment::Assignment;
use crate::engine::errors::ModelError;
use crate::engine::factor::FactorSet;
use crate::engine::inference::{posterior, Posterior};
use crate::engine::joint::joint_probability;
use crate::engine::network::Network;

/// An immutable Bayesian network model: structure plus factors.
#[derive(Debug, Clone)]
pub struct Model {
    network: Network,
    factors: FactorSet,
}

impl Model {
    /// Wraps a network with no factors registered yet.
    pub fn new(network: Network) -> Self {
        let factors = FactorSet::for_network(&network);
        Self { network, factors }
    }

    /// Builds a complete model from a data-driven specification,
    /// constructing the network and registering every node's factor.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self, ModelError> {
        let mut builder = Network::builder();
        for node in &spec.nodes {
            let states: Vec<&str> = node.states.iter().map(String::as_str).collect();
            let parents: Vec<&str> = node.parents.iter().map(String::as_str).collect();
            builder = builder.node(&node.name, &states, &parents);
        }
        let mut model = Model::new(builder.build()?);
        for node in &spec.nodes {
            model.register_factor(&node.name, &node.factor)?;
        }
        Ok(model)
    }

    /// The underlying network structure.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Registers (or replaces) the factor for a node.
    ///
    /// Fails with [`ModelError::UnknownVariable`] for an undeclared node
    /// and [`ModelError::Configuration`] for an invalid specification.
    pub fn register_factor(&mut self, node: &str, spec: &FactorSpec) -> Result<(), ModelError> {
        let id = self.network.require_node(node)?;
        self.factors.register(&self.network, id, spec)
    }

    /// Whether every node has a registered factor.
    pub fn is_fully_specified(&self) -> bool {
        self.factors.is_complete()
    }

    /// The joint probability of a complete assignment.
    pub fn joint(&self, assignment: &Assignment) -> Result<f64, ModelError> {
        joint_probability(&self.network, &self.factors, assignment)
    }

    /// The conditional distribution of `node` given explicit parent
    /// states, exposing the factor-provider contract directly.
    ///
    /// `parent_states` must assign a state to every parent of `node`.
    pub fn distribution(
        &self,
        node: &str,
        parent_states: &[(&str, &str)],
    ) -> Result<Vec<f64>, ModelError> {
        let id = self.network.require_node(node)?;
        let assignment = self.assignment_from_pairs(parent_states)?;
        self.factors.distribution(&self.network, id, &assignment)
    }

    /// The posterior distribution of `query` given partial evidence.
    ///
    /// Evidence is a list of `(variable, state)` label pairs; a repeated
    /// variable keeps its last value. Fails with
    /// [`ModelError::UnknownVariable`] or [`ModelError::InvalidState`]
    /// for undeclared names, and [`ModelError::InvalidQuery`] if the
    /// query variable itself appears in the evidence.
    pub fn posterior(
        &self,
        query: &str,
        evidence: &[(&str, &str)],
    ) -> Result<Posterior, ModelError> {
        let query_id = self.network.require_node(query)?;
        let evidence = self.assignment_from_pairs(evidence)?;
        if evidence.contains(query_id) {
            return Err(ModelError::InvalidQuery(format!(
                "query variable '{}' also appears in the evidence",
                query
            )));
        }
        posterior(&self.network, &self.factors, query_id, &evidence)
    }

    /// Whether two variables are d-separated given a conditioning set.
    ///
    /// Purely structural; see [`Network::d_separated`].
    pub fn d_separated(&self, x: &str, y: &str, conditioning: &[&str]) -> Result<bool, ModelError> {
        self.network.d_separated(x, y, conditioning)
    }

    fn assignment_from_pairs(&self, pairs: &[(&str, &str)]) -> Result<Assignment, ModelError> {
        let mut assignment = Assignment::for_network(&self.network);
        for (name, state) in pairs {
            let id = self.network.require_node(name)?;
            let state = self.network.require_state(id, state)?;
            assignment.set(id, state);
        }
        Ok(assignment)
    }
}
