//! # Exact Inference Engine
//!
//! Computes the posterior distribution of a query variable given partial
//! evidence by full enumeration: for each candidate query state, the
//! unnormalized mass is the sum of the joint probability over the entire
//! Cartesian product of the hidden nodes' domains, walked lazily by a
//! multi-radix counter. There is no pruning and no variable elimination;
//! at this model's size the exhaustive sum is an auditability feature,
//! not a bottleneck.
//!
//! The per-state mass sums are independent, so with the `rayon` feature
//! they run on the thread pool; the sequential path computes identical
//! results.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::engine::assignment::{Assignment, StateCounter};
use crate::engine::errors::ModelError;
use crate::engine::factor::FactorSet;
use crate::engine::joint::joint_probability;
use crate::engine::network::{Network, NodeId};

/// The posterior distribution over a query variable's states.
///
/// States appear in the variable's declared domain order. Probabilities
/// sum to 1, except in the documented zero-mass case where every entry is
/// exactly 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Posterior {
    /// The query variable's state labels, in domain order.
    pub states: Vec<String>,
    /// The posterior probability of each state.
    pub probabilities: Vec<f64>,
}

impl Posterior {
    /// The posterior probability of a state label, if it is in the domain.
    pub fn probability(&self, state: &str) -> Option<f64> {
        self.states
            .iter()
            .position(|s| s == state)
            .map(|idx| self.probabilities[idx])
    }

    /// Pairs of state label and probability, in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.states
            .iter()
            .map(String::as_str)
            .zip(self.probabilities.iter().copied())
    }
}

/// Computes `P(query | evidence)` by enumeration and normalization.
///
/// `evidence` must already be validated against the network: every key a
/// declared node, every value a state index within that node's domain,
/// and the query node unassigned.
///
/// If the total normalizing mass is exactly zero (evidence inconsistent
/// with every nonzero-probability assignment), the result is the all-zero
/// distribution rather than an error. Downstream callers may rely on the
/// zero vector as a sentinel, so this policy must not be tightened.
pub(crate) fn posterior(
    network: &Network,
    factors: &FactorSet,
    query: NodeId,
    evidence: &Assignment,
) -> Result<Posterior, ModelError> {
    debug_assert!(evidence.get(query).is_none());

    let hidden: Vec<NodeId> = network
        .nodes()
        .map(|n| n.id)
        .filter(|&id| id != query && !evidence.contains(id))
        .collect();
    let radices: Vec<usize> = hidden.iter().map(|&id| network.states(id).len()).collect();
    let query_states = network.states(query).len();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        query = %network.node(query).name,
        hidden_nodes = hidden.len(),
        combinations = radices.iter().product::<usize>(),
        "enumerating posterior"
    );

    let state_mass = |state: usize| -> Result<f64, ModelError> {
        let mut scratch = evidence.clone();
        scratch.set(query, state);
        let mut counter = StateCounter::new(radices.clone());
        let mut mass = 0.0;
        loop {
            for (&node, &value) in hidden.iter().zip(counter.digits()) {
                scratch.set(node, value);
            }
            mass += joint_probability(network, factors, &scratch)?;
            if !counter.advance() {
                break;
            }
        }
        Ok(mass)
    };

    #[cfg(feature = "rayon")]
    let masses: Vec<f64> = (0..query_states)
        .into_par_iter()
        .map(state_mass)
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "rayon"))]
    let masses: Vec<f64> = (0..query_states)
        .map(state_mass)
        .collect::<Result<_, _>>()?;

    let total: f64 = masses.iter().sum();
    let probabilities = if total == 0.0 {
        vec![0.0; query_states]
    } else {
        masses.iter().map(|m| m / total).collect()
    };

    Ok(Posterior {
        states: network.states(query).to_vec(),
        probabilities,
    })
}
