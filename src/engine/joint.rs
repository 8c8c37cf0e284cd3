//! # Joint Evaluator
//!
//! Composes the per-node factors into the full joint probability of a
//! complete assignment via the chain rule, multiplying in topological
//! order so every node's parents are visited first.
//!
//! Accumulation is a plain product of `f64`s. At this model's scale the
//! smallest reachable joint mass stays far above the underflow threshold;
//! deeper or wider networks would want log-space summation instead.

use crate::engine::assignment::Assignment;
use crate::engine::errors::ModelError;
use crate::engine::factor::FactorSet;
use crate::engine::network::Network;

/// The joint probability of a complete assignment.
///
/// Fails with [`ModelError::IncompleteAssignment`] if any node is
/// unassigned, and with [`ModelError::Configuration`] if a node has no
/// registered factor.
pub(crate) fn joint_probability(
    network: &Network,
    factors: &FactorSet,
    assignment: &Assignment,
) -> Result<f64, ModelError> {
    let mut product = 1.0;
    for &node in network.topological_order() {
        product *= factors.probability(network, node, assignment)?;
    }
    Ok(product)
}
