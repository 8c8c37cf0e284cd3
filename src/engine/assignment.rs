//! Assignments of states to nodes, and lazy enumeration of state spaces.
//!
//! An [`Assignment`] maps a subset of the network's nodes to state indices
//! within their domains. A *complete* assignment covers every node; the
//! joint evaluator requires one. Evidence is a partial assignment.
//!
//! [`StateCounter`] is a multi-radix counter over domain sizes: it walks
//! the full Cartesian product of a set of domains one combination at a
//! time with flat memory, regardless of how many hidden nodes there are.

use crate::engine::network::{Network, NodeId};

/// A partial or complete mapping from nodes to state indices.
///
/// Backed by a dense vector indexed by [`NodeId`], created per query and
/// discarded afterwards. State values are indices into the owning node's
/// ordered domain; callers resolve labels through
/// [`Network::require_state`](crate::engine::network::Network::require_state)
/// before setting them. [`set`](Assignment::set) itself does not check
/// the bound; factor lookups reject an out-of-range index with
/// [`ModelError::InvalidState`](crate::engine::errors::ModelError::InvalidState).
#[derive(Debug, Clone)]
pub struct Assignment {
    values: Vec<Option<usize>>,
}

impl Assignment {
    /// Creates an empty assignment sized for `network`.
    pub fn for_network(network: &Network) -> Self {
        Self {
            values: vec![None; network.node_count()],
        }
    }

    /// Assigns a state index to a node, replacing any previous value.
    pub fn set(&mut self, node: NodeId, state: usize) {
        self.values[node.0 as usize] = Some(state);
    }

    /// Removes the value assigned to a node, if any.
    pub fn clear(&mut self, node: NodeId) {
        self.values[node.0 as usize] = None;
    }

    /// The state index assigned to a node, if any.
    pub fn get(&self, node: NodeId) -> Option<usize> {
        self.values[node.0 as usize]
    }

    /// Whether a node has an assigned value.
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Whether every node is assigned.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }
}

/// A multi-radix counter over a list of domain sizes.
///
/// Starts at all zeros. [`advance`](StateCounter::advance) steps to the
/// next combination and returns `false` once every combination has been
/// visited. An empty radix list yields exactly one (empty) combination.
#[derive(Debug, Clone)]
pub(crate) struct StateCounter {
    radices: Vec<usize>,
    digits: Vec<usize>,
}

impl StateCounter {
    pub(crate) fn new(radices: Vec<usize>) -> Self {
        debug_assert!(radices.iter().all(|&r| r > 0));
        let digits = vec![0; radices.len()];
        Self { radices, digits }
    }

    /// The current combination, one digit per radix.
    pub(crate) fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Steps to the next combination. Returns `false` after the last one.
    pub(crate) fn advance(&mut self) -> bool {
        for pos in (0..self.digits.len()).rev() {
            self.digits[pos] += 1;
            if self.digits[pos] < self.radices[pos] {
                return true;
            }
            self.digits[pos] = 0;
        }
        false
    }

    /// Total number of combinations.
    #[cfg(test)]
    pub(crate) fn combination_count(&self) -> usize {
        self.radices.iter().product()
    }
}
