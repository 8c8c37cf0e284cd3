//! # Independence Analyzer
//!
//! d-separation via Bayes-ball reachability. A search token carries the
//! node it sits on and the direction it arrived from; observed nodes
//! block or bounce tokens depending on that direction, which is exactly
//! what distinguishes a chain from a collider under conditioning:
//!
//! - an unobserved node passes a token from a parent on to its children
//!   (chain), and a token from a child on to both parents and children
//!   (chain upward / fork);
//! - an observed node blocks a token from a child, but bounces a token
//!   from a parent back to its parents: "explaining away", since
//!   conditioning on a common effect correlates its causes. Activation
//!   through an observed *descendant* of a collider falls out of the
//!   same rules, by the bounced token travelling back up.
//!
//! The worklist is an explicit BFS over `(node, direction)` tokens with a
//! single shared visited set; collapsing it into plain recursion would
//! lose the direction-sensitive blocking. The analysis depends only on
//! the parent/child structure, never on factor values.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::engine::errors::ModelError;
use crate::engine::network::{Network, NodeId};

/// Which side of the edge a token arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Arrival {
    /// The token came down an edge from a parent.
    FromParent,
    /// The token came up an edge from a child.
    FromChild,
}

impl Network {
    /// Whether `x` and `y` are d-separated given the conditioning set.
    ///
    /// `true` means every undirected path between the two nodes is
    /// blocked, so the model renders them conditionally independent given
    /// the observed nodes under every factorization consistent with the
    /// DAG. The result is symmetric in `x` and `y`.
    ///
    /// The conditioning set carries membership only, no state values.
    /// Blocking applies to the interior of a path, so listing `x` or `y`
    /// themselves in the conditioning set has no effect. Fails with
    /// [`ModelError::UnknownVariable`] if any name is undeclared.
    pub fn d_separated(
        &self,
        x: &str,
        y: &str,
        conditioning: &[&str],
    ) -> Result<bool, ModelError> {
        let x = self.require_node(x)?;
        let y = self.require_node(y)?;
        let mut observed = FxHashSet::default();
        for name in conditioning {
            observed.insert(self.require_node(name)?);
        }
        observed.remove(&x);
        observed.remove(&y);
        Ok(self.d_separated_by_id(x, y, &observed))
    }

    fn d_separated_by_id(&self, x: NodeId, y: NodeId, observed: &FxHashSet<NodeId>) -> bool {
        let mut visited: FxHashSet<(NodeId, Arrival)> = FxHashSet::default();
        let mut frontier: VecDeque<(NodeId, Arrival)> = VecDeque::new();
        frontier.push_back((x, Arrival::FromChild));
        frontier.push_back((x, Arrival::FromParent));

        while let Some(token) = frontier.pop_front() {
            if !visited.insert(token) {
                continue;
            }
            let (node, arrival) = token;
            if node == y {
                return false;
            }

            let is_observed = observed.contains(&node);
            match (is_observed, arrival) {
                // Chain: pass straight through to the children.
                (false, Arrival::FromParent) => {
                    for &child in self.children(node) {
                        frontier.push_back((child, Arrival::FromParent));
                    }
                }
                // Chain upward and fork: both parents and children.
                (false, Arrival::FromChild) => {
                    for &parent in self.parents(node) {
                        frontier.push_back((parent, Arrival::FromChild));
                    }
                    for &child in self.children(node) {
                        frontier.push_back((child, Arrival::FromParent));
                    }
                }
                // Observed collider: bounce back up to the parents.
                (true, Arrival::FromParent) => {
                    for &parent in self.parents(node) {
                        frontier.push_back((parent, Arrival::FromChild));
                    }
                }
                // Observed node entered from below blocks entirely.
                (true, Arrival::FromChild) => {}
            }
        }
        true
    }
}
