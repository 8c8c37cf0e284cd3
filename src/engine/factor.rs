//! # Factor Provider
//!
//! Conditional probability factors: for every node, a pure function from
//! a parent-state assignment to a distribution over the node's own states.
//!
//! Two factor shapes exist. *Tabular* factors hold one explicit
//! distribution per parent-state combination and must cover the full
//! Cartesian product of the parent domains. *Logistic* factors apply to
//! binary-domain nodes only: a weighted sum of per-parent-state indicator
//! contributions is passed through a sigmoid to produce the probability of
//! the designated positive state, and the complementary state gets
//! `1 - p`. Both shapes are validated exhaustively when registered, so
//! lookup failures are programmer errors rather than user errors.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::{FactorSpec, LogisticWeight, TableRow};
use crate::engine::assignment::Assignment;
use crate::engine::errors::ModelError;
use crate::engine::network::{Network, NodeId};

/// Tolerance for a tabular row summing to one.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Parent states in parent declaration order, used as a CPT row key.
pub(crate) type ParentStates = SmallVec<[usize; 4]>;

/// A compiled conditional probability factor for one node.
#[derive(Debug, Clone)]
pub(crate) enum Factor {
    /// Explicit distribution per parent-state combination.
    Table {
        rows: FxHashMap<ParentStates, Vec<f64>>,
    },
    /// Logistic link over per-parent-state indicator weights, binary node.
    Logistic {
        intercept: f64,
        weights: FxHashMap<(NodeId, usize), f64>,
        positive: usize,
    },
}

impl Factor {
    /// The probability of `state` given the parent states.
    fn probability(
        &self,
        network: &Network,
        node: NodeId,
        parent_states: &ParentStates,
        state: usize,
    ) -> Result<f64, ModelError> {
        match self {
            Factor::Table { rows } => {
                let row = rows.get(parent_states).ok_or_else(|| {
                    ModelError::Configuration(format!(
                        "no tabular row for node '{}' under the given parent states",
                        network.node(node).name
                    ))
                })?;
                Ok(row[state])
            }
            Factor::Logistic {
                intercept,
                weights,
                positive,
            } => {
                let mut z = *intercept;
                for (&parent, &parent_state) in
                    network.parents(node).iter().zip(parent_states.iter())
                {
                    if let Some(w) = weights.get(&(parent, parent_state)) {
                        z += w;
                    }
                }
                let p = sigmoid(z);
                Ok(if state == *positive { p } else { 1.0 - p })
            }
        }
    }
}

/// The factors of a model, one slot per node.
#[derive(Debug, Clone, Default)]
pub(crate) struct FactorSet {
    factors: Vec<Option<Factor>>,
}

impl FactorSet {
    pub(crate) fn for_network(network: &Network) -> Self {
        Self {
            factors: vec![None; network.node_count()],
        }
    }

    /// Whether every node has a registered factor.
    pub(crate) fn is_complete(&self) -> bool {
        self.factors.iter().all(Option::is_some)
    }

    /// Compiles and registers a factor specification for `node`,
    /// replacing any previous registration.
    pub(crate) fn register(
        &mut self,
        network: &Network,
        node: NodeId,
        spec: &FactorSpec,
    ) -> Result<(), ModelError> {
        let factor = match spec {
            FactorSpec::Table { rows } => compile_table(network, node, rows)?,
            FactorSpec::Logistic {
                intercept,
                positive_state,
                weights,
            } => compile_logistic(network, node, *intercept, positive_state, weights)?,
        };
        self.factors[node.0 as usize] = Some(factor);
        Ok(())
    }

    fn factor(&self, network: &Network, node: NodeId) -> Result<&Factor, ModelError> {
        self.factors[node.0 as usize].as_ref().ok_or_else(|| {
            ModelError::Configuration(format!(
                "no factor registered for node '{}'",
                network.node(node).name
            ))
        })
    }

    /// Reads the parent states of `node` out of `assignment`.
    fn parent_states(
        &self,
        network: &Network,
        node: NodeId,
        assignment: &Assignment,
    ) -> Result<ParentStates, ModelError> {
        let mut states = ParentStates::new();
        for &parent in network.parents(node) {
            let state = assignment.get(parent).ok_or_else(|| {
                ModelError::IncompleteAssignment(format!(
                    "parent '{}' of node '{}' is unassigned",
                    network.node(parent).name,
                    network.node(node).name
                ))
            })?;
            check_state_bound(network, parent, state)?;
            states.push(state);
        }
        Ok(states)
    }

    /// The probability of the state `assignment` gives `node`, conditioned
    /// on the parent states also present in `assignment`.
    pub(crate) fn probability(
        &self,
        network: &Network,
        node: NodeId,
        assignment: &Assignment,
    ) -> Result<f64, ModelError> {
        let state = assignment.get(node).ok_or_else(|| {
            ModelError::IncompleteAssignment(format!(
                "node '{}' is unassigned",
                network.node(node).name
            ))
        })?;
        check_state_bound(network, node, state)?;
        let parent_states = self.parent_states(network, node, assignment)?;
        self.factor(network, node)?
            .probability(network, node, &parent_states, state)
    }

    /// The full distribution over `node`'s states given the parent states
    /// present in `assignment`.
    pub(crate) fn distribution(
        &self,
        network: &Network,
        node: NodeId,
        assignment: &Assignment,
    ) -> Result<Vec<f64>, ModelError> {
        let parent_states = self.parent_states(network, node, assignment)?;
        let factor = self.factor(network, node)?;
        (0..network.states(node).len())
            .map(|state| factor.probability(network, node, &parent_states, state))
            .collect()
    }
}

fn compile_table(
    network: &Network,
    node: NodeId,
    rows: &[TableRow],
) -> Result<Factor, ModelError> {
    let name = &network.node(node).name;
    let parents = network.parents(node);
    let domain = network.states(node);

    let expected_rows: usize = parents
        .iter()
        .map(|&p| network.states(p).len())
        .product();

    let mut compiled: FxHashMap<ParentStates, Vec<f64>> = FxHashMap::default();
    for row in rows {
        if row.given.len() != parents.len() {
            return Err(ModelError::Configuration(format!(
                "node '{}' expects {} parent states per row, got {}",
                name,
                parents.len(),
                row.given.len()
            )));
        }
        let mut key = ParentStates::new();
        for (&parent, label) in parents.iter().zip(row.given.iter()) {
            let state = network.state_index(parent, label).ok_or_else(|| {
                ModelError::Configuration(format!(
                    "row for node '{}' uses state '{}' outside the domain of parent '{}'",
                    name,
                    label,
                    network.node(parent).name
                ))
            })?;
            key.push(state);
        }

        let mut distribution = vec![0.0; domain.len()];
        if row.distribution.len() != domain.len() {
            return Err(ModelError::Configuration(format!(
                "row for node '{}' must assign a probability to each of its {} states",
                name,
                domain.len()
            )));
        }
        for (label, &p) in &row.distribution {
            let state = network.state_index(node, label).ok_or_else(|| {
                ModelError::Configuration(format!(
                    "row for node '{}' names unknown state '{}'",
                    name, label
                ))
            })?;
            if !(0.0..=1.0).contains(&p) {
                return Err(ModelError::Configuration(format!(
                    "probability {} for '{}'='{}' is outside [0, 1]",
                    p, name, label
                )));
            }
            distribution[state] = p;
        }
        let total: f64 = distribution.iter().sum();
        if (total - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(ModelError::Configuration(format!(
                "row for node '{}' sums to {} instead of 1",
                name, total
            )));
        }

        if compiled.insert(key, distribution).is_some() {
            return Err(ModelError::Configuration(format!(
                "duplicate tabular row for node '{}'",
                name
            )));
        }
    }

    // Keys are unique and drawn from the parent domains, so matching the
    // product of domain sizes means every combination is covered.
    if compiled.len() != expected_rows {
        return Err(ModelError::Configuration(format!(
            "node '{}' covers {} of {} parent-state combinations",
            name,
            compiled.len(),
            expected_rows
        )));
    }

    Ok(Factor::Table { rows: compiled })
}

fn compile_logistic(
    network: &Network,
    node: NodeId,
    intercept: f64,
    positive_state: &str,
    weights: &[LogisticWeight],
) -> Result<Factor, ModelError> {
    let name = &network.node(node).name;
    let domain = network.states(node);
    if domain.len() != 2 {
        return Err(ModelError::Configuration(format!(
            "logistic factor requires a binary domain, but node '{}' has {} states",
            name,
            domain.len()
        )));
    }
    if !intercept.is_finite() {
        return Err(ModelError::Configuration(format!(
            "logistic intercept for node '{}' must be finite",
            name
        )));
    }
    let positive = network.state_index(node, positive_state).ok_or_else(|| {
        ModelError::Configuration(format!(
            "positive state '{}' is not in the domain of node '{}'",
            positive_state, name
        ))
    })?;

    let parents = network.parents(node);
    let mut compiled: FxHashMap<(NodeId, usize), f64> = FxHashMap::default();
    for weight in weights {
        let parent = network
            .node_id(&weight.parent)
            .filter(|p| parents.contains(p))
            .ok_or_else(|| {
                ModelError::Configuration(format!(
                    "logistic weight for node '{}' names '{}', which is not a parent",
                    name, weight.parent
                ))
            })?;
        let state = network.state_index(parent, &weight.state).ok_or_else(|| {
            ModelError::Configuration(format!(
                "logistic weight for node '{}' uses state '{}' outside the domain of '{}'",
                name, weight.state, weight.parent
            ))
        })?;
        if !weight.weight.is_finite() {
            return Err(ModelError::Configuration(format!(
                "logistic weight for '{}'='{}' must be finite",
                weight.parent, weight.state
            )));
        }
        if compiled.insert((parent, state), weight.weight).is_some() {
            return Err(ModelError::Configuration(format!(
                "duplicate logistic weight for '{}'='{}'",
                weight.parent, weight.state
            )));
        }
    }

    Ok(Factor::Logistic {
        intercept,
        weights: compiled,
        positive,
    })
}

/// Rejects a state index outside the node's domain. [`Assignment::set`]
/// takes raw indices, so an index that never went through
/// [`Network::require_state`] must be caught here before it reaches a
/// factor lookup.
fn check_state_bound(network: &Network, node: NodeId, state: usize) -> Result<(), ModelError> {
    if state < network.states(node).len() {
        Ok(())
    } else {
        Err(ModelError::InvalidState {
            node: network.node(node).name.clone(),
            state: state.to_string(),
        })
    }
}

/// The standard logistic function, bounded in (0, 1) for finite input.
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
