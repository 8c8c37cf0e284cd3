//! # Network Model
//!
//! The static structure of a Bayesian network: node identifiers, ordered
//! finite state domains, and the parent relation. Construction validates
//! that the parent graph is acyclic and that every parent reference names
//! a declared node, and precomputes a global topological ordering
//! (parents before children) for the joint evaluator.
//!
//! The structure is immutable after [`NetworkBuilder::build`]; queries
//! never mutate it, so a [`Network`] can be shared freely across threads.

use std::collections::{HashMap, VecDeque};

use crate::engine::errors::ModelError;

/// A unique identifier for a node in the network.
///
/// Ids index densely into the network's node storage, in declaration order.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

/// A node with its ordered state domain and resolved parent set.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The unique node identifier.
    pub id: NodeId,
    /// The variable name (e.g. "Humidity").
    pub name: String,
    /// The ordered list of distinct state labels.
    pub states: Vec<String>,
    /// Parent node ids, in declaration order.
    pub parents: Vec<NodeId>,
}

/// The immutable DAG structure of a Bayesian network.
///
/// Exposes, for any node, its parent set, its children, and its ordered
/// domain, plus a global topological ordering over all nodes. Factors and
/// probability values live elsewhere; d-separation analysis consumes only
/// this structure.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<NodeData>,
    name_index: HashMap<String, NodeId>,
    children: Vec<Vec<NodeId>>,
    topo_order: Vec<NodeId>,
}

impl Network {
    /// Starts building a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// The number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this network. Ids are only
    /// handed out by [`Network`] itself, so this cannot happen for ids
    /// obtained through the public API.
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    /// Resolves a variable name to its id, if declared.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Resolves a variable name or fails with [`ModelError::UnknownVariable`].
    pub fn require_node(&self, name: &str) -> Result<NodeId, ModelError> {
        self.node_id(name)
            .ok_or_else(|| ModelError::UnknownVariable(name.to_string()))
    }

    /// The parent ids of a node, in declaration order.
    pub fn parents(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).parents
    }

    /// The child ids of a node, in declaration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0 as usize]
    }

    /// The ordered state domain of a node.
    pub fn states(&self, id: NodeId) -> &[String] {
        &self.node(id).states
    }

    /// Resolves a state label to its index in the node's domain.
    pub fn state_index(&self, id: NodeId, label: &str) -> Option<usize> {
        self.node(id).states.iter().position(|s| s == label)
    }

    /// Resolves a state label or fails with [`ModelError::InvalidState`].
    pub fn require_state(&self, id: NodeId, label: &str) -> Result<usize, ModelError> {
        self.state_index(id, label)
            .ok_or_else(|| ModelError::InvalidState {
                node: self.node(id).name.clone(),
                state: label.to_string(),
            })
    }

    /// A global topological ordering of all nodes, parents before children.
    pub fn topological_order(&self) -> &[NodeId] {
        &self.topo_order
    }

    /// Iterates over all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes.iter()
    }
}

/// Declaration of a single node before resolution.
#[derive(Debug, Clone)]
struct NodeDecl {
    name: String,
    states: Vec<String>,
    parent_names: Vec<String>,
}

/// Builds a [`Network`] from node declarations.
///
/// Declarations may appear in any order; parent references are resolved
/// when [`build`](NetworkBuilder::build) runs. `build` fails with
/// [`ModelError::Structure`] on cycles, dangling parent references,
/// duplicate node names, duplicate state labels, or empty domains.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    decls: Vec<NodeDecl>,
}

impl NetworkBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node with its ordered state domain and parent names.
    pub fn node(mut self, name: &str, states: &[&str], parents: &[&str]) -> Self {
        self.decls.push(NodeDecl {
            name: name.to_string(),
            states: states.iter().map(|s| s.to_string()).collect(),
            parent_names: parents.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Resolves all declarations into an immutable [`Network`].
    pub fn build(self) -> Result<Network, ModelError> {
        let mut name_index: HashMap<String, NodeId> = HashMap::new();
        for (idx, decl) in self.decls.iter().enumerate() {
            if decl.states.is_empty() {
                return Err(ModelError::Structure(format!(
                    "node '{}' declares an empty state domain",
                    decl.name
                )));
            }
            for (i, state) in decl.states.iter().enumerate() {
                if decl.states[..i].contains(state) {
                    return Err(ModelError::Structure(format!(
                        "node '{}' declares duplicate state '{}'",
                        decl.name, state
                    )));
                }
            }
            if name_index
                .insert(decl.name.clone(), NodeId(idx as u32))
                .is_some()
            {
                return Err(ModelError::Structure(format!(
                    "duplicate node '{}'",
                    decl.name
                )));
            }
        }

        let mut nodes = Vec::with_capacity(self.decls.len());
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); self.decls.len()];
        for (idx, decl) in self.decls.iter().enumerate() {
            let id = NodeId(idx as u32);
            let mut parents = Vec::with_capacity(decl.parent_names.len());
            for parent_name in &decl.parent_names {
                let parent = *name_index.get(parent_name).ok_or_else(|| {
                    ModelError::Structure(format!(
                        "node '{}' references undeclared parent '{}'",
                        decl.name, parent_name
                    ))
                })?;
                if parents.contains(&parent) {
                    return Err(ModelError::Structure(format!(
                        "node '{}' lists parent '{}' twice",
                        decl.name, parent_name
                    )));
                }
                parents.push(parent);
                children[parent.0 as usize].push(id);
            }
            nodes.push(NodeData {
                id,
                name: decl.name.clone(),
                states: decl.states.clone(),
                parents,
            });
        }

        let topo_order = topological_sort(&nodes, &children)?;

        Ok(Network {
            nodes,
            name_index,
            children,
            topo_order,
        })
    }
}

/// Kahn's algorithm over the parent relation. Fails if a cycle remains.
fn topological_sort(
    nodes: &[NodeData],
    children: &[Vec<NodeId>],
) -> Result<Vec<NodeId>, ModelError> {
    let mut in_degree: Vec<usize> = nodes.iter().map(|n| n.parents.len()).collect();
    let mut ready: VecDeque<NodeId> = nodes
        .iter()
        .filter(|n| n.parents.is_empty())
        .map(|n| n.id)
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(id) = ready.pop_front() {
        order.push(id);
        for &child in &children[id.0 as usize] {
            in_degree[child.0 as usize] -= 1;
            if in_degree[child.0 as usize] == 0 {
                ready.push_back(child);
            }
        }
    }

    if order.len() != nodes.len() {
        let stuck: Vec<&str> = nodes
            .iter()
            .filter(|n| in_degree[n.id.0 as usize] > 0)
            .map(|n| n.name.as_str())
            .collect();
        return Err(ModelError::Structure(format!(
            "parent graph contains a cycle involving: {}",
            stuck.join(", ")
        )));
    }
    Ok(order)
}
