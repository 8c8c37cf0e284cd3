//! The inference engine for pest-outbreak belief networks.
//!
//! This module provides:
//! - **errors**: Error taxonomy for construction and query failures
//! - **network**: Immutable DAG structure with domains and topological order
//! - **assignment**: Partial/complete assignments and state-space enumeration
//! - **factor**: Tabular and logistic conditional probability factors
//! - **joint**: Chain-rule joint probability evaluation
//! - **inference**: Exact posterior computation by enumeration
//! - **dsep**: Bayes-ball d-separation analysis
//! - **model**: The public query surface tying structure and factors together

pub mod assignment;
pub mod dsep;
pub mod errors;
pub mod factor;
pub mod inference;
pub mod joint;
pub mod model;
pub mod network;
