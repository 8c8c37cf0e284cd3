//! # Pestnet - Exact Bayesian inference for pest-outbreak risk
//!
//! Pestnet answers two questions about a fixed probabilistic causal
//! model: given partial observations, what is the exact posterior
//! distribution of a target variable, and does the causal structure
//! render two variables conditionally independent (d-separation).
//!
//! ## Architecture
//!
//! - **config**: Data-driven network specification (serde/JSON)
//! - **engine**: Network structure, factors, joint evaluation, exact
//!   enumeration inference, and Bayes-ball independence analysis
//! - **risk**: Three-tier qualitative classification of a probability
//!
//! The inference engine deliberately enumerates the full hidden state
//! space instead of using variable elimination or sampling: the target
//! models are small, and an exhaustive sum is trivially auditable.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pestnet::{model_from_json, RiskLevel};
//!
//! let model = model_from_json(spec_json)?;
//! let posterior = model.posterior("Outbreak", &[("Humidity", "High")])?;
//! let p = posterior.probability("Yes").unwrap();
//! let label = RiskLevel::from_probability(p);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod risk;

// Re-export commonly used types
pub use config::{FactorSpec, LogisticWeight, NetworkSpec, NodeSpec, TableRow};
pub use engine::assignment::Assignment;
pub use engine::errors::ModelError;
pub use engine::inference::Posterior;
pub use engine::model::Model;
pub use engine::network::{Network, NetworkBuilder, NodeId};
pub use risk::RiskLevel;

/// Parses a JSON network specification and compiles it into a [`Model`].
///
/// Fails with [`ModelError::Configuration`] on malformed JSON or invalid
/// factor specifications and [`ModelError::Structure`] on a malformed
/// DAG.
pub fn model_from_json(source: &str) -> Result<Model, ModelError> {
    let spec = NetworkSpec::from_json(source)?;
    Model::from_spec(&spec)
}
