//! Shared fixture: the canonical pest-outbreak network, defined as data
//! and compiled through the public config surface.

use pestnet::{model_from_json, Model};

/// The six-node pest-outbreak network: four root observations feed a
/// logistic pest-population factor, which combines with crop maturity in
/// a tabular outbreak CPT.
pub const PEST_OUTBREAK_SPEC: &str = r#"{
    "nodes": [
        { "name": "Humidity", "states": ["Low", "Medium", "High"],
          "factor": { "type": "table", "rows": [
              { "distribution": { "Low": 0.30, "Medium": 0.45, "High": 0.25 } } ] } },
        { "name": "NDVI", "states": ["Good", "Moderate", "Poor"],
          "factor": { "type": "table", "rows": [
              { "distribution": { "Good": 0.50, "Moderate": 0.35, "Poor": 0.15 } } ] } },
        { "name": "Pheromone", "states": ["Low", "Medium", "High"],
          "factor": { "type": "table", "rows": [
              { "distribution": { "Low": 0.60, "Medium": 0.30, "High": 0.10 } } ] } },
        { "name": "CropMaturity", "states": ["Early", "Mid", "Late"],
          "factor": { "type": "table", "rows": [
              { "distribution": { "Early": 0.25, "Mid": 0.50, "Late": 0.25 } } ] } },
        { "name": "PestPop", "states": ["Low", "High"],
          "parents": ["Humidity", "NDVI", "Pheromone", "CropMaturity"],
          "factor": { "type": "logistic", "intercept": -2.0, "positive_state": "High",
              "weights": [
                  { "parent": "Humidity", "state": "High", "weight": 1.2 },
                  { "parent": "Humidity", "state": "Medium", "weight": 0.6 },
                  { "parent": "NDVI", "state": "Poor", "weight": 1.0 },
                  { "parent": "NDVI", "state": "Moderate", "weight": 0.3 },
                  { "parent": "Pheromone", "state": "High", "weight": 2.0 },
                  { "parent": "Pheromone", "state": "Medium", "weight": 0.8 },
                  { "parent": "CropMaturity", "state": "Late", "weight": 1.5 },
                  { "parent": "CropMaturity", "state": "Mid", "weight": 0.6 } ] } },
        { "name": "Outbreak", "states": ["No", "Yes"],
          "parents": ["PestPop", "CropMaturity"],
          "factor": { "type": "table", "rows": [
              { "given": ["High", "Late"], "distribution": { "Yes": 0.92, "No": 0.08 } },
              { "given": ["High", "Mid"], "distribution": { "Yes": 0.85, "No": 0.15 } },
              { "given": ["High", "Early"], "distribution": { "Yes": 0.65, "No": 0.35 } },
              { "given": ["Low", "Late"], "distribution": { "Yes": 0.15, "No": 0.85 } },
              { "given": ["Low", "Mid"], "distribution": { "Yes": 0.05, "No": 0.95 } },
              { "given": ["Low", "Early"], "distribution": { "Yes": 0.02, "No": 0.98 } } ] } }
    ]
}"#;

pub fn pest_model() -> Model {
    model_from_json(PEST_OUTBREAK_SPEC).expect("canonical network spec is valid")
}

/// Strong-signal field readings: every indicator at its worst.
pub const CASE_STRONG: &[(&str, &str)] = &[
    ("Humidity", "High"),
    ("NDVI", "Poor"),
    ("Pheromone", "High"),
    ("CropMaturity", "Late"),
];

/// Mixed field readings near the High/Medium risk boundary.
pub const CASE_MODERATE: &[(&str, &str)] = &[
    ("Humidity", "High"),
    ("NDVI", "Moderate"),
    ("Pheromone", "Medium"),
    ("CropMaturity", "Mid"),
];
