//! d-separation scenarios on the canonical pest-outbreak network.
//!
//! Structure under test: Humidity, NDVI, Pheromone and CropMaturity are
//! roots feeding PestPop; PestPop and CropMaturity feed Outbreak.

mod common;

use common::pest_model;

#[test]
fn co_parents_are_independent_until_their_common_effect_is_observed() {
    let model = pest_model();

    // NDVI and Pheromone only meet at the PestPop collider.
    assert!(model.d_separated("NDVI", "Pheromone", &[]).unwrap());
    assert!(!model.d_separated("NDVI", "Pheromone", &["PestPop"]).unwrap());
}

#[test]
fn observing_a_downstream_effect_also_activates_the_collider() {
    let model = pest_model();
    // Outbreak is a descendant of PestPop, so conditioning on it opens
    // the NDVI -> PestPop <- Pheromone path as well.
    assert!(!model.d_separated("NDVI", "Pheromone", &["Outbreak"]).unwrap());
}

#[test]
fn humidity_and_outbreak_stay_coupled_through_crop_maturity() {
    let model = pest_model();

    // Unconditioned, the Humidity -> PestPop -> Outbreak chain is open.
    assert!(!model.d_separated("Humidity", "Outbreak", &[]).unwrap());

    // Observing PestPop blocks the chain but simultaneously activates
    // the collider Humidity -> PestPop <- CropMaturity, and CropMaturity
    // also feeds Outbreak directly, so the pair remains dependent.
    assert!(!model.d_separated("Humidity", "Outbreak", &["PestPop"]).unwrap());

    // Conditioning on CropMaturity as well closes that detour.
    assert!(model
        .d_separated("Humidity", "Outbreak", &["PestPop", "CropMaturity"])
        .unwrap());
}

#[test]
fn roots_with_no_shared_observed_effect_are_independent() {
    let model = pest_model();
    assert!(model.d_separated("Humidity", "CropMaturity", &[]).unwrap());
    assert!(model.d_separated("Humidity", "NDVI", &[]).unwrap());
}

#[test]
fn result_is_symmetric_across_all_scenarios() {
    let model = pest_model();
    let pairs = [
        ("NDVI", "Pheromone"),
        ("Humidity", "Outbreak"),
        ("Humidity", "CropMaturity"),
        ("PestPop", "Outbreak"),
    ];
    let conditioning_sets: [&[&str]; 4] = [&[], &["PestPop"], &["Outbreak"], &["CropMaturity"]];

    for (x, y) in pairs {
        for z in conditioning_sets {
            assert_eq!(
                model.d_separated(x, y, z).unwrap(),
                model.d_separated(y, x, z).unwrap(),
                "asymmetry for ({x}, {y}) given {z:?}"
            );
        }
    }
}

#[test]
fn analysis_ignores_factor_values() {
    // The same structure with very different numbers must give identical
    // independence answers: the analysis is purely structural.
    let model = pest_model();
    let skewed = common::PEST_OUTBREAK_SPEC
        .replace("\"Yes\": 0.92, \"No\": 0.08", "\"Yes\": 0.37, \"No\": 0.63")
        .replace("\"weight\": 1.2", "\"weight\": -3.0");
    let skewed_model = pestnet::model_from_json(&skewed).expect("still a valid spec");

    for (x, y) in [("NDVI", "Pheromone"), ("Humidity", "Outbreak")] {
        for z in [&[][..], &["PestPop"][..]] {
            assert_eq!(
                model.d_separated(x, y, z).unwrap(),
                skewed_model.d_separated(x, y, z).unwrap()
            );
        }
    }
}
