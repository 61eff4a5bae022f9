use super::common::{assert_close, catalog, catalog_with, door_requirement, model};
use crate::workflows::catalog::CatalogStore;
use crate::workflows::recommendation::domain::ScoredCandidate;
use crate::workflows::recommendation::ranker::{rank, Ranker, RECOMMENDATION_LIMIT};

fn ids(candidates: &[ScoredCandidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|candidate| candidate.equipment.id.as_str())
        .collect()
}

#[test]
fn compliant_model_outranks_every_failing_one() {
    let mut narrow = model("pso-22b");
    narrow.min_access_width_cm = 90.0;
    let catalog = catalog_with(narrow);

    let ranked = rank(&catalog, &door_requirement(18.0, 90.0));

    assert_eq!(ranked.len(), RECOMMENDATION_LIMIT);
    let top = &ranked[0];
    assert_eq!(top.equipment.id, "pso-22b");
    assert_close(top.score, 56.0);
    assert!(!top.has_warnings());
    for runner_up in &ranked[1..] {
        assert!(runner_up.has_warnings());
        assert!(top.score - runner_up.score >= 100.0);
    }
}

#[test]
fn best_available_model_is_returned_when_nothing_fits() {
    let ranked = rank(&catalog(), &door_requirement(18.0, 90.0));

    assert_eq!(ids(&ranked), vec!["pso-22b", "pso-26b", "pso-26bh"]);
    assert_close(ranked[0].score, -86.0);
    assert_close(ranked[1].score, -92.0);
    assert_close(ranked[2].score, -92.0);
    assert!(ranked.iter().all(ScoredCandidate::has_warnings));
}

#[test]
fn ties_follow_catalog_declaration_order() {
    let mut reversed: Vec<_> = catalog().models().to_vec();
    reversed.reverse();
    let reversed = CatalogStore::new(reversed).expect("reversed catalog validates");

    let ranked = rank(&reversed, &door_requirement(18.0, 90.0));

    assert_eq!(ids(&ranked), vec!["pso-22b", "pso-26bh", "pso-26b"]);
}

#[test]
fn ranking_is_idempotent() {
    let catalog = catalog();
    let requirement = door_requirement(12.0, 100.0);

    let first = rank(&catalog, &requirement);
    let second = rank(&catalog, &requirement);

    assert_eq!(first, second);
}

#[test]
fn scores_are_non_increasing() {
    let ranked = Ranker::default().score_all(&catalog(), &door_requirement(14.0, 100.0));

    assert_eq!(ranked.len(), catalog().len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn empty_catalog_yields_no_candidates() {
    let empty = CatalogStore::new(Vec::new()).expect("empty catalog is valid");

    assert!(rank(&empty, &door_requirement(10.0, 100.0)).is_empty());
}

#[test]
fn small_catalog_returns_every_model() {
    let small = CatalogStore::new(vec![model("pso-11bl"), model("pso-18bl")])
        .expect("two model catalog validates");

    let ranked = rank(&small, &door_requirement(10.0, 100.0));

    assert_eq!(ranked.len(), 2);
}

#[test]
fn unreachable_height_still_returns_full_list() {
    let ranked = rank(&catalog(), &door_requirement(100.0, 100.0));

    assert_eq!(ranked.len(), RECOMMENDATION_LIMIT);
    assert!(ranked.iter().all(ScoredCandidate::has_warnings));
    assert_eq!(ids(&ranked), vec!["pso-11bl", "pso-18bl", "pso-18c"]);
}

#[test]
fn custom_limit_is_honoured() {
    let ranker = Ranker::new(Default::default(), 1);

    let ranked = ranker.rank(&catalog(), &door_requirement(10.0, 100.0));

    assert_eq!(ranker.limit(), 1);
    assert_eq!(ranked.len(), 1);
}
