//! Tests for the recommendation service use case

use crate::test_utils::{
    NumericTransform, calculator_bundle, calculator_bundle_with, liked_bundle, seeded_rng,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use trofes_application::domain_services::AttributeCatalog;
use trofes_application::ports::{ModelStatus, RecommendationServiceInterface};
use trofes_application::use_cases::{RecommendationServiceImpl, RecommendationSettings};
use trofes_domain::Error;
use trofes_domain::constants::MAX_TOP_K;
use trofes_domain::value_objects::{
    IdConvention, LikedOutcome, LikedRequest, MacroOutcome, MacroRequest, MacroTargets,
};

fn full_service() -> RecommendationServiceImpl {
    RecommendationServiceImpl::new(
        Some(Arc::new(liked_bundle())),
        Some(Arc::new(calculator_bundle())),
        RecommendationSettings::default(),
    )
    .expect("valid settings")
}

fn empty_service() -> RecommendationServiceImpl {
    RecommendationServiceImpl::new(None, None, RecommendationSettings::default()).unwrap()
}

fn set(ids: &[i64]) -> BTreeSet<i64> {
    ids.iter().copied().collect()
}

// ============================================================================
// Liked-recipes path
// ============================================================================

#[test]
fn test_liked_requires_model() {
    let result = empty_service().recommend_from_liked(&LikedRequest::new(vec![0]), &mut seeded_rng());
    assert!(matches!(result, Err(Error::ModelUnavailable { .. })));
}

#[test]
fn test_liked_unknown_ids_give_empty_outcome() {
    let outcome = full_service()
        .recommend_from_liked(&LikedRequest::new(vec![100, 200]), &mut seeded_rng())
        .unwrap();
    assert_eq!(outcome, LikedOutcome::Empty);
    assert!(outcome.recommended_ids().is_empty());
}

#[test]
fn test_liked_reports_diagnostics() {
    let request = LikedRequest::new(vec![0]).with_top_k(3);
    let outcome = full_service()
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();

    let LikedOutcome::Recommended(rec) = outcome else {
        panic!("expected recommendations");
    };
    assert_eq!(rec.strategy, "hybrid_exploration_70_30");
    assert_eq!(rec.dominant_cluster, 0);
    assert_eq!(rec.anchor_id, 0);
    assert_eq!(set(&rec.recommended_ids), set(&[1, 2, 4]));
}

#[test]
fn test_liked_unknown_ids_are_dropped_before_resolution() {
    let request = LikedRequest::new(vec![4, 500, 0, 5, -3]).with_top_k(5);
    let outcome = full_service()
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();

    let LikedOutcome::Recommended(rec) = outcome else {
        panic!("expected recommendations");
    };
    // Known likes are 4 (c1), 0 (c0), 5 (c1): cluster 1 dominates, 5 is newest.
    assert_eq!(rec.dominant_cluster, 1);
    assert_eq!(rec.anchor_id, 5);
    for liked in [4, 0, 5] {
        assert!(!rec.recommended_ids.contains(&liked));
    }
    assert!(rec.recommended_ids.len() <= 5);
}

#[test]
fn test_liked_one_based_round_trip() {
    let request = LikedRequest::new(vec![1])
        .with_top_k(3)
        .with_convention(IdConvention::OneBased);
    let outcome = full_service()
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();

    let LikedOutcome::Recommended(rec) = outcome else {
        panic!("expected recommendations");
    };
    assert_eq!(rec.anchor_id, 1);
    assert_eq!(set(&rec.recommended_ids), set(&[2, 3, 5]));
}

#[test]
fn test_liked_one_based_zero_is_unknown() {
    let request = LikedRequest::new(vec![0]).with_convention(IdConvention::OneBased);
    let outcome = full_service()
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();
    assert_eq!(outcome, LikedOutcome::Empty);
}

#[test]
fn test_liked_zero_top_k_returns_nothing() {
    let outcome = full_service()
        .recommend_from_liked(&LikedRequest::new(vec![0]).with_top_k(0), &mut seeded_rng())
        .unwrap();
    assert!(matches!(outcome, LikedOutcome::Recommended(_)));
    assert!(outcome.recommended_ids().is_empty());
}

#[test]
fn test_top_k_above_limit_rejected() {
    let settings = RecommendationSettings {
        max_top_k: 8,
        ..RecommendationSettings::default()
    };
    let service =
        RecommendationServiceImpl::new(Some(Arc::new(liked_bundle())), None, settings).unwrap();
    let result =
        service.recommend_from_liked(&LikedRequest::new(vec![0]).with_top_k(9), &mut seeded_rng());
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_default_limit_matches_domain_bound() {
    let settings = RecommendationSettings::default();
    assert_eq!(settings.max_top_k, MAX_TOP_K);

    let service = full_service();
    let at_limit = LikedRequest::new(vec![0]).with_top_k(MAX_TOP_K);
    assert!(service.recommend_from_liked(&at_limit, &mut seeded_rng()).is_ok());
    let over = LikedRequest::new(vec![0]).with_top_k(MAX_TOP_K + 1);
    assert!(matches!(
        service.recommend_from_liked(&over, &mut seeded_rng()),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_same_seed_same_output() {
    let service = full_service();
    let request = LikedRequest::new(vec![0, 4]).with_top_k(6);
    let a = service
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();
    let b = service
        .recommend_from_liked(&request, &mut seeded_rng())
        .unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Calculator path
// ============================================================================

#[test]
fn test_macros_requires_model() {
    let result = empty_service().recommend_from_macros(
        &MacroRequest::new(MacroTargets::default()),
        &mut seeded_rng(),
    );
    assert!(matches!(result, Err(Error::ModelUnavailable { .. })));
}

#[test]
fn test_macros_samples_from_nearest_pool() {
    let outcome = full_service()
        .recommend_from_macros(
            &MacroRequest::new(MacroTargets::default()).with_top_k(10),
            &mut seeded_rng(),
        )
        .unwrap();
    let ids = outcome.recommended_ids();
    assert_eq!(ids.len(), 10);
    assert_eq!(set(ids).len(), 10);
    assert!(ids.iter().all(|&id| (0..20).contains(&id)));
}

#[test]
fn test_macros_anonymous_ignores_constraints() {
    let mut request = MacroRequest::new(MacroTargets::default()).with_top_k(30);
    request.allergy_ids = vec![2];
    request.diet_ids = vec![1];
    let outcome = full_service()
        .recommend_from_macros(&request, &mut seeded_rng())
        .unwrap();
    // Without login the whole 20-recipe pool is eligible, even ids included.
    assert_eq!(outcome.recommended_ids().len(), 20);
}

#[test]
fn test_macros_constraints_apply_when_logged_in() {
    let request = MacroRequest::new(MacroTargets::default())
        .with_top_k(10)
        .with_constraints(vec![2], vec![1]);
    let outcome = full_service()
        .recommend_from_macros(&request, &mut seeded_rng())
        .unwrap();
    assert_eq!(set(outcome.recommended_ids()), set(&[1, 3]));
}

#[test]
fn test_macros_no_match() {
    let catalog = AttributeCatalog::new(
        [(1, "has_egg".to_string())],
        [(1, "has_egg".to_string())],
    );
    let service = full_service().with_catalog(catalog);
    let request = MacroRequest::new(MacroTargets::default()).with_constraints(vec![1], vec![1]);
    let outcome = service
        .recommend_from_macros(&request, &mut seeded_rng())
        .unwrap();
    assert_eq!(outcome, MacroOutcome::NoMatch);
}

#[test]
fn test_macros_one_based_output() {
    let request = MacroRequest::new(MacroTargets::default())
        .with_top_k(20)
        .with_convention(IdConvention::OneBased);
    let outcome = full_service()
        .recommend_from_macros(&request, &mut seeded_rng())
        .unwrap();
    assert_eq!(set(outcome.recommended_ids()), (1..=20).collect::<BTreeSet<i64>>());
}

#[test]
fn test_macros_transform_failure_surfaces() {
    // text_feature is always text in the synthetic row, so a numeric-only
    // transform fitted on it cannot map the query.
    let transform = Arc::new(NumericTransform::new(&[
        "calories",
        "protein",
        "fat",
        "text_feature",
    ]));
    let service = RecommendationServiceImpl::new(
        None,
        Some(Arc::new(calculator_bundle_with(transform))),
        RecommendationSettings::default(),
    )
    .unwrap();

    let err = service
        .recommend_from_macros(&MacroRequest::new(MacroTargets::default()), &mut seeded_rng())
        .unwrap_err();
    assert!(err.is_transform_failure());
    assert!(err.to_string().contains("text_feature"));
}

#[test]
fn test_model_status() {
    assert_eq!(
        full_service().model_status(),
        ModelStatus {
            liked_recipes: Some(10),
            calculator_recipes: Some(30),
        }
    );
    let status = empty_service().model_status();
    assert!(!status.all_loaded());
    assert_eq!(status.liked_recipes, None);
}
