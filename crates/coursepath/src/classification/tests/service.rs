use std::sync::Arc;

use super::common::*;
use crate::classification::domain::{StreamId, StreamRule, SubjectId};
use crate::classification::service::{
    ClassificationServiceError, StreamClassificationService,
};

#[test]
fn classify_returns_an_assignment_for_a_valid_triple() {
    let service = build_service();
    let result = service.classify(&[6, 1, 2]).expect("stores available");

    assert!(result.valid);
    assert_eq!(result.stream_id, Some(StreamId(1)));
    assert_eq!(result.stream_name.as_deref(), Some("Physical Science"));
    assert_eq!(result.matched_rule.as_deref(), Some("three_physical_sciences"));
    assert!(result.errors.is_empty());
}

#[test]
fn classify_surfaces_validation_failures_as_data() {
    let service = build_service();
    let result = service.classify(&[1, 1, 70]).expect("stores available");

    assert!(!result.valid);
    assert_eq!(result.stream_id, None);
    assert_eq!(result.matched_rule, None);
    assert!(!result.errors.is_empty());
}

#[test]
fn every_valid_triple_lands_in_exactly_one_stream() {
    let service = build_service();
    for triple in [
        vec![6, 1, 2],
        vec![5, 2, 1],
        vec![10, 12, 9],
        vec![27, 17, 28],
        vec![50, 51, 52],
        vec![1, 17, 29],
    ] {
        let result = service.classify(&triple).expect("stores available");
        assert!(result.valid, "{triple:?} should validate");
        assert!(result.stream_id.is_some(), "{triple:?} should be assigned");
        assert!(result.errors.is_empty());
    }
}

#[test]
fn batch_results_parallel_the_input_and_isolate_failures() {
    let service = build_service();
    let triples = vec![
        vec![6, 1, 2],
        vec![1, 2],
        vec![999, 1, 2],
        vec![18, 21, 23],
    ];

    let results = service.classify_batch(&triples).expect("stores available");

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].stream_name.as_deref(), Some("Physical Science"));
    assert!(!results[1].valid);
    assert!(!results[2].valid);
    assert_eq!(results[3].stream_name.as_deref(), Some("Arts"));
}

#[test]
fn batch_fails_closed_when_the_stream_store_is_down() {
    let service = StreamClassificationService::new(
        Arc::new(MemoryDirectory::default()),
        Arc::new(UnavailableStreams),
    );
    let error = service
        .classify_batch(&[vec![6, 1, 2]])
        .expect_err("store offline");
    assert!(matches!(error, ClassificationServiceError::Reference(_)));
}

#[test]
fn classify_fails_closed_when_the_subject_store_is_down() {
    let service = StreamClassificationService::new(
        Arc::new(UnavailableDirectory),
        Arc::new(MemoryStreams::default()),
    );
    let error = service.classify(&[6, 1, 2]).expect_err("store offline");
    assert!(matches!(error, ClassificationServiceError::Reference(_)));
}

#[test]
fn broken_editorial_data_surfaces_as_a_registry_error() {
    let mut definitions = crate::classification::curriculum::stream_definitions();
    definitions.retain(|definition| !matches!(definition.rule, StreamRule::Common));
    let service = StreamClassificationService::new(
        Arc::new(MemoryDirectory::default()),
        Arc::new(MemoryStreams::with_definitions(definitions)),
    );

    let error = service.classify(&[6, 1, 2]).expect_err("invalid registry");
    assert!(matches!(error, ClassificationServiceError::Registry(_)));
}

#[test]
fn list_streams_exposes_names_only_in_evaluation_order() {
    let service = build_service();
    let summaries = service.list_streams().expect("stores available");

    let names: Vec<&str> = summaries.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Physical Science",
            "Biological Science",
            "Engineering Technology",
            "Biosystems Technology",
            "Commerce",
            "Arts",
            "Common",
        ]
    );
}

#[test]
fn stream_lookup_distinguishes_not_found() {
    let service = build_service();
    assert!(service.stream(StreamId(6)).expect("available").is_some());
    assert!(service.stream(StreamId(99)).expect("available").is_none());
}

#[test]
fn subjects_for_stream_resolves_the_rule_payload() {
    let service = build_service();
    let subjects = service
        .subjects_for_stream(StreamId(1))
        .expect("available")
        .expect("stream exists");

    let ids: Vec<SubjectId> = subjects.iter().map(|subject| subject.id).collect();
    assert_eq!(
        ids,
        vec![SubjectId(1), SubjectId(2), SubjectId(6), SubjectId(7)]
    );
    assert!(service
        .subjects_for_stream(StreamId(99))
        .expect("available")
        .is_none());
}
