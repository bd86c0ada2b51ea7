use super::common::*;
use crate::classification::domain::MatchedRule;

fn classify(subject_ids: &[i64]) -> (String, MatchedRule) {
    let outcome = engine().classify(&validated(subject_ids));
    (outcome.stream_name, outcome.rule)
}

#[test]
fn combined_maths_physics_chemistry_is_physical_science() {
    assert_eq!(
        classify(&[6, 1, 2]),
        (
            "Physical Science".to_string(),
            MatchedRule::ThreePhysicalSciences
        )
    );
}

#[test]
fn biology_chemistry_physics_is_biological_science() {
    assert_eq!(
        classify(&[5, 2, 1]),
        (
            "Biological Science".to_string(),
            MatchedRule::BiologyPlusTwoSciences
        )
    );
}

#[test]
fn business_economics_accounting_is_core_commerce() {
    assert_eq!(
        classify(&[27, 17, 28]),
        ("Commerce".to_string(), MatchedRule::AllFromCoreCommerce)
    );
}

#[test]
fn two_core_subjects_with_supporting_subject_is_commerce() {
    assert_eq!(
        classify(&[27, 28, 30]),
        ("Commerce".to_string(), MatchedRule::TwoCoreOneSupporting)
    );
}

#[test]
fn engineering_technology_with_ict_elective() {
    assert_eq!(
        classify(&[10, 12, 9]),
        (
            "Engineering Technology".to_string(),
            MatchedRule::TechnologyWithElective
        )
    );
}

#[test]
fn biosystems_technology_with_agriculture_elective() {
    assert_eq!(
        classify(&[11, 12, 8]),
        (
            "Biosystems Technology".to_string(),
            MatchedRule::TechnologyWithElective
        )
    );
}

#[test]
fn three_national_languages_classify_as_arts() {
    assert_eq!(
        classify(&[50, 51, 52]),
        ("Arts".to_string(), MatchedRule::ThreeNationalLanguages)
    );
}

#[test]
fn three_social_sciences_classify_as_arts() {
    assert_eq!(
        classify(&[18, 21, 23]),
        ("Arts".to_string(), MatchedRule::StandardArtsCombination)
    );
}

#[test]
fn one_subject_per_domain_falls_back_to_common() {
    // Physics, Economics, Buddhism: touches three streams, satisfies none.
    assert_eq!(
        classify(&[1, 17, 29]),
        ("Common".to_string(), MatchedRule::Fallback)
    );
}

#[test]
fn specific_streams_win_over_arts() {
    // Economics sits in both the commerce core and the social-science
    // basket; a commerce-complete triple must never resolve to Arts.
    let (stream, rule) = classify(&[17, 27, 28]);
    assert_eq!(stream, "Commerce");
    assert_eq!(rule, MatchedRule::AllFromCoreCommerce);
}

#[test]
fn classification_is_deterministic_for_a_fixed_snapshot() {
    let engine = engine();
    let triple = validated(&[18, 21, 23]);
    let first = engine.classify(&triple);
    let second = engine.classify(&triple);
    assert_eq!(first, second);
}

#[test]
fn triple_order_does_not_affect_the_outcome() {
    assert_eq!(classify(&[1, 2, 6]), classify(&[6, 1, 2]));
    assert_eq!(classify(&[23, 18, 21]), classify(&[18, 21, 23]));
}
