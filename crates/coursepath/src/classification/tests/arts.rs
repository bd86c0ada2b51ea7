use super::common::*;
use crate::classification::domain::MatchedRule;

fn classify(subject_ids: &[i64]) -> (String, MatchedRule) {
    let outcome = engine().classify(&validated(subject_ids));
    (outcome.stream_name, outcome.rule)
}

fn arts_rule(subject_ids: &[i64]) -> MatchedRule {
    let (stream, rule) = classify(subject_ids);
    assert_eq!(stream, "Arts", "expected {subject_ids:?} to classify as Arts");
    rule
}

fn falls_through(subject_ids: &[i64]) {
    let (stream, rule) = classify(subject_ids);
    assert_eq!(
        (stream.as_str(), rule),
        ("Common", MatchedRule::Fallback),
        "expected {subject_ids:?} to fall through to the residual stream"
    );
}

#[test]
fn national_language_triple_matches_the_named_exception() {
    assert_eq!(arts_rule(&[50, 51, 52]), MatchedRule::ThreeNationalLanguages);
}

#[test]
fn national_plus_classical_languages_match_the_named_exception() {
    // Sinhala with Pali and Sanskrit.
    assert_eq!(
        arts_rule(&[50, 53, 54]),
        MatchedRule::NationalWithClassicalLanguages
    );
    // Two national, one classical.
    assert_eq!(
        arts_rule(&[50, 51, 53]),
        MatchedRule::NationalWithClassicalLanguages
    );
}

#[test]
fn two_languages_with_one_religion_or_aesthetic_subject_match() {
    // Sinhala, French, Buddhism.
    assert_eq!(
        arts_rule(&[50, 56, 29]),
        MatchedRule::TwoLanguagesWithReligionOrAesthetic
    );
    // Tamil, Japanese, Music (Oriental).
    assert_eq!(
        arts_rule(&[51, 59, 42]),
        MatchedRule::TwoLanguagesWithReligionOrAesthetic
    );
}

#[test]
fn standard_combinations_span_the_baskets() {
    // Geography, Buddhism, Art.
    assert_eq!(arts_rule(&[18, 29, 47]), MatchedRule::StandardArtsCombination);
    // History, Political Science, Dancing (Indigenous).
    assert_eq!(arts_rule(&[21, 23, 40]), MatchedRule::StandardArtsCombination);
}

#[test]
fn two_physical_science_subjects_are_hard_rejected() {
    // Physics and Chemistry with History: the science pair disqualifies the
    // triple from Arts even though History is a basket subject.
    falls_through(&[1, 2, 21]);
}

#[test]
fn two_core_commerce_subjects_are_hard_rejected() {
    // Business Studies and Accounting with History; not a commerce match
    // (History is neither core nor supporting), and barred from Arts.
    falls_through(&[27, 28, 21]);
}

#[test]
fn biology_with_a_science_support_subject_is_hard_rejected() {
    // Biology plus Agricultural Science reads as a science combination even
    // next to History.
    falls_through(&[5, 8, 21]);
}

#[test]
fn fewer_than_two_basket_subjects_reject() {
    // Only History touches an Arts basket.
    falls_through(&[21, 1, 9]);
}

#[test]
fn single_social_science_cannot_carry_a_mixed_triple() {
    // Economics alone from basket 1, with Physics outside every basket.
    falls_through(&[17, 29, 1]);
}

#[test]
fn faith_and_its_civilization_counterpart_exclude_each_other() {
    // Buddhism with Buddhist Civilization violates the pairwise exclusion.
    falls_through(&[29, 34, 21]);
    // Different families may combine.
    assert_eq!(arts_rule(&[29, 35, 21]), MatchedRule::StandardArtsCombination);
}

#[test]
fn aesthetic_areas_cap_at_one_subject_each() {
    // Two music subjects in one combination.
    falls_through(&[42, 43, 21]);
    // One subject from each of two areas is fine.
    assert_eq!(arts_rule(&[42, 45, 21]), MatchedRule::StandardArtsCombination);
}

#[test]
fn residual_subject_claimed_by_another_stream_rejects() {
    // Buddhism and Art are basket subjects, but Engineering Technology
    // belongs to its own stream and drags the triple out of Arts.
    falls_through(&[29, 47, 10]);
}

#[test]
fn residual_subject_claimed_by_no_stream_is_tolerated() {
    // ICT is nobody's core subject; two basket subjects carry the triple.
    assert_eq!(arts_rule(&[29, 47, 9]), MatchedRule::StandardArtsCombination);
}
