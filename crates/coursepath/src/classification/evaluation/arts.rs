use std::collections::BTreeSet;

use super::super::domain::{ArtsRule, MatchedRule, SubjectId};

// Marker sets naming subjects that clearly belong to another stream. A triple
// leaning on these must not be reclassified as Arts even when it touches an
// Arts basket. The ids mirror the curriculum office's interim guidance.
// TODO: replace these with registry-driven exclusions once stream definitions
// carry their own marker sets; until then any curriculum renumbering must be
// mirrored here by hand.
const PHYSICAL_SCIENCE_MARKERS: [SubjectId; 4] =
    [SubjectId(1), SubjectId(2), SubjectId(6), SubjectId(7)];
const CORE_COMMERCE_MARKERS: [SubjectId; 3] = [SubjectId(17), SubjectId(27), SubjectId(28)];
const TECHNOLOGY_MARKERS: [SubjectId; 3] = [SubjectId(10), SubjectId(11), SubjectId(12)];
const BIOLOGY: SubjectId = SubjectId(5);
const SCIENCE_SUPPORT_MARKERS: [SubjectId; 4] =
    [SubjectId(1), SubjectId(2), SubjectId(6), SubjectId(8)];

fn marker_hits(triple: &BTreeSet<SubjectId>, markers: &[SubjectId]) -> usize {
    markers.iter().filter(|id| triple.contains(*id)).count()
}

/// Arts evaluator: exception short-circuits, hard rejection, basket
/// accounting, constraint checks, then the residual-subject check.
pub(crate) fn arts(triple: &BTreeSet<SubjectId>, rule: &ArtsRule) -> Option<MatchedRule> {
    if let Some(exception) = language_exception(triple, rule) {
        return Some(exception);
    }

    if hard_rejection(triple) {
        return None;
    }

    let social = marker_hits_set(triple, &rule.social_sciences);
    let in_any_basket = triple
        .iter()
        .filter(|id| in_arts_basket(**id, rule))
        .count();

    if in_any_basket < 2 {
        return None;
    }
    // A single incidental social-science subject must not pull an otherwise
    // unrelated combination into Arts.
    if social == 1 && in_any_basket != triple.len() {
        return None;
    }

    if rule
        .religions
        .exclusions
        .iter()
        .any(|pair| pair.forbids(triple))
    {
        return None;
    }
    for area in &rule.aesthetics.areas {
        if marker_hits_set(triple, &area.subjects) > 1 {
            return None;
        }
    }
    if marker_hits_set(triple, &rule.languages.national) > 2
        || marker_hits_set(triple, &rule.languages.classical) > 2
        || marker_hits_set(triple, &rule.languages.foreign) > 2
    {
        return None;
    }

    // Any residual subject claimed by another stream's core signals this is
    // not a genuine Arts combination.
    for id in triple {
        if !in_arts_basket(*id, rule) && claimed_by_other_stream(*id) {
            return None;
        }
    }

    Some(MatchedRule::StandardArtsCombination)
}

/// The three language exceptions, checked before anything else. These accept
/// regardless of basket-accounting outcomes.
fn language_exception(triple: &BTreeSet<SubjectId>, rule: &ArtsRule) -> Option<MatchedRule> {
    let national = marker_hits_set(triple, &rule.languages.national);
    let classical = marker_hits_set(triple, &rule.languages.classical);
    let any_language = triple.iter().filter(|id| rule.languages.contains(**id)).count();

    if national == triple.len() {
        return Some(MatchedRule::ThreeNationalLanguages);
    }
    if national >= 1 && national + classical == triple.len() {
        return Some(MatchedRule::NationalWithClassicalLanguages);
    }

    let religion_or_aesthetic = triple
        .iter()
        .filter(|id| rule.religions.members.contains(*id) || rule.aesthetics.contains(**id))
        .count();
    if any_language == 2 && religion_or_aesthetic == 1 {
        return Some(MatchedRule::TwoLanguagesWithReligionOrAesthetic);
    }

    None
}

fn hard_rejection(triple: &BTreeSet<SubjectId>) -> bool {
    marker_hits(triple, &PHYSICAL_SCIENCE_MARKERS) >= 2
        || marker_hits(triple, &CORE_COMMERCE_MARKERS) >= 2
        || marker_hits(triple, &TECHNOLOGY_MARKERS) >= 2
        || (triple.contains(&BIOLOGY) && marker_hits(triple, &SCIENCE_SUPPORT_MARKERS) >= 1)
}

fn marker_hits_set(triple: &BTreeSet<SubjectId>, pool: &BTreeSet<SubjectId>) -> usize {
    triple.intersection(pool).count()
}

fn in_arts_basket(id: SubjectId, rule: &ArtsRule) -> bool {
    rule.social_sciences.contains(&id)
        || rule.religions.members.contains(&id)
        || rule.aesthetics.contains(id)
        || rule.languages.contains(id)
}

fn claimed_by_other_stream(id: SubjectId) -> bool {
    id == BIOLOGY
        || PHYSICAL_SCIENCE_MARKERS.contains(&id)
        || CORE_COMMERCE_MARKERS.contains(&id)
        || TECHNOLOGY_MARKERS.contains(&id)
}
