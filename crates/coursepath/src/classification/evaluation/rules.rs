use std::collections::BTreeSet;

use super::super::domain::{MatchedRule, SubjectId};

fn overlap(triple: &BTreeSet<SubjectId>, pool: &BTreeSet<SubjectId>) -> usize {
    triple.intersection(pool).count()
}

/// Physical Science: the whole triple must be drawn from the allowed pool.
pub(crate) fn physical_science(
    triple: &BTreeSet<SubjectId>,
    allowed_subjects: &BTreeSet<SubjectId>,
) -> Option<MatchedRule> {
    (overlap(triple, allowed_subjects) == triple.len())
        .then_some(MatchedRule::ThreePhysicalSciences)
}

/// Biological Science: every required subject present, the other two drawn
/// from the option pool. The size equation guards against a required subject
/// doubling as an option.
pub(crate) fn biological_science(
    triple: &BTreeSet<SubjectId>,
    required: &BTreeSet<SubjectId>,
    options: &BTreeSet<SubjectId>,
) -> Option<MatchedRule> {
    let option_hits = overlap(triple, options);
    (required.is_subset(triple) && option_hits >= 2 && required.len() + option_hits == triple.len())
        .then_some(MatchedRule::BiologyPlusTwoSciences)
}

/// Commerce: either all three from the core set, or two core subjects with
/// the remainder from the supporting set.
pub(crate) fn commerce(
    triple: &BTreeSet<SubjectId>,
    core: &BTreeSet<SubjectId>,
    supporting: &BTreeSet<SubjectId>,
) -> Option<MatchedRule> {
    let core_hits = overlap(triple, core);
    if core_hits == triple.len() {
        return Some(MatchedRule::AllFromCoreCommerce);
    }

    let supporting_hits = triple
        .iter()
        .filter(|id| supporting.contains(*id) && !core.contains(*id))
        .count();
    (core_hits >= 2 && supporting_hits >= 1 && core_hits + supporting_hits == triple.len())
        .then_some(MatchedRule::TwoCoreOneSupporting)
}

/// Technology (Engineering and Biosystems): both required subjects present
/// plus at least one elective from the option pool, nothing else.
pub(crate) fn technology(
    triple: &BTreeSet<SubjectId>,
    required: &BTreeSet<SubjectId>,
    options: &BTreeSet<SubjectId>,
) -> Option<MatchedRule> {
    if !required.is_subset(triple) {
        return None;
    }
    let matched: BTreeSet<SubjectId> = triple
        .iter()
        .filter(|id| required.contains(*id) || options.contains(*id))
        .copied()
        .collect();
    let elective_hits = matched.iter().filter(|id| !required.contains(*id)).count();
    (elective_hits >= 1 && matched.len() == triple.len())
        .then_some(MatchedRule::TechnologyWithElective)
}
