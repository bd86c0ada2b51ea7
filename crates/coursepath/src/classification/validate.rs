use std::collections::BTreeSet;

use super::domain::{Subject, SubjectId, SubjectLevel};
use super::registry::{ReferenceDataError, SubjectDirectory};

pub const TRIPLE_SIZE: usize = 3;

/// Per-subject validation failures surfaced to callers as the result's error
/// list. Never fatal to the calling process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected exactly {TRIPLE_SIZE} subjects, received {0}")]
    WrongSubjectCount(usize),
    #[error("subject ids must be positive integers, received {0}")]
    MalformedSubjectId(i64),
    #[error("subject {0} appears more than once in the combination")]
    DuplicateSubject(i64),
    #[error("subject {0} is unknown or no longer offered")]
    UnknownOrInactiveSubject(i64),
    #[error("subject {0} ({1}) is not an advanced-level subject")]
    WrongLevel(i64, String),
}

/// A triple that passed validation: three distinct, active, advanced-level
/// subjects in submission order.
#[derive(Debug, Clone)]
pub struct ValidatedTriple {
    subjects: [Subject; 3],
}

impl ValidatedTriple {
    pub fn subjects(&self) -> &[Subject; 3] {
        &self.subjects
    }

    pub fn ids(&self) -> BTreeSet<SubjectId> {
        self.subjects.iter().map(|subject| subject.id).collect()
    }
}

#[derive(Debug)]
pub enum ValidationOutcome {
    Valid(ValidatedTriple),
    Invalid(Vec<ValidationError>),
}

/// Check a submitted triple structurally, then referentially, against the
/// subject directory. Structural failures short-circuit before any directory
/// lookup; the classification loop is never entered on an invalid triple.
pub fn validate_triple<D>(
    directory: &D,
    subject_ids: &[i64],
) -> Result<ValidationOutcome, ReferenceDataError>
where
    D: SubjectDirectory + ?Sized,
{
    if subject_ids.len() != TRIPLE_SIZE {
        return Ok(ValidationOutcome::Invalid(vec![
            ValidationError::WrongSubjectCount(subject_ids.len()),
        ]));
    }

    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    for &raw in subject_ids {
        if raw <= 0 {
            errors.push(ValidationError::MalformedSubjectId(raw));
        } else if !seen.insert(raw) {
            errors.push(ValidationError::DuplicateSubject(raw));
        }
    }
    if !errors.is_empty() {
        return Ok(ValidationOutcome::Invalid(errors));
    }

    let mut resolved = Vec::with_capacity(TRIPLE_SIZE);
    for &raw in subject_ids {
        match directory.subject(SubjectId(raw))? {
            None => errors.push(ValidationError::UnknownOrInactiveSubject(raw)),
            Some(subject) if !subject.active => {
                errors.push(ValidationError::UnknownOrInactiveSubject(raw));
            }
            Some(subject) if subject.level != SubjectLevel::AdvancedLevel => {
                errors.push(ValidationError::WrongLevel(raw, subject.code.clone()));
            }
            Some(subject) => resolved.push(subject),
        }
    }
    if !errors.is_empty() {
        return Ok(ValidationOutcome::Invalid(errors));
    }

    let subjects: [Subject; 3] = resolved
        .try_into()
        .expect("structural checks guarantee three resolved subjects");
    Ok(ValidationOutcome::Valid(ValidatedTriple { subjects }))
}
