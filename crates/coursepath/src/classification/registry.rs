use super::domain::{StreamDefinition, StreamId, StreamRule, StreamSummary, Subject, SubjectId};

/// Read-only view of the subject catalog. Implementations fetch per call so
/// the engine always classifies against a current snapshot.
pub trait SubjectDirectory: Send + Sync {
    fn subject(&self, id: SubjectId) -> Result<Option<Subject>, ReferenceDataError>;
}

/// Read-only view of the externally authored stream definitions.
pub trait StreamDefinitionSource: Send + Sync {
    fn active_definitions(&self) -> Result<Vec<StreamDefinition>, ReferenceDataError>;
}

/// Infrastructure failure reaching the reference stores. Distinct from
/// validation failure: callers retry instead of treating it as "no stream".
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("reference data unavailable: {0}")]
    Unavailable(String),
}

/// Invariant violations in a definition set. These indicate broken editorial
/// data, never a property of the triple being classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no fallback stream definition present")]
    MissingFallback,
    #[error("more than one fallback stream definition present")]
    DuplicateFallback,
    #[error("duplicate stream id {0}")]
    DuplicateStreamId(i64),
    #[error("duplicate evaluation priority {0}")]
    DuplicatePriority(i32),
    #[error("fallback stream must carry the lowest evaluation priority")]
    FallbackNotLast,
}

/// Validated, immutable snapshot of the active stream definitions.
///
/// Construction enforces the editorial invariants (exactly one fallback, a
/// total priority order, fallback strictly last) so the classifier can iterate
/// without re-checking them. Inactive definitions are dropped on entry.
#[derive(Debug, Clone)]
pub struct StreamRegistry {
    ranked: Vec<StreamDefinition>,
    fallback: StreamDefinition,
}

impl StreamRegistry {
    pub fn new(definitions: Vec<StreamDefinition>) -> Result<Self, RegistryError> {
        let mut ranked = Vec::new();
        let mut fallback: Option<StreamDefinition> = None;
        let mut ids = std::collections::BTreeSet::new();
        let mut priorities = std::collections::BTreeSet::new();

        for definition in definitions {
            if !definition.active {
                continue;
            }
            if !ids.insert(definition.id.0) {
                return Err(RegistryError::DuplicateStreamId(definition.id.0));
            }
            if !priorities.insert(definition.priority) {
                return Err(RegistryError::DuplicatePriority(definition.priority));
            }
            if matches!(definition.rule, StreamRule::Common) {
                if fallback.replace(definition).is_some() {
                    return Err(RegistryError::DuplicateFallback);
                }
            } else {
                ranked.push(definition);
            }
        }

        let fallback = fallback.ok_or(RegistryError::MissingFallback)?;
        ranked.sort_by_key(|definition| definition.priority);
        if ranked
            .last()
            .is_some_and(|definition| definition.priority > fallback.priority)
        {
            return Err(RegistryError::FallbackNotLast);
        }

        Ok(Self { ranked, fallback })
    }

    /// Non-fallback definitions in ascending priority order.
    pub fn ranked(&self) -> &[StreamDefinition] {
        &self.ranked
    }

    pub fn fallback(&self) -> &StreamDefinition {
        &self.fallback
    }

    pub fn get(&self, id: StreamId) -> Option<&StreamDefinition> {
        self.ranked
            .iter()
            .find(|definition| definition.id == id)
            .or_else(|| (self.fallback.id == id).then_some(&self.fallback))
    }

    /// Name-only summaries in evaluation order, fallback last.
    pub fn summaries(&self) -> Vec<StreamSummary> {
        self.ranked
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|definition| StreamSummary {
                id: definition.id,
                name: definition.name.clone(),
            })
            .collect()
    }
}
