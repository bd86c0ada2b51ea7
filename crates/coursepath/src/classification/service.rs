use std::sync::Arc;

use tracing::debug;

use super::domain::{ClassificationResult, StreamDefinition, StreamId, StreamSummary, Subject};
use super::evaluation::ClassificationEngine;
use super::registry::{
    ReferenceDataError, RegistryError, StreamDefinitionSource, StreamRegistry, SubjectDirectory,
};
use super::validate::{validate_triple, ValidationOutcome};

/// Facade composing the subject directory, the stream definition source, and
/// the classifier. Holds no mutable state; every call classifies against a
/// fresh registry snapshot.
pub struct StreamClassificationService<D, S> {
    directory: Arc<D>,
    streams: Arc<S>,
}

/// Infrastructure failures crossing the service boundary. Validation
/// failures never appear here; they travel inside `ClassificationResult`.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationServiceError {
    #[error(transparent)]
    Reference(#[from] ReferenceDataError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl<D, S> StreamClassificationService<D, S>
where
    D: SubjectDirectory + 'static,
    S: StreamDefinitionSource + 'static,
{
    pub fn new(directory: Arc<D>, streams: Arc<S>) -> Self {
        Self { directory, streams }
    }

    /// Classify a single subject triple.
    pub fn classify(
        &self,
        subject_ids: &[i64],
    ) -> Result<ClassificationResult, ClassificationServiceError> {
        let engine = self.engine()?;
        self.classify_with(&engine, subject_ids)
    }

    /// Classify a list of triples against one registry snapshot. Items are
    /// isolated: a validation failure in one yields an invalid result for
    /// that item and leaves the rest untouched. Output order matches input.
    pub fn classify_batch(
        &self,
        triples: &[Vec<i64>],
    ) -> Result<Vec<ClassificationResult>, ClassificationServiceError> {
        let engine = self.engine()?;
        triples
            .iter()
            .map(|triple| self.classify_with(&engine, triple))
            .collect()
    }

    /// Active stream definitions, names only.
    pub fn list_streams(&self) -> Result<Vec<StreamSummary>, ClassificationServiceError> {
        Ok(self.registry()?.summaries())
    }

    pub fn stream(
        &self,
        id: StreamId,
    ) -> Result<Option<StreamDefinition>, ClassificationServiceError> {
        Ok(self.registry()?.get(id).cloned())
    }

    /// Every subject referenced anywhere in the stream's rule payload,
    /// resolved through the directory. Ids the directory no longer knows are
    /// omitted; `None` means the stream itself is unknown.
    pub fn subjects_for_stream(
        &self,
        id: StreamId,
    ) -> Result<Option<Vec<Subject>>, ClassificationServiceError> {
        let registry = self.registry()?;
        let Some(definition) = registry.get(id) else {
            return Ok(None);
        };

        let mut subjects = Vec::new();
        for subject_id in definition.referenced_subjects() {
            if let Some(subject) = self.directory.subject(subject_id)? {
                subjects.push(subject);
            }
        }
        Ok(Some(subjects))
    }

    fn registry(&self) -> Result<StreamRegistry, ClassificationServiceError> {
        Ok(StreamRegistry::new(self.streams.active_definitions()?)?)
    }

    fn engine(&self) -> Result<ClassificationEngine, ClassificationServiceError> {
        Ok(ClassificationEngine::new(self.registry()?))
    }

    fn classify_with(
        &self,
        engine: &ClassificationEngine,
        subject_ids: &[i64],
    ) -> Result<ClassificationResult, ClassificationServiceError> {
        match validate_triple(self.directory.as_ref(), subject_ids)? {
            ValidationOutcome::Invalid(errors) => {
                debug!(?subject_ids, "combination rejected by validator");
                Ok(ClassificationResult::rejected(
                    errors.iter().map(ToString::to_string).collect(),
                ))
            }
            ValidationOutcome::Valid(triple) => {
                let matched = engine.classify(&triple);
                debug!(
                    ?subject_ids,
                    stream = %matched.stream_name,
                    rule = matched.rule.label(),
                    "combination classified"
                );
                Ok(ClassificationResult::assigned(
                    matched.stream_id,
                    matched.stream_name,
                    matched.rule,
                ))
            }
        }
    }
}
