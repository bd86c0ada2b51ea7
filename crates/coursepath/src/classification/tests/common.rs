use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::classification::curriculum;
use crate::classification::domain::{StreamDefinition, Subject, SubjectId};
use crate::classification::evaluation::ClassificationEngine;
use crate::classification::registry::{
    ReferenceDataError, StreamDefinitionSource, StreamRegistry, SubjectDirectory,
};
use crate::classification::service::StreamClassificationService;
use crate::classification::validate::{validate_triple, ValidatedTriple, ValidationOutcome};

#[derive(Clone)]
pub(super) struct MemoryDirectory {
    subjects: HashMap<SubjectId, Subject>,
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self {
            subjects: curriculum::subjects()
                .into_iter()
                .map(|subject| (subject.id, subject))
                .collect(),
        }
    }
}

impl SubjectDirectory for MemoryDirectory {
    fn subject(&self, id: SubjectId) -> Result<Option<Subject>, ReferenceDataError> {
        Ok(self.subjects.get(&id).cloned())
    }
}

#[derive(Clone)]
pub(super) struct MemoryStreams {
    definitions: Vec<StreamDefinition>,
}

impl Default for MemoryStreams {
    fn default() -> Self {
        Self {
            definitions: curriculum::stream_definitions(),
        }
    }
}

impl MemoryStreams {
    pub(super) fn with_definitions(definitions: Vec<StreamDefinition>) -> Self {
        Self { definitions }
    }
}

impl StreamDefinitionSource for MemoryStreams {
    fn active_definitions(&self) -> Result<Vec<StreamDefinition>, ReferenceDataError> {
        Ok(self.definitions.clone())
    }
}

pub(super) struct UnavailableDirectory;

impl SubjectDirectory for UnavailableDirectory {
    fn subject(&self, _id: SubjectId) -> Result<Option<Subject>, ReferenceDataError> {
        Err(ReferenceDataError::Unavailable(
            "subject store offline".to_string(),
        ))
    }
}

pub(super) struct UnavailableStreams;

impl StreamDefinitionSource for UnavailableStreams {
    fn active_definitions(&self) -> Result<Vec<StreamDefinition>, ReferenceDataError> {
        Err(ReferenceDataError::Unavailable(
            "stream store offline".to_string(),
        ))
    }
}

pub(super) fn build_service() -> StreamClassificationService<MemoryDirectory, MemoryStreams> {
    StreamClassificationService::new(
        Arc::new(MemoryDirectory::default()),
        Arc::new(MemoryStreams::default()),
    )
}

pub(super) fn engine() -> ClassificationEngine {
    let registry =
        StreamRegistry::new(curriculum::stream_definitions()).expect("curriculum registry valid");
    ClassificationEngine::new(registry)
}

pub(super) fn validated(subject_ids: &[i64]) -> ValidatedTriple {
    let directory = MemoryDirectory::default();
    match validate_triple(&directory, subject_ids).expect("directory available") {
        ValidationOutcome::Valid(triple) => triple,
        ValidationOutcome::Invalid(errors) => {
            panic!("expected {subject_ids:?} to validate, got {errors:?}")
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
