use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use coursepath::classification::curriculum;
use coursepath::classification::{
    CatalogImportError, ReferenceDataError, StreamClassificationService, StreamDefinition,
    StreamDefinitionSource, Subject, SubjectCatalogImporter, SubjectDirectory, SubjectId,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Subject directory backed by an in-process map. Reference data is loaded
/// once at startup from the built-in curriculum or an operator CSV export.
#[derive(Clone)]
pub(crate) struct InMemorySubjectDirectory {
    subjects: HashMap<SubjectId, Subject>,
}

impl InMemorySubjectDirectory {
    pub(crate) fn from_curriculum() -> Self {
        Self::from_subjects(curriculum::subjects())
    }

    pub(crate) fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        Ok(Self::from_subjects(SubjectCatalogImporter::from_path(path)?))
    }

    fn from_subjects(subjects: Vec<Subject>) -> Self {
        Self {
            subjects: subjects
                .into_iter()
                .map(|subject| (subject.id, subject))
                .collect(),
        }
    }
}

impl SubjectDirectory for InMemorySubjectDirectory {
    fn subject(&self, id: SubjectId) -> Result<Option<Subject>, ReferenceDataError> {
        Ok(self.subjects.get(&id).cloned())
    }
}

/// Stream definition source serving the built-in curriculum definitions.
#[derive(Clone)]
pub(crate) struct InMemoryStreamDefinitions {
    definitions: Vec<StreamDefinition>,
}

impl InMemoryStreamDefinitions {
    pub(crate) fn from_curriculum() -> Self {
        Self {
            definitions: curriculum::stream_definitions(),
        }
    }
}

impl StreamDefinitionSource for InMemoryStreamDefinitions {
    fn active_definitions(&self) -> Result<Vec<StreamDefinition>, ReferenceDataError> {
        Ok(self.definitions.clone())
    }
}

pub(crate) type AppClassificationService =
    StreamClassificationService<InMemorySubjectDirectory, InMemoryStreamDefinitions>;

pub(crate) fn build_classification_service(
    subjects_csv: Option<&Path>,
) -> Result<AppClassificationService, CatalogImportError> {
    let directory = match subjects_csv {
        Some(path) => InMemorySubjectDirectory::from_csv(path)?,
        None => InMemorySubjectDirectory::from_curriculum(),
    };
    Ok(StreamClassificationService::new(
        Arc::new(directory),
        Arc::new(InMemoryStreamDefinitions::from_curriculum()),
    ))
}
