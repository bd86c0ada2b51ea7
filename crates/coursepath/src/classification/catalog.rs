//! CSV import for externally authored subject catalogs.
//!
//! The catalog-management process exports `id,code,name,level,active` rows;
//! this importer turns such an export into subject records for seeding a
//! directory, rejecting rows the classifier could not trust.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Subject, SubjectId, SubjectLevel};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read subject catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid subject catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("subject id {0} is not a positive integer")]
    MalformedId(i64),
    #[error("subject id {0} appears more than once in the catalog")]
    DuplicateId(i64),
    #[error("unrecognized subject level '{0}' (expected AL or OL)")]
    UnknownLevel(String),
}

pub struct SubjectCatalogImporter;

impl SubjectCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Subject>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Subject>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut subjects = Vec::new();
        let mut seen = BTreeSet::new();
        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;
            if row.id <= 0 {
                return Err(CatalogImportError::MalformedId(row.id));
            }
            if !seen.insert(row.id) {
                return Err(CatalogImportError::DuplicateId(row.id));
            }

            subjects.push(Subject {
                id: SubjectId(row.id),
                level: parse_level(&row.level)?,
                active: row.active.unwrap_or(true),
                code: row.code,
                name: row.name,
            });
        }

        Ok(subjects)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: i64,
    code: String,
    name: String,
    level: String,
    #[serde(default, deserialize_with = "empty_string_as_none_bool")]
    active: Option<bool>,
}

fn parse_level(raw: &str) -> Result<SubjectLevel, CatalogImportError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "AL" => Ok(SubjectLevel::AdvancedLevel),
        "OL" => Ok(SubjectLevel::OrdinaryLevel),
        other => Err(CatalogImportError::UnknownLevel(other.to_string())),
    }
}

fn empty_string_as_none_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "unrecognized active flag '{other}'"
            ))),
        },
    }
}
