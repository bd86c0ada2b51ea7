use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog subjects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SubjectId(pub i64);

/// Identifier wrapper for stream definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamId(pub i64);

/// Examination tier a subject is taught at. Only advanced-level subjects are
/// classifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectLevel {
    AdvancedLevel,
    OrdinaryLevel,
}

impl SubjectLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SubjectLevel::AdvancedLevel => "AL",
            SubjectLevel::OrdinaryLevel => "OL",
        }
    }
}

/// Read-only subject record supplied by the external catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub code: String,
    pub name: String,
    pub level: SubjectLevel,
    pub active: bool,
}

impl Subject {
    pub fn is_classifiable(&self) -> bool {
        self.active && self.level == SubjectLevel::AdvancedLevel
    }
}

/// One externally authored stream definition: the rule payload plus its slot
/// in the evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDefinition {
    pub id: StreamId,
    pub name: String,
    pub priority: i32,
    pub active: bool,
    pub rule: StreamRule,
}

impl StreamDefinition {
    /// Every subject id mentioned anywhere in this definition's rule payload.
    pub fn referenced_subjects(&self) -> BTreeSet<SubjectId> {
        let mut ids = BTreeSet::new();
        match &self.rule {
            StreamRule::PhysicalScience { allowed_subjects } => {
                ids.extend(allowed_subjects.iter().copied());
            }
            StreamRule::BiologicalScience { required, options }
            | StreamRule::Technology { required, options } => {
                ids.extend(required.iter().copied());
                ids.extend(options.iter().copied());
            }
            StreamRule::Commerce { core, supporting } => {
                ids.extend(core.iter().copied());
                ids.extend(supporting.iter().copied());
            }
            StreamRule::Arts(arts) => {
                ids.extend(arts.social_sciences.iter().copied());
                ids.extend(arts.religions.members.iter().copied());
                ids.extend(arts.aesthetics.members());
                ids.extend(arts.languages.all());
            }
            StreamRule::Common => {}
        }
        ids
    }
}

/// Tagged rule payload, one variant per stream type. The tag mirrors how the
/// definition store serializes rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamRule {
    PhysicalScience {
        allowed_subjects: BTreeSet<SubjectId>,
    },
    BiologicalScience {
        required: BTreeSet<SubjectId>,
        options: BTreeSet<SubjectId>,
    },
    Commerce {
        core: BTreeSet<SubjectId>,
        supporting: BTreeSet<SubjectId>,
    },
    /// Shared by the Engineering and Biosystems Technology streams; the two
    /// definitions differ only in their payload sets.
    Technology {
        required: BTreeSet<SubjectId>,
        options: BTreeSet<SubjectId>,
    },
    Arts(ArtsRule),
    /// Unconditional residual bucket, selected only when no other active
    /// definition accepts the triple.
    Common,
}

/// Basket-driven rule payload for the Arts stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtsRule {
    /// Basket 1: social sciences.
    pub social_sciences: BTreeSet<SubjectId>,
    /// Basket 2: religion and civilization subjects with pairwise exclusions.
    pub religions: ExclusionBasket,
    /// Basket 3: aesthetic subjects grouped into capped areas.
    pub aesthetics: AreaBasket,
    pub languages: LanguageBaskets,
}

/// Basket whose members carry mutually exclusive pairs: a triple may contain
/// at most one subject of each pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionBasket {
    pub members: BTreeSet<SubjectId>,
    pub exclusions: Vec<ExclusionPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPair {
    pub first: SubjectId,
    pub second: SubjectId,
}

impl ExclusionPair {
    pub fn forbids(&self, triple: &BTreeSet<SubjectId>) -> bool {
        triple.contains(&self.first) && triple.contains(&self.second)
    }
}

/// Basket whose members are grouped into named areas, each contributing at
/// most one subject to a combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBasket {
    pub areas: Vec<AestheticArea>,
}

impl AreaBasket {
    pub fn members(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.areas.iter().flat_map(|area| area.subjects.iter().copied())
    }

    pub fn contains(&self, id: SubjectId) -> bool {
        self.areas.iter().any(|area| area.subjects.contains(&id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AestheticArea {
    pub name: String,
    pub subjects: BTreeSet<SubjectId>,
}

/// National, classical, and foreign language sets. Each set contributes at
/// most two matched subjects to a standard Arts combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageBaskets {
    pub national: BTreeSet<SubjectId>,
    pub classical: BTreeSet<SubjectId>,
    pub foreign: BTreeSet<SubjectId>,
}

impl LanguageBaskets {
    pub fn all(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.national
            .iter()
            .chain(self.classical.iter())
            .chain(self.foreign.iter())
            .copied()
    }

    pub fn contains(&self, id: SubjectId) -> bool {
        self.national.contains(&id) || self.classical.contains(&id) || self.foreign.contains(&id)
    }
}

/// The named condition that caused a stream to accept a triple. Reported
/// alongside the stream identity for diagnostics and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedRule {
    ThreePhysicalSciences,
    BiologyPlusTwoSciences,
    AllFromCoreCommerce,
    TwoCoreOneSupporting,
    TechnologyWithElective,
    ThreeNationalLanguages,
    NationalWithClassicalLanguages,
    TwoLanguagesWithReligionOrAesthetic,
    StandardArtsCombination,
    Fallback,
}

impl MatchedRule {
    pub const fn label(self) -> &'static str {
        match self {
            MatchedRule::ThreePhysicalSciences => "three_physical_sciences",
            MatchedRule::BiologyPlusTwoSciences => "biology_plus_two_sciences",
            MatchedRule::AllFromCoreCommerce => "all_from_core_commerce",
            MatchedRule::TwoCoreOneSupporting => "two_core_one_supporting",
            MatchedRule::TechnologyWithElective => "technology_with_elective",
            MatchedRule::ThreeNationalLanguages => "three_national_languages",
            MatchedRule::NationalWithClassicalLanguages => "national_with_classical_languages",
            MatchedRule::TwoLanguagesWithReligionOrAesthetic => {
                "two_languages_with_religion_or_aesthetic"
            }
            MatchedRule::StandardArtsCombination => "standard_arts_combination",
            MatchedRule::Fallback => "fallback",
        }
    }
}

/// Inbound classification request: three chosen subject ids. Length is
/// validated, not assumed, so malformed payloads surface as errors rather
/// than deserialization failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub subject_ids: Vec<i64>,
}

/// Structured per-call outcome. Callers branch on `valid`/`errors`, never on
/// transport-level failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub valid: bool,
    pub stream_id: Option<StreamId>,
    pub stream_name: Option<String>,
    pub matched_rule: Option<String>,
    pub errors: Vec<String>,
}

impl ClassificationResult {
    pub fn assigned(stream_id: StreamId, stream_name: String, rule: MatchedRule) -> Self {
        Self {
            valid: true,
            stream_id: Some(stream_id),
            stream_name: Some(stream_name),
            matched_rule: Some(rule.label().to_string()),
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            stream_id: None,
            stream_name: None,
            matched_rule: None,
            errors,
        }
    }
}

/// Name-only projection of a stream definition for listing endpoints; the
/// rule payload is not exposed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub id: StreamId,
    pub name: String,
}
