mod arts;
mod rules;

use std::collections::BTreeSet;

use super::domain::{MatchedRule, StreamDefinition, StreamId, StreamRule, SubjectId};
use super::registry::StreamRegistry;
use super::validate::ValidatedTriple;

/// The stream a validated triple resolved to, with the named rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamMatch {
    pub stream_id: StreamId,
    pub stream_name: String,
    pub rule: MatchedRule,
}

/// Priority-ordered classifier over a validated registry snapshot.
///
/// Definitions are tried strictly in ascending priority order, so a triple
/// consistent with both a specific stream's rule and the permissive Arts
/// criteria resolves to the specific stream. Exhausting the order yields the
/// fallback stream, never an error.
pub struct ClassificationEngine {
    registry: StreamRegistry,
}

impl ClassificationEngine {
    pub fn new(registry: StreamRegistry) -> Self {
        Self { registry }
    }

    pub fn classify(&self, triple: &ValidatedTriple) -> StreamMatch {
        let ids = triple.ids();
        for definition in self.registry.ranked() {
            if let Some(rule) = evaluate(&ids, definition) {
                return StreamMatch {
                    stream_id: definition.id,
                    stream_name: definition.name.clone(),
                    rule,
                };
            }
        }

        let fallback = self.registry.fallback();
        StreamMatch {
            stream_id: fallback.id,
            stream_name: fallback.name.clone(),
            rule: MatchedRule::Fallback,
        }
    }
}

fn evaluate(triple: &BTreeSet<SubjectId>, definition: &StreamDefinition) -> Option<MatchedRule> {
    match &definition.rule {
        StreamRule::PhysicalScience { allowed_subjects } => {
            rules::physical_science(triple, allowed_subjects)
        }
        StreamRule::BiologicalScience { required, options } => {
            rules::biological_science(triple, required, options)
        }
        StreamRule::Commerce { core, supporting } => rules::commerce(triple, core, supporting),
        StreamRule::Technology { required, options } => {
            rules::technology(triple, required, options)
        }
        StreamRule::Arts(rule) => arts::arts(triple, rule),
        // The fallback is assigned, never matched.
        StreamRule::Common => None,
    }
}
