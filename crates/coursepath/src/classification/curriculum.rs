//! Built-in snapshot of the reference curriculum: the advanced-level subject
//! catalog and the seven stream definitions the platform ships with. Seeds
//! the in-memory reference stores, the CLI demo, and the test suites; a
//! deployment backed by the live catalog store replaces it wholesale.

use std::collections::BTreeSet;

use super::domain::{
    AestheticArea, AreaBasket, ArtsRule, ExclusionBasket, ExclusionPair, LanguageBaskets,
    StreamDefinition, StreamId, StreamRule, Subject, SubjectId, SubjectLevel,
};

fn ids(raw: &[i64]) -> BTreeSet<SubjectId> {
    raw.iter().map(|&id| SubjectId(id)).collect()
}

fn al(id: i64, code: &str, name: &str) -> Subject {
    Subject {
        id: SubjectId(id),
        code: code.to_string(),
        name: name.to_string(),
        level: SubjectLevel::AdvancedLevel,
        active: true,
    }
}

/// The advanced-level subject catalog, plus a couple of records that exist
/// only to exercise validator paths (an ordinary-level subject and a retired
/// one).
pub fn subjects() -> Vec<Subject> {
    let mut catalog = vec![
        al(1, "PHYS", "Physics"),
        al(2, "CHEM", "Chemistry"),
        al(5, "BIOL", "Biology"),
        al(6, "CMAT", "Combined Mathematics"),
        al(7, "HMAT", "Higher Mathematics"),
        al(8, "AGRI", "Agricultural Science"),
        al(9, "ICT", "Information & Communication Technology"),
        al(10, "ENGT", "Engineering Technology"),
        al(11, "BSYT", "Biosystems Technology"),
        al(12, "SCFT", "Science for Technology"),
        al(17, "ECON", "Economics"),
        al(18, "GEOG", "Geography"),
        al(21, "HIST", "History"),
        al(23, "POLS", "Political Science"),
        al(24, "LOGI", "Logic & Scientific Method"),
        al(25, "COMM", "Communication & Media Studies"),
        al(27, "BSTU", "Business Studies"),
        al(28, "ACCT", "Accounting"),
        al(29, "BUDD", "Buddhism"),
        al(30, "BSTA", "Business Statistics"),
        al(31, "HIND", "Hinduism"),
        al(32, "ISLM", "Islam"),
        al(33, "CHRI", "Christianity"),
        al(34, "BCIV", "Buddhist Civilization"),
        al(35, "HCIV", "Hindu Civilization"),
        al(36, "ICIV", "Islamic Civilization"),
        al(37, "CCIV", "Christian Civilization"),
        al(40, "DANI", "Dancing (Indigenous)"),
        al(41, "DANB", "Dancing (Bharata)"),
        al(42, "MUSO", "Music (Oriental)"),
        al(43, "MUSW", "Music (Western)"),
        al(44, "MUSC", "Music (Carnatic)"),
        al(45, "DRAS", "Drama & Theatre (Sinhala)"),
        al(46, "DRAT", "Drama & Theatre (Tamil)"),
        al(47, "ARTV", "Art"),
        al(50, "SINH", "Sinhala"),
        al(51, "TAML", "Tamil"),
        al(52, "ENGL", "English"),
        al(53, "PALI", "Pali"),
        al(54, "SNSK", "Sanskrit"),
        al(55, "ARAB", "Arabic"),
        al(56, "FREN", "French"),
        al(57, "GERM", "German"),
        al(58, "HINL", "Hindi"),
        al(59, "JAPN", "Japanese"),
    ];

    catalog.push(Subject {
        id: SubjectId(70),
        code: "OMAT".to_string(),
        name: "Mathematics".to_string(),
        level: SubjectLevel::OrdinaryLevel,
        active: true,
    });
    catalog.push(Subject {
        id: SubjectId(71),
        code: "GTEC".to_string(),
        name: "General Technology".to_string(),
        level: SubjectLevel::AdvancedLevel,
        active: false,
    });

    catalog
}

/// The seven stream definitions in their authored evaluation order.
pub fn stream_definitions() -> Vec<StreamDefinition> {
    vec![
        StreamDefinition {
            id: StreamId(1),
            name: "Physical Science".to_string(),
            priority: 10,
            active: true,
            rule: StreamRule::PhysicalScience {
                allowed_subjects: ids(&[1, 2, 6, 7]),
            },
        },
        StreamDefinition {
            id: StreamId(2),
            name: "Biological Science".to_string(),
            priority: 20,
            active: true,
            rule: StreamRule::BiologicalScience {
                required: ids(&[5]),
                options: ids(&[1, 2, 8]),
            },
        },
        StreamDefinition {
            id: StreamId(3),
            name: "Engineering Technology".to_string(),
            priority: 30,
            active: true,
            rule: StreamRule::Technology {
                required: ids(&[10, 12]),
                options: ids(&[8, 9, 17]),
            },
        },
        StreamDefinition {
            id: StreamId(4),
            name: "Biosystems Technology".to_string(),
            priority: 40,
            active: true,
            rule: StreamRule::Technology {
                required: ids(&[11, 12]),
                options: ids(&[8, 9, 17]),
            },
        },
        StreamDefinition {
            id: StreamId(5),
            name: "Commerce".to_string(),
            priority: 50,
            active: true,
            rule: StreamRule::Commerce {
                core: ids(&[17, 27, 28]),
                supporting: ids(&[9, 18, 30]),
            },
        },
        StreamDefinition {
            id: StreamId(6),
            name: "Arts".to_string(),
            priority: 60,
            active: true,
            rule: StreamRule::Arts(arts_rule()),
        },
        StreamDefinition {
            id: StreamId(7),
            name: "Common".to_string(),
            priority: 100,
            active: true,
            rule: StreamRule::Common,
        },
    ]
}

fn arts_rule() -> ArtsRule {
    ArtsRule {
        social_sciences: ids(&[17, 18, 21, 23, 24, 25]),
        religions: ExclusionBasket {
            members: ids(&[29, 31, 32, 33, 34, 35, 36, 37]),
            // A faith subject and its civilization counterpart may not be
            // combined.
            exclusions: vec![
                ExclusionPair {
                    first: SubjectId(29),
                    second: SubjectId(34),
                },
                ExclusionPair {
                    first: SubjectId(31),
                    second: SubjectId(35),
                },
                ExclusionPair {
                    first: SubjectId(32),
                    second: SubjectId(36),
                },
                ExclusionPair {
                    first: SubjectId(33),
                    second: SubjectId(37),
                },
            ],
        },
        aesthetics: AreaBasket {
            areas: vec![
                AestheticArea {
                    name: "dance".to_string(),
                    subjects: ids(&[40, 41]),
                },
                AestheticArea {
                    name: "music".to_string(),
                    subjects: ids(&[42, 43, 44]),
                },
                AestheticArea {
                    name: "drama".to_string(),
                    subjects: ids(&[45, 46]),
                },
                AestheticArea {
                    name: "visual_arts".to_string(),
                    subjects: ids(&[47]),
                },
            ],
        },
        languages: LanguageBaskets {
            national: ids(&[50, 51, 52]),
            classical: ids(&[53, 54, 55]),
            foreign: ids(&[56, 57, 58, 59]),
        },
    }
}
