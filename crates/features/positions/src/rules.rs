use regex::Regex;
use sigrh_domain::structure::{Structure, StructureKind};

/// Matching condition of one structural classifier rule.
#[derive(Debug)]
pub enum Predicate {
    /// The full structure code equals the given code.
    CodeEquals(&'static str),
    /// The full structure code contains the given fragment.
    CodeContains(&'static str),
    /// The full structure code matches the given pattern.
    CodeMatches(Regex),
    /// The structure kind matches and the last code segment starts with the
    /// given prefix.
    KindAndSuffix(StructureKind, &'static str),
}

impl Predicate {
    fn matches(&self, structure: &Structure) -> bool {
        match self {
            Self::CodeEquals(code) => structure.code == *code,
            Self::CodeContains(fragment) => structure.code.contains(fragment),
            Self::CodeMatches(pattern) => pattern.is_match(&structure.code),
            Self::KindAndSuffix(kind, prefix) => {
                structure.kind == *kind && structure.code_suffix().starts_with(prefix)
            }
        }
    }
}

/// One structural classification rule resolving to a leadership title.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub title: &'static str,
}

/// The ordered structural rule table, evaluated top to bottom; the first
/// matching rule wins.
#[derive(Debug)]
pub struct ClassifierRules {
    rules: Vec<Rule>,
}

impl ClassifierRules {
    /// The standard central-administration rule set.
    ///
    /// Exact-code rules come first so that `MINAT-SP` resolves to its own
    /// title rather than falling through to the service-suffix rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule {
                    name: "secretariat-general",
                    predicate: Predicate::CodeEquals("MINAT-SG"),
                    title: "Secrétaire Général",
                },
                Rule {
                    name: "cabinet",
                    predicate: Predicate::CodeEquals("MINAT-CABINET"),
                    title: "Chef de Cabinet",
                },
                Rule {
                    name: "secretariat-particulier",
                    predicate: Predicate::CodeEquals("MINAT-SP"),
                    title: "Chef du Secrétariat Particulier",
                },
                Rule {
                    name: "inspection",
                    predicate: Predicate::CodeContains("-IG-"),
                    title: "Inspecteur Général",
                },
                Rule {
                    name: "division",
                    predicate: Predicate::CodeMatches(pattern(r"-SG-D[A-Z]+$")),
                    title: "Chef de Division",
                },
                Rule {
                    name: "sous-direction",
                    predicate: Predicate::CodeContains("-SD"),
                    title: "Sous-Directeur",
                },
                Rule {
                    name: "direction",
                    predicate: Predicate::CodeMatches(pattern(r"^MINAT-D[A-Z]+$")),
                    title: "Directeur",
                },
                Rule {
                    name: "cellule",
                    predicate: Predicate::KindAndSuffix(StructureKind::Service, "C"),
                    title: "Chef de Cellule",
                },
                Rule {
                    name: "service",
                    predicate: Predicate::KindAndSuffix(StructureKind::Service, "S"),
                    title: "Chef de Service",
                },
            ],
        }
    }

    /// The first rule matching the structure, if any.
    #[must_use]
    pub fn match_structure(&self, structure: &Structure) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.predicate.matches(structure))
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("classifier pattern compiles")
}
