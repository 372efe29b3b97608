//! Count-phrase extraction from structure descriptions.
//!
//! Administrative descriptions state headcounts in prose ("La cellule
//! dispose de 2 Chargés d'Études Assistants."). The scanner recognizes
//! `<digits> <Role phrase>` occurrences for a fixed keyword set and returns
//! the count plus the de-pluralized role title; candidates with an unknown
//! keyword are reported rather than guessed.

use regex::Regex;
use std::sync::LazyLock;

/// Role keywords recognized as counted positions, in singular form.
const ROLE_KEYWORDS: [&str; 3] = ["Chargé", "Inspecteur", "Conseiller"];

static COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s+").expect("count pattern compiles"));

/// One recognized count phrase of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountPhrase {
    pub count: u32,
    /// Singularized role phrase (`Chargé d'Études Assistant`).
    pub role: String,
}

/// Outcome of scanning one description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountExtraction {
    pub phrases: Vec<CountPhrase>,
    /// Role candidates whose keyword is not recognized, verbatim.
    pub unrecognized: Vec<String>,
}

/// Scans a description for count phrases.
#[must_use]
pub fn scan(description: &str) -> CountExtraction {
    let mut extraction = CountExtraction::default();

    for mat in COUNT.find_iter(description) {
        let Ok(count) = mat.as_str().trim_end().parse::<u32>() else { continue };

        let tokens = role_tokens(&description[mat.end()..]);
        let Some(first) = tokens.first() else { continue };

        if is_role_keyword(first) {
            extraction.phrases.push(CountPhrase { count, role: singular_role(&tokens) });
        } else {
            extraction.unrecognized.push(tokens.join(" "));
        }
    }

    extraction
}

/// Collects the role phrase following a count: the leading capitalized word,
/// then capitalized continuations, genitive-glued words (`d'Études`) and
/// connectors (`de`, `des`, `du`) that lead to another capitalized word.
fn role_tokens(rest: &str) -> Vec<String> {
    let words: Vec<String> = rest.split_whitespace().map(clean).collect();
    let mut tokens = Vec::new();

    for (index, word) in words.iter().enumerate() {
        if word.is_empty() {
            break;
        }

        let take = if index == 0 {
            starts_upper(word)
        } else if is_connector(word) {
            words.get(index + 1).is_some_and(|next| starts_upper(next) || is_glued(next))
        } else {
            starts_upper(word) || is_glued(word)
        };

        if !take {
            break;
        }
        tokens.push(word.clone());
    }

    tokens
}

/// De-pluralizes a role phrase: the trailing `s` is stripped from every word
/// except those under a genitive particle, which keep their plural
/// (`Chargés d'Études Assistants` becomes `Chargé d'Études Assistant`).
fn singular_role(tokens: &[String]) -> String {
    let mut parts = Vec::with_capacity(tokens.len());
    let mut protect_next = false;

    for token in tokens {
        if is_connector(token) {
            protect_next = true;
            parts.push(token.clone());
            continue;
        }

        let protected = protect_next || is_glued(token);
        protect_next = false;

        if !protected && token.len() > 1 && token.ends_with('s') {
            parts.push(token[..token.len() - 1].to_owned());
        } else {
            parts.push(token.clone());
        }
    }

    parts.join(" ")
}

fn is_role_keyword(token: &str) -> bool {
    let stem = token.strip_suffix('s').unwrap_or(token);
    ROLE_KEYWORDS.contains(&stem)
}

/// Strips trailing sentence punctuation from a word.
fn clean(word: &str) -> String {
    word.trim_end_matches(|c: char| !c.is_alphabetic()).to_owned()
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// `d'Études`-style words: a genitive particle glued to a capitalized word.
fn is_glued(word: &str) -> bool {
    ["d'", "l'", "D'", "L'"]
        .iter()
        .any(|particle| word.strip_prefix(particle).is_some_and(starts_upper))
}

fn is_connector(word: &str) -> bool {
    matches!(word, "de" | "des" | "du")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(description: &str) -> Vec<(u32, String)> {
        scan(description).phrases.into_iter().map(|p| (p.count, p.role)).collect()
    }

    #[test]
    fn recognizes_the_three_role_keywords() {
        assert_eq!(
            phrases("Le Cabinet du Ministre comprend 2 Conseillers Techniques."),
            [(2, "Conseiller Technique".to_owned())]
        );
        assert_eq!(phrases("Elle comprend 3 Inspecteurs."), [(3, "Inspecteur".to_owned())]);
        assert_eq!(phrases("La cellule compte 2 Chargés d'Études."), [(2, "Chargé d'Études".to_owned())]);
    }

    #[test]
    fn genitive_words_keep_their_plural() {
        assert_eq!(
            phrases("La cellule dispose de 2 Chargés d'Études Assistants."),
            [(2, "Chargé d'Études Assistant".to_owned())]
        );
        assert_eq!(
            phrases("Il est assisté de 3 Chargés des Missions."),
            [(3, "Chargé des Missions".to_owned())]
        );
    }

    #[test]
    fn unknown_keywords_are_reported_not_guessed() {
        let extraction = scan("Le service comprend 2 Secrétaires Particuliers.");
        assert!(extraction.phrases.is_empty());
        assert_eq!(extraction.unrecognized, ["Secrétaires Particuliers"]);
    }

    #[test]
    fn prose_numbers_without_roles_are_ignored() {
        let extraction = scan("Créée en 1992 par décret, la direction coordonne 4 programmes nationaux.");
        assert!(extraction.phrases.is_empty());
        assert!(extraction.unrecognized.is_empty());
    }

    #[test]
    fn several_phrases_in_one_description() {
        assert_eq!(
            phrases("Il comprend 2 Conseillers Techniques et 3 Inspecteurs."),
            [(2, "Conseiller Technique".to_owned()), (3, "Inspecteur".to_owned())]
        );
    }

    #[test]
    fn empty_descriptions_yield_nothing() {
        assert_eq!(scan(""), CountExtraction::default());
        assert_eq!(scan("Le Secrétariat Particulier traite les affaires réservées."), CountExtraction::default());
    }
}
