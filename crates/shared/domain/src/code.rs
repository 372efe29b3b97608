//! Deterministic derivation of natural-key codes.
//!
//! Every record of the platform is addressed by a human-readable code
//! (`MINAT-SG-DAJ`, `CE-MFOU-YAOUN1`). Re-running the seeding pipeline must
//! produce byte-identical codes, so all helpers here are pure functions of
//! their inputs.

/// Abbreviation length for department codes (`CE-MFOU`).
pub const DEPARTMENT_ABBREV_LEN: usize = 4;
/// Abbreviation length for arrondissement codes (`CE-MFOU-YAOUN1`).
pub const ARRONDISSEMENT_ABBREV_LEN: usize = 6;

/// Replaces accented Latin characters with their ASCII counterparts.
///
/// Only the characters seen in French administrative names are mapped;
/// anything else passes through unchanged.
#[must_use]
pub fn strip_accents(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            'à' | 'â' | 'ä' | 'á' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'î' | 'ï' | 'í' => out.push('i'),
            'ô' | 'ö' | 'ó' => out.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => out.push('u'),
            'ÿ' => out.push('y'),
            'ç' => out.push('c'),
            'ñ' => out.push('n'),
            'À' | 'Â' | 'Ä' | 'Á' => out.push('A'),
            'É' | 'È' | 'Ê' | 'Ë' => out.push('E'),
            'Î' | 'Ï' | 'Í' => out.push('I'),
            'Ô' | 'Ö' | 'Ó' => out.push('O'),
            'Ù' | 'Û' | 'Ü' | 'Ú' => out.push('U'),
            'Ç' => out.push('C'),
            'Ñ' => out.push('N'),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("OE"),
            'æ' => out.push_str("ae"),
            'Æ' => out.push_str("AE"),
            other => out.push(other),
        }
    }
    out
}

/// Letters-only abbreviation used for department codes.
///
/// Accents are transliterated, the name is uppercased, every non-letter is
/// dropped and the result is truncated to `max` characters:
/// `Haute-Sanaga` becomes `HAUT`.
#[must_use]
pub fn letters_abbrev(name: &str, max: usize) -> String {
    let mut out: String = strip_accents(name)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    out.truncate(max);
    out
}

/// Abbreviation used for arrondissement codes.
///
/// Ordinal markers (`1er`, `2ème`) contribute their digits, which always
/// survive truncation so that `Yaoundé 1er` and `Yaoundé 2ème` abbreviate to
/// the distinct `YAOUN1` and `YAOUN2` rather than colliding on `YAOUND`.
#[must_use]
pub fn alnum_abbrev(name: &str, max: usize) -> String {
    let mut letters = String::new();
    let mut digits = String::new();

    for token in strip_accents(name).split_whitespace() {
        if let Some(ordinal) = ordinal_digits(token) {
            digits.push_str(ordinal);
        } else {
            letters.extend(
                token.chars().filter(char::is_ascii_alphabetic).map(|c| c.to_ascii_uppercase()),
            );
        }
    }

    letters.truncate(max.saturating_sub(digits.len()));
    letters.push_str(&digits);
    letters
}

/// Returns the digit prefix of an ordinal token (`1er`, `2eme`, `3e`), or
/// `None` when the token is not an ordinal marker.
fn ordinal_digits(token: &str) -> Option<&str> {
    let split = token.find(|c: char| !c.is_ascii_digit())?;
    if split == 0 {
        return None;
    }
    let (digits, suffix) = token.split_at(split);
    let suffix = suffix.to_ascii_lowercase();
    matches!(suffix.as_str(), "er" | "ere" | "e" | "eme").then_some(digits)
}

/// Derives a code component from a free-form title.
///
/// `Chargé d'Études Assistant` becomes `CHARGEDETUDESASSISTANT`: accents are
/// transliterated, the title is uppercased and everything that is not a
/// letter or digit (spaces, apostrophes, hyphens) is removed.
#[must_use]
pub fn title_code(title: &str) -> String {
    strip_accents(title)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Joins a parent code and a child suffix (`MINAT` + `SG` gives `MINAT-SG`).
#[must_use]
pub fn child_code(parent: &str, suffix: &str) -> String {
    format!("{parent}-{suffix}")
}

/// Code of a position seat on a structure (`GOUV-CE` + `SGG` gives
/// `GOUV-CE-SGG`).
#[must_use]
pub fn position_code(structure_code: &str, slot_code: &str) -> String {
    child_code(structure_code, slot_code)
}

/// Code of the n-th seat of a multi-headcount position
/// (`MINAT-SG-CEA-2`).
#[must_use]
pub fn numbered_position_code(structure_code: &str, slot_code: &str, seq: u32) -> String {
    format!("{structure_code}-{slot_code}-{seq}")
}

/// Title of the n-th seat of a multi-headcount position
/// (`Chargé d'Études Assistant N°2`).
#[must_use]
pub fn numbered_title(title: &str, seq: u32) -> String {
    format!("{title} N°{seq}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_are_transliterated() {
        assert_eq!(strip_accents("Extrême-Nord"), "Extreme-Nord");
        assert_eq!(strip_accents("Ngaoundéré"), "Ngaoundere");
        assert_eq!(strip_accents("Chargé d'Études"), "Charge d'Etudes");
    }

    #[test]
    fn department_abbreviations() {
        assert_eq!(letters_abbrev("Mfoundi", DEPARTMENT_ABBREV_LEN), "MFOU");
        assert_eq!(letters_abbrev("Haute-Sanaga", DEPARTMENT_ABBREV_LEN), "HAUT");
        assert_eq!(letters_abbrev("Wouri", DEPARTMENT_ABBREV_LEN), "WOUR");
        assert_eq!(letters_abbrev("Mvila", DEPARTMENT_ABBREV_LEN), "MVIL");
        // Hyphenated segments run together before truncation.
        assert_eq!(letters_abbrev("Lom-et-Djérem", DEPARTMENT_ABBREV_LEN), "LOME");
    }

    #[test]
    fn arrondissement_abbreviations_keep_ordinal_digits() {
        assert_eq!(alnum_abbrev("Ebolowa 1er", ARRONDISSEMENT_ABBREV_LEN), "EBOLO1");
        assert_eq!(alnum_abbrev("Yaoundé 1er", ARRONDISSEMENT_ABBREV_LEN), "YAOUN1");
        assert_eq!(alnum_abbrev("Yaoundé 7ème", ARRONDISSEMENT_ABBREV_LEN), "YAOUN7");
        assert_eq!(alnum_abbrev("Douala 3e", ARRONDISSEMENT_ABBREV_LEN), "DOUAL3");
    }

    #[test]
    fn arrondissement_abbreviations_without_ordinals() {
        assert_eq!(alnum_abbrev("Mbankomo", ARRONDISSEMENT_ABBREV_LEN), "MBANKO");
        assert_eq!(alnum_abbrev("Soa", ARRONDISSEMENT_ABBREV_LEN), "SOA");
    }

    #[test]
    fn ordinal_tokens_are_recognized() {
        assert_eq!(ordinal_digits("1er"), Some("1"));
        assert_eq!(ordinal_digits("2ème"), None); // accents stripped before tokenizing
        assert_eq!(ordinal_digits("2eme"), Some("2"));
        assert_eq!(ordinal_digits("5e"), Some("5"));
        assert_eq!(ordinal_digits("Yaounde"), None);
        assert_eq!(ordinal_digits("10"), None);
    }

    #[test]
    fn title_codes_drop_punctuation() {
        assert_eq!(title_code("Chargé d'Études Assistant"), "CHARGEDETUDESASSISTANT");
        assert_eq!(title_code("Inspecteur Général"), "INSPECTEURGENERAL");
        assert_eq!(title_code("Chef de Division"), "CHEFDEDIVISION");
    }

    #[test]
    fn position_codes_compose() {
        assert_eq!(position_code("MINAT-SG", "CHEFDEDIVISION"), "MINAT-SG-CHEFDEDIVISION");
        assert_eq!(numbered_position_code("MINAT-IG-IGAT", "INSPECTEUR", 3), "MINAT-IG-IGAT-INSPECTEUR-3");
        assert_eq!(numbered_title("Inspecteur", 2), "Inspecteur N°2");
    }
}
