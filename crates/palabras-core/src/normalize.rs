use unicode_normalization::UnicodeNormalization;

use crate::pos::PartOfSpeech;

/// Characters allowed in a normalized Spanish lemma.
///
/// The Spanish alphabet plus the inverted question and exclamation marks,
/// which appear attached to interrogative/exclamatory lemmas.
fn is_lemma_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'ñ' | '¿' | '¡')
}

/// Reduce a raw word or lemma-forms cell to one canonical lemma.
///
/// Composes to NFC first so decomposed accents survive the character filter,
/// turns non-breaking spaces into ordinary ones, lowercases, takes the first
/// whitespace-delimited token, and drops every character outside the lemma
/// set. Returns an empty string when nothing usable remains.
pub fn clean_spanish_token(raw: &str) -> String {
    let text: String = raw.nfc().collect();
    let text = text.replace('\u{00a0}', " ").to_lowercase();

    let Some(first) = text.split_whitespace().next() else {
        return String::new();
    };

    first.chars().filter(|&c| is_lemma_char(c)).collect()
}

/// Lowercase a dictionary headword and collapse its internal whitespace.
///
/// Headwords may legitimately span several words ("a pesar de"), so unlike
/// [`clean_spanish_token`] this keeps every token.
pub fn clean_headword(raw: &str) -> String {
    let text: String = raw.nfc().collect();
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean an English gloss: collapse whitespace runs, then trim stray
/// list punctuation left over from the markup.
pub fn clean_gloss(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches([' ', ';', ',']).to_string()
}

/// Apply the infinitive convention: verb glosses read "to <gloss>".
///
/// Glosses that already start with "to " are left alone, as are empty
/// glosses and every non-verb category.
pub fn prefix_verb_marker(gloss: &str, pos: PartOfSpeech) -> String {
    if pos == PartOfSpeech::Verb
        && !gloss.is_empty()
        && !gloss.to_lowercase().starts_with("to ")
    {
        format!("to {gloss}")
    } else {
        gloss.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_takes_first_form_lowercased() {
        assert_eq!(clean_spanish_token("Casa casas"), "casa");
        assert_eq!(clean_spanish_token("  qué\u{00a0}quién "), "qué");
    }

    #[test]
    fn token_strips_foreign_characters() {
        assert_eq!(clean_spanish_token("casa,"), "casa");
        assert_eq!(clean_spanish_token("role-play"), "roleplay");
        assert_eq!(clean_spanish_token("¿cómo?"), "¿cómo");
        assert_eq!(clean_spanish_token("123"), "");
    }

    #[test]
    fn token_handles_decomposed_accents() {
        // "a" + combining acute, as some sources emit it
        assert_eq!(clean_spanish_token("ma\u{0301}s"), "más");
    }

    #[test]
    fn token_empty_input_stays_empty() {
        assert_eq!(clean_spanish_token(""), "");
        assert_eq!(clean_spanish_token("   "), "");
        assert_eq!(clean_spanish_token("\u{00a0}\u{00a0}"), "");
    }

    #[test]
    fn token_is_idempotent() {
        for raw in ["Casa casas", "¡HOLA!", "más", "x2y"] {
            let once = clean_spanish_token(raw);
            assert_eq!(clean_spanish_token(&once), once);
        }
    }

    #[test]
    fn token_output_stays_in_alphabet() {
        for raw in ["niño's", "été", "co‑sa", "ABC-123 déf"] {
            assert!(clean_spanish_token(raw).chars().all(is_lemma_char));
        }
    }

    #[test]
    fn headword_keeps_every_token() {
        assert_eq!(clean_headword("A  Pesar\nDe"), "a pesar de");
    }

    #[test]
    fn gloss_collapses_and_trims() {
        assert_eq!(clean_gloss("  house ;"), "house");
        assert_eq!(clean_gloss("to  go\n out,"), "to go out");
        assert_eq!(clean_gloss(" ; , "), "");
    }

    #[test]
    fn verb_marker_cases() {
        assert_eq!(prefix_verb_marker("run", PartOfSpeech::Verb), "to run");
        assert_eq!(prefix_verb_marker("to eat", PartOfSpeech::Verb), "to eat");
        assert_eq!(prefix_verb_marker("To Eat", PartOfSpeech::Verb), "To Eat");
        assert_eq!(prefix_verb_marker("", PartOfSpeech::Verb), "");
        assert_eq!(prefix_verb_marker("house", PartOfSpeech::Noun), "house");
    }
}
