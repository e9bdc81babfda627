use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech categories emitted in the study dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Interjection,
    Determiner,
    Other,
}

impl PartOfSpeech {
    /// Normalize a raw POS code from dictionary markup.
    ///
    /// Strips everything but ASCII letters, lowercases, then maps the common
    /// FreeDict abbreviations onto the closed category set. Anything
    /// unrecognized becomes [`PartOfSpeech::Other`].
    pub fn parse(code: &str) -> Self {
        let code: String = code
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match code.as_str() {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adj" | "adjective" => PartOfSpeech::Adjective,
            "adv" | "adverb" => PartOfSpeech::Adverb,
            "prep" | "preposition" => PartOfSpeech::Preposition,
            "conj" | "conjunction" => PartOfSpeech::Conjunction,
            "pron" | "pronoun" => PartOfSpeech::Pronoun,
            "interj" | "interjection" => PartOfSpeech::Interjection,
            "det" | "determiner" => PartOfSpeech::Determiner,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_abbreviations() {
        assert_eq!(PartOfSpeech::parse("noun"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::parse("adj"), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::parse("adjective"), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::parse("prep"), PartOfSpeech::Preposition);
        assert_eq!(PartOfSpeech::parse("interj"), PartOfSpeech::Interjection);
        assert_eq!(PartOfSpeech::parse("det"), PartOfSpeech::Determiner);
    }

    #[test]
    fn tolerates_markup_noise() {
        assert_eq!(PartOfSpeech::parse(" Verb. "), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::parse("ADV"), PartOfSpeech::Adverb);
        assert_eq!(PartOfSpeech::parse("n., pl."), PartOfSpeech::Other);
    }

    #[test]
    fn unknown_codes_become_other() {
        assert_eq!(PartOfSpeech::parse(""), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::parse("gerund"), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::parse("123"), PartOfSpeech::Other);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PartOfSpeech::Adjective).unwrap();
        assert_eq!(json, "\"adjective\"");
    }
}
