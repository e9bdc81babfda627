use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::pos::PartOfSpeech;

/// One row of the study dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub spanish: String,
    pub english: String,
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: PartOfSpeech,
}

/// A dictionary sense: translation text plus grammatical category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub gloss: String,
    pub pos: PartOfSpeech,
}

/// Headword lookup table built from the bilingual dictionary.
///
/// Duplicate headwords are resolved first-seen-wins: the dictionary lists
/// its primary sense first, so later repeats are dropped.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    senses: HashMap<String, Sense>,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the headword is already mapped.
    ///
    /// Returns `true` when the sense was stored.
    pub fn insert_first(&mut self, headword: String, sense: Sense) -> bool {
        match self.senses.entry(headword) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(sense);
                true
            }
        }
    }

    pub fn get(&self, headword: &str) -> Option<&Sense> {
        self.senses.get(headword)
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}
