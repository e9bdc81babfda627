use crate::entry::{DictionaryIndex, WordEntry};
use crate::normalize::prefix_verb_marker;
use crate::pos::PartOfSpeech;

/// Result of joining the ranked lemmas against the dictionary.
#[derive(Debug)]
pub struct JoinOutcome {
    pub entries: Vec<WordEntry>,
    /// Lemmas with no dictionary match; these still appear in the output
    /// with an empty gloss.
    pub missing: usize,
}

/// Join every ranked lemma against the index, preserving rank order.
///
/// The output always has one entry per input lemma. Misses get an empty
/// gloss and the `other` category; verb glosses get the infinitive marker.
pub fn join_entries(ranked: &[String], index: &DictionaryIndex) -> JoinOutcome {
    let mut entries = Vec::with_capacity(ranked.len());
    let mut missing = 0;

    for lemma in ranked {
        let (gloss, pos) = match index.get(lemma) {
            Some(sense) => (sense.gloss.clone(), sense.pos),
            None => {
                missing += 1;
                (String::new(), PartOfSpeech::Other)
            }
        };

        entries.push(WordEntry {
            spanish: lemma.clone(),
            english: prefix_verb_marker(&gloss, pos),
            part_of_speech: pos,
        });
    }

    JoinOutcome { entries, missing }
}
