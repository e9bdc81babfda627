use std::path::PathBuf;

use async_trait::async_trait;

use palabras_core::normalize::clean_spanish_token;

use crate::source::{RankedLemmaSource, WordListError, dedup_to_count};

/// Ranked lemmas from a local frequency corpus.
///
/// The alternate acquisition strategy for offline runs: a TSV file of
/// `word<TAB>rank` lines, the format frequency corpora ship in. Rows that
/// do not parse, or whose word normalizes to nothing, are skipped.
pub struct CorpusSource {
    path: PathBuf,
}

impl CorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RankedLemmaSource for CorpusSource {
    async fn fetch_ranked_lemmas(&self, n: usize) -> Result<Vec<String>, WordListError> {
        let content = tokio::fs::read_to_string(&self.path).await?;

        let mut rows: Vec<(u32, String)> = Vec::new();
        for line in content.lines() {
            let mut parts = line.split('\t');
            let (Some(word), Some(rank)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(rank) = rank.trim().parse::<u32>() else {
                continue;
            };

            let lemma = clean_spanish_token(word);
            if !lemma.is_empty() {
                rows.push((rank, lemma));
            }
        }

        rows.sort_by_key(|&(rank, _)| rank);
        dedup_to_count(rows.into_iter().map(|(_, lemma)| lemma).collect(), n)
    }
}
