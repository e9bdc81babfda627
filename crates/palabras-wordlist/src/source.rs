use async_trait::async_trait;

/// Errors from ranked-list acquisition.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not parse a word list out of {url}")]
    PageFormat { url: String },

    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("only recovered {got} distinct lemmas, expected {want}")]
    Insufficient { got: usize, want: usize },
}

/// A strategy that produces the top-n lemmas by frequency.
///
/// The scraping variants are interchangeable behind this seam; callers only
/// ever see an ordered, de-duplicated list of normalized lemmas.
#[async_trait]
pub trait RankedLemmaSource: Send + Sync {
    /// Fetch exactly `n` distinct lemmas, most frequent first.
    ///
    /// Fails with [`WordListError::Insufficient`] when the source cannot
    /// supply that many usable lemmas.
    async fn fetch_ranked_lemmas(&self, n: usize) -> Result<Vec<String>, WordListError>;
}

/// De-duplicate while preserving order, then enforce the requested count.
pub(crate) fn dedup_to_count(
    collected: Vec<String>,
    n: usize,
) -> Result<Vec<String>, WordListError> {
    let mut seen = std::collections::HashSet::new();
    let mut ranked = Vec::with_capacity(n);

    for lemma in collected {
        if ranked.len() >= n {
            break;
        }
        if !lemma.is_empty() && seen.insert(lemma.clone()) {
            ranked.push(lemma);
        }
    }

    if ranked.len() < n {
        return Err(WordListError::Insufficient {
            got: ranked.len(),
            want: n,
        });
    }

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_and_order() {
        let collected = ["de", "la", "de", "que", "la", "el"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let ranked = dedup_to_count(collected, 4).unwrap();
        assert_eq!(ranked, vec!["de", "la", "que", "el"]);
    }

    #[test]
    fn dedup_skips_empty_lemmas() {
        let collected = ["", "de", "", "la"].iter().map(|s| s.to_string()).collect();
        let ranked = dedup_to_count(collected, 2).unwrap();
        assert_eq!(ranked, vec!["de", "la"]);
    }

    #[test]
    fn shortfall_reports_obtained_count() {
        let collected = ["de", "la", "de"].iter().map(|s| s.to_string()).collect();

        match dedup_to_count(collected, 5) {
            Err(WordListError::Insufficient { got, want }) => {
                assert_eq!(got, 2);
                assert_eq!(want, 5);
            }
            other => panic!("expected shortfall, got {other:?}"),
        }
    }
}
