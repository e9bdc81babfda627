use anyhow::{Context, Result};
use tracing::info;

use palabras_core::join::{JoinOutcome, join_entries};
use palabras_freedict::{archive, fetch, tei};
use palabras_wordlist::{RankedLemmaSource, WiktionarySource};

use crate::config::Config;

/// Run the whole pipeline: ranked list, dictionary, join, output file.
///
/// Stages run strictly in sequence; any failure aborts the run before the
/// output file is touched.
pub async fn run(config: &Config) -> Result<()> {
    info!("fetching top {} words from Wiktionary", config.word_count);
    let source = WiktionarySource::new(
        config.frequency_pages.clone(),
        config.user_agent.clone(),
        config.page_timeout,
    );
    let ranked = source
        .fetch_ranked_lemmas(config.word_count)
        .await
        .context("failed to build the ranked word list")?;

    info!("downloading FreeDict spa-eng source archive");
    let client = reqwest::Client::new();
    let archive_bytes = fetch::download_archive(
        &client,
        &config.dictionary_archive_url,
        &config.user_agent,
        config.archive_timeout,
    )
    .await
    .context("failed to download the dictionary archive")?;

    info!("extracting TEI document");
    let tei_xml =
        archive::extract_tei(&archive_bytes).context("failed to extract the TEI document")?;

    info!("parsing dictionary entries");
    let index = tei::parse_tei(&tei_xml).context("failed to parse the TEI dictionary")?;
    info!("indexed {} headwords", index.len());

    let outcome = join_entries(&ranked, &index);
    write_output(config, &outcome)?;

    info!(
        "done: wrote {} entries to {}, missing translations: {}",
        outcome.entries.len(),
        config.output_path.display(),
        outcome.missing
    );

    Ok(())
}

/// Serialize the joined entries as one UTF-8 JSON array.
///
/// serde_json writes non-ASCII characters as-is, so accented lemmas land
/// in the file unescaped.
fn write_output(config: &Config, outcome: &JoinOutcome) -> Result<()> {
    let json = serde_json::to_vec(&outcome.entries).context("failed to serialize entries")?;
    std::fs::write(&config.output_path, json)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use palabras_core::entry::{DictionaryIndex, Sense};
    use palabras_core::pos::PartOfSpeech;

    use super::*;

    #[test]
    fn output_file_is_plain_utf8_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_path: dir.path().join("words.json"),
            ..Config::default()
        };

        let mut index = DictionaryIndex::new();
        index.insert_first(
            "mañana".into(),
            Sense {
                gloss: "morning".into(),
                pos: PartOfSpeech::Noun,
            },
        );

        let ranked = vec!["mañana".to_string(), "xyzzy".to_string()];
        let outcome = join_entries(&ranked, &index);
        write_output(&config, &outcome).unwrap();

        let written = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            written,
            r#"[{"spanish":"mañana","english":"morning","partOfSpeech":"noun"},{"spanish":"xyzzy","english":"","partOfSpeech":"other"}]"#
        );
        // Non-ASCII must not be escaped to \uXXXX sequences.
        assert!(!written.contains("\\u"));
    }
}
