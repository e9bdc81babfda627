use std::path::PathBuf;
use std::time::Duration;

/// Fixed run parameters.
///
/// The tool deliberately has no flags, environment overrides, or config
/// files; one run is fully described by these constants.
pub struct Config {
    /// How many ranked words the dataset must contain.
    pub word_count: usize,
    /// Wiktionary frequency-list pages, in rank order.
    pub frequency_pages: Vec<String>,
    /// FreeDict spa-eng source archive (tar.xz with the TEI body inside).
    pub dictionary_archive_url: String,
    /// Identifying header sent with every request.
    pub user_agent: String,
    pub page_timeout: Duration,
    pub archive_timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let frequency_pages = [
            "https://en.wiktionary.org/wiki/Wiktionary:Frequency_lists/Spanish1000",
            "https://en.wiktionary.org/wiki/Wiktionary:Frequency_lists/Spanish1001-2000",
            "https://en.wiktionary.org/wiki/Wiktionary:Frequency_lists/Spanish2001-3000",
            "https://en.wiktionary.org/wiki/Wiktionary:Frequency_lists/Spanish3001-4000",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Config {
            word_count: 4000,
            frequency_pages,
            dictionary_archive_url:
                "https://download.freedict.org/dictionaries/spa-eng/0.3.1/freedict-spa-eng-0.3.1.src.tar.xz"
                    .to_string(),
            user_agent: "palabras-builder/1.1 (personal study)".to_string(),
            page_timeout: Duration::from_secs(60),
            archive_timeout: Duration::from_secs(120),
            output_path: PathBuf::from("words.json"),
        }
    }
}
