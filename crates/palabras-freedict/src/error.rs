/// Errors from dictionary acquisition and parsing.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read dictionary archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("no TEI document found in dictionary archive")]
    MissingTeiMember,

    #[error("TEI document in dictionary archive is empty")]
    EmptyTeiMember,

    #[error("malformed TEI document: {0}")]
    Xml(#[from] quick_xml::Error),
}
