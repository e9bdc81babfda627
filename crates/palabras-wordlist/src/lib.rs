pub mod corpus;
pub mod parse;
pub mod source;
pub mod wiktionary;

pub use corpus::CorpusSource;
pub use source::{RankedLemmaSource, WordListError};
pub use wiktionary::WiktionarySource;
