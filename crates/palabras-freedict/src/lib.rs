pub mod archive;
pub mod error;
pub mod fetch;
pub mod tei;

pub use error::DictError;
