use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The lexical database could not be provisioned or parsed. Fatal at startup.
    #[error("WordNet data unavailable at {path}: {reason}")]
    DataUnavailable { path : PathBuf, reason : String },

    /// A synset lacks a field needed to render it.
    #[error("Malformed synset {id}: missing {field}")]
    MalformedEntry { id : String, field : &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn unavailable(path : impl Into<PathBuf>, reason : impl ToString) -> Error {
        Error::DataUnavailable {
            path : path.into(),
            reason : reason.to_string()
        }
    }
}
