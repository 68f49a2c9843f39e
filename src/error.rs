use std::io;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can arise while materializing, parsing, or splitting a
/// dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unable to retrieve the user data directory")]
    CouldNotGetDataDirectory,
    #[error("test_size must lie in the open interval (0, 1), got {0}")]
    InvalidTestSize(f64),
    #[error(
        "The `fetch` feature is disabled; cannot download the `{name}` \
        dataset from {url}"
    )]
    FetchDisabled { name: &'static str, url: &'static str },
    #[error("Empty response body from {url}")]
    EmptyDownload { url: String },
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
    #[error("PolarsError: {0}")]
    Polars(#[from] PolarsError),
    #[cfg(feature = "fetch")]
    #[error("HttpError: {0}")]
    Http(#[from] reqwest::Error),
}
