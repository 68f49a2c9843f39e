//! First-use downloads into the dataset cache.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::DatasetError;

/// Download `url` to `dest`. The body lands in a sibling `.part` file and
/// is renamed into place so a failed transfer never leaves a readable,
/// truncated dataset behind.
pub(crate) fn download(url: &str, dest: &Path) -> Result<(), DatasetError> {
    info!("downloading {url} to {dest:?}");
    let body = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
    if body.is_empty() {
        return Err(DatasetError::EmptyDownload {
            url: url.to_owned(),
        });
    }

    let tmp = dest.with_extension("part");
    fs::write(&tmp, &body)?;
    fs::rename(&tmp, dest)?;
    info!("wrote {} bytes to {dest:?}", body.len());
    Ok(())
}
