use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use crate::{
    BuildError, Source,
    errors::DownloadError,
};

/// Download `source.url` into `source.destination`.
///
/// Parent directories are created as needed and an existing file is
/// overwritten. The whole body is read into memory first, so nothing is written
/// if the request fails. Anything but `200 OK` is an error. Returns the number
/// of bytes written.
pub fn fetch(source: &Source) -> Result<usize, BuildError> {
    let Source { url, destination } = source;
    log::info!("downloading {url}");

    let response = minreq::get(url).send().map_err(|err| {
        BuildError::Download(url.clone(), DownloadError::from(err))
    })?;
    if response.status_code != 200 {
        return Err(BuildError::HttpStatus {
            url: url.clone(),
            status: response.status_code,
            reason: response.reason_phrase,
        });
    }
    let bytes = response.into_bytes();

    write_file(destination, &bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), destination.display());
    Ok(bytes.len())
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|io_err| {
            BuildError::CreateDir(parent.to_owned(), io_err)
        })?;
    }
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .and_then(|mut file| file.write_all(bytes))
        .map_err(|io_err| BuildError::Write(path.to_owned(), io_err))
}
