//! The errors produced while building the word list.
//!
//! Nothing is recovered from: every variant aborts the build.
use std::{io, path::PathBuf};

use thiserror::Error;

/// Building the word list failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    /// The HTTP request itself failed (DNS, connection, TLS, ...).
    #[error("failed to download {0}: {1}")]
    Download(String, DownloadError),
    /// The server answered, but not with `200 OK`.
    #[error("failed to download {url}: {status} {reason}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code received.
        status: i32,
        /// The reason phrase sent alongside the status.
        reason: String,
    },
    /// A directory could not be created.
    #[error("failed to create directory {}: {}", .0.display(), .1)]
    CreateDir(PathBuf, io::Error),
    /// A file could not be read.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    Read(PathBuf, io::Error),
    /// A file could not be written.
    #[error("failed to write to {}: {}", .0.display(), .1)]
    Write(PathBuf, io::Error),
    /// The zip archive was corrupt or unreadable.
    #[error("failed to extract {}: {}", .0.display(), .1)]
    Archive(PathBuf, ArchiveError),
    /// The word list couldn't be serialised.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

// New-typed errors to not have 3rd party errors in public API
/// [`minreq`] could not complete the request.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct DownloadError(#[from] minreq::Error);

/// [`zip`] could not read the archive.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ArchiveError(#[from] zip::result::ZipError);

/// [`serde_json`] could not serialise the words.
#[derive(Debug, Error)]
#[error("failed to serialise words: {0}")]
pub struct SerializeError(#[from] serde_json::Error);
