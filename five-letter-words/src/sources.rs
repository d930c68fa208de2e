//! Where the words come from, and where they land on disk.
use std::path::{Path, PathBuf};

use itertools::iproduct;

/// The ENABLE word list, one word per line.
pub const ENABLE_TXT_URL: &str = "https://raw.githubusercontent.com/rressler/data_raw_courses/main/enable1_words.txt";

/// The SCOWL release archive.
pub const SCOWL_ZIP_URL: &str =
    "http://wordlist.aspell.net/dicts/SCOWL/SCOWL-2020.12.07.zip";

/// Scratch space for downloads and the extracted archive. Never cleaned up.
pub const WORKDIR: &str = "._words_build";

/// Where the finished word list is written.
pub const OUTPUT_PATH: &str = "words.json";

/// File name of the downloaded ENABLE list inside [`WORKDIR`].
pub const ENABLE_FILE_NAME: &str = "enable1_words.txt";

/// File name of the downloaded SCOWL archive inside [`WORKDIR`].
pub const SCOWL_ARCHIVE_NAME: &str = "scowl.zip";

/// Directory inside [`WORKDIR`] the SCOWL archive is extracted into.
pub const SCOWL_EXTRACT_DIR: &str = "scowl";

/// Path of the dialect directories relative to [`SCOWL_EXTRACT_DIR`].
pub const SCOWL_WORDLIST_ROOT: &str = "SCOWL-2020.12.07/wordlist";

/// The SCOWL size tiers to include: "common" plus broader coverage.
pub const SCOWL_SIZES: &[&str] = &["60", "70"];

/// The SCOWL dialects to include.
pub const SCOWL_DIALECTS: &[&str] = &["american-english", "british-english"];

/// A resource to download and the file to save it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The URL to GET.
    pub url: String,
    /// Where the response body is written.
    pub destination: PathBuf,
}

impl Source {
    /// Pair a URL with its local destination.
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Source {
            url: url.into(),
            destination: destination.into(),
        }
    }
}

/// Which dialect/size combinations of the extracted archive to read.
///
/// Not every combination has to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScowlSelection {
    /// Dialect directory names, e.g. `american-english`.
    pub dialects: &'static [&'static str],
    /// Size tier file names, e.g. `60`.
    pub sizes: &'static [&'static str],
}

impl Default for ScowlSelection {
    fn default() -> Self {
        ScowlSelection {
            dialects: SCOWL_DIALECTS,
            sizes: SCOWL_SIZES,
        }
    }
}

impl ScowlSelection {
    /// Every `<root>/<dialect>/<size>` path, dialect-major.
    ///
    /// Whether the paths exist isn't checked here.
    pub fn candidates<'a>(
        &self,
        root: &'a Path,
    ) -> impl Iterator<Item = Candidate> + 'a {
        iproduct!(self.dialects.iter().copied(), self.sizes.iter().copied())
            .map(|(dialect, size)| Candidate {
                dialect,
                size,
                path: root.join(dialect).join(size),
            })
    }
}

/// One dialect/size combination and the file it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The dialect directory.
    pub dialect: &'static str,
    /// The size tier.
    pub size: &'static str,
    /// `<root>/<dialect>/<size>`
    pub path: PathBuf,
}
