use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{
    BuildError, ScowlSelection, Source, WordSet, archive, fetch,
    filter_five_letter_words, output,
    sources::{
        ENABLE_FILE_NAME, ENABLE_TXT_URL, OUTPUT_PATH, SCOWL_ARCHIVE_NAME,
        SCOWL_EXTRACT_DIR, SCOWL_WORDLIST_ROOT, SCOWL_ZIP_URL, WORKDIR,
    },
};

/// A single, sequential build of the five-letter word list.
///
/// [`WordsBuild::default`] is the real thing: ENABLE and SCOWL are downloaded
/// into `._words_build/` and the result is written to `words.json`, both
/// relative to the current directory. The `with_*` methods exist so the build
/// can be pointed somewhere else, e.g. a local server and a scratch directory.
#[derive(Debug, Clone)]
pub struct WordsBuild {
    workdir: PathBuf,
    output: PathBuf,
    flat_list_url: String,
    archive_url: String,
    selection: ScowlSelection,
}

impl Default for WordsBuild {
    fn default() -> Self {
        WordsBuild {
            workdir: PathBuf::from(WORKDIR),
            output: PathBuf::from(OUTPUT_PATH),
            flat_list_url: String::from(ENABLE_TXT_URL),
            archive_url: String::from(SCOWL_ZIP_URL),
            selection: ScowlSelection::default(),
        }
    }
}

impl WordsBuild {
    /// Use a different scratch directory.
    #[must_use]
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    /// Write the word list somewhere other than `words.json`.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Download the flat word list from `url`.
    #[must_use]
    pub fn with_flat_list_url(mut self, url: impl Into<String>) -> Self {
        self.flat_list_url = url.into();
        self
    }

    /// Download the SCOWL archive from `url`.
    #[must_use]
    pub fn with_archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = url.into();
        self
    }

    /// The flat word list download.
    pub fn flat_list(&self) -> Source {
        Source::new(&self.flat_list_url, self.workdir.join(ENABLE_FILE_NAME))
    }

    /// The SCOWL archive download.
    pub fn archive(&self) -> Source {
        Source::new(&self.archive_url, self.workdir.join(SCOWL_ARCHIVE_NAME))
    }

    /// Where the archive gets unpacked.
    pub fn extract_dir(&self) -> PathBuf {
        self.workdir.join(SCOWL_EXTRACT_DIR)
    }

    /// The directory holding the per-dialect word lists once extracted.
    pub fn wordlist_root(&self) -> PathBuf {
        self.extract_dir().join(SCOWL_WORDLIST_ROOT)
    }

    /// Run every stage in order, stopping at the first error.
    ///
    /// Downloads and the extracted tree are left in the working directory.
    pub fn run(&self) -> Result<BuildSummary, BuildError> {
        fs::create_dir_all(&self.workdir).map_err(|io_err| {
            BuildError::CreateDir(self.workdir.clone(), io_err)
        })?;

        // ENABLE
        let flat_list = self.flat_list();
        fetch(&flat_list)?;
        let flat_words = filter_five_letter_words(&flat_list.destination)?;
        log::info!("{} five-letter words in the flat list", flat_words.len());

        // SCOWL
        let scowl_zip = self.archive();
        fetch(&scowl_zip)?;
        archive::extract(&scowl_zip.destination, self.extract_dir())?;
        let (archive_words, candidates_found) =
            collect_candidates(&self.wordlist_root(), &self.selection)?;
        log::info!(
            "{} five-letter words across {candidates_found} archive word lists",
            archive_words.len(),
        );

        let flat_list_words = flat_words.len();
        let archive_word_count = archive_words.len();
        let mut combined = flat_words;
        combined.union_with(archive_words);
        output::write_words(&self.output, &combined)?;

        Ok(BuildSummary {
            output: self.output.clone(),
            flat_list_words,
            archive_words: archive_word_count,
            candidates_found,
            total_words: combined.len(),
        })
    }
}

/// Filter and union every selected word list that exists under `root`.
///
/// Missing combinations are skipped. Returns the words and how many candidate
/// files were actually read.
pub fn collect_candidates(
    root: &Path,
    selection: &ScowlSelection,
) -> Result<(WordSet, usize), BuildError> {
    let mut words = WordSet::new();
    let mut found = 0;
    for candidate in selection.candidates(root) {
        if !candidate.path.exists() {
            log::debug!(
                "skipping missing candidate {}/{} ({})",
                candidate.dialect,
                candidate.size,
                candidate.path.display(),
            );
            continue;
        }
        words.union_with(filter_five_letter_words(&candidate.path)?);
        found += 1;
    }
    Ok((words, found))
}

/// What a successful [`WordsBuild::run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// The JSON file that was written.
    pub output: PathBuf,
    /// Unique words contributed by the flat list.
    pub flat_list_words: usize,
    /// Unique words contributed by the archive.
    pub archive_words: usize,
    /// How many dialect/size combinations existed in the archive.
    pub candidates_found: usize,
    /// Words in the output.
    pub total_words: usize,
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Built {} with {} words.",
            self.output.display(),
            self.total_words,
        )
    }
}
