#![doc = include_str!("../README.md")]

mod archive;
pub mod errors;
mod fetch;
mod filter;
mod output;
mod pipeline;
pub mod sources;
mod word;

pub use archive::extract;
pub use errors::BuildError;
pub use fetch::fetch;
pub use filter::{filter_five_letter_text, filter_five_letter_words};
pub use output::{to_json, write_words};
pub use pipeline::{BuildSummary, WordsBuild, collect_candidates};
pub use sources::{Candidate, ScowlSelection, Source};
pub use word::{WORD_LENGTH, Word, WordSet, WordSetIter};
