//! Boundaries to the filesystem and the fuzzy scorer.

pub mod enumerator;
pub mod matcher;

pub use enumerator::{FileEnumerator, FsFileEnumerator};
pub use matcher::{FuzzyMatcher, SkimFuzzyMatcher};
