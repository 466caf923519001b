// Pattern-based extraction from C sources
//
// Extractors work on one file's text at a time. Walking the tree and
// aggregating results is the scanner's job.

pub mod defines;
pub mod variables;

pub use defines::{DefineExtractor, DEFINE_EXTENSIONS, DEFINE_PATTERN};
pub use variables::{
    VariableExtractor, VariableMatch, CHANNEL_VARIABLE_PATTERN, VARIABLE_EXTENSIONS,
};

/// True if `filename` ends with any of `extensions`
pub fn has_extension(filename: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| filename.ends_with(ext))
}
