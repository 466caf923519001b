//! Preprocessor constant extractor

use super::has_extension;
use regex::Regex;

pub const DEFINE_PATTERN: &str = r"#define (?P<const>.+) (?P<val>.+)";

/// Constants are collected from headers as well as implementation files
pub const DEFINE_EXTENSIONS: &[&str] = &[".c", ".h", ".cpp", ".hpp"];

pub struct DefineExtractor {
    pattern: Regex,
}

impl DefineExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DEFINE_PATTERN).expect("valid regex"),
        }
    }

    pub fn handles(&self, filename: &str) -> bool {
        has_extension(filename, DEFINE_EXTENSIONS)
    }

    /// Returns `(name, value)` pairs in file order.
    ///
    /// Both groups are greedy, so for `#define A B C` the split falls on the
    /// last space: `("A B", "C")`.
    pub fn extract(&self, content: &str) -> Vec<(String, String)> {
        content
            .lines()
            .filter_map(|line| {
                let cap = self.pattern.captures(line)?;
                let name = cap.name("const")?.as_str().to_string();
                let value = cap.name("val")?.as_str().to_string();
                Some((name, value))
            })
            .collect()
    }
}

impl Default for DefineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
