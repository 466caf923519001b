//! Version of the scanned source tree

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs `git describe --tags` in `base`.
///
/// Returns an empty string when git is missing, `base` is not inside a
/// repository, or no tag is reachable.
pub fn describe(base: &Path) -> String {
    let output = match Command::new("git")
        .args(["describe", "--tags"])
        .current_dir(base)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!(error = %e, "Failed to run git describe");
            return String::new();
        }
    };

    if !output.status.success() {
        debug!(status = %output.status, base = %base.display(), "git describe found no version");
        return String::new();
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_describe_outside_repository_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(describe(temp.path()), "");
    }

    #[test]
    fn test_describe_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(describe(&temp.path().join("missing")), "");
    }
}
