//! Channel variable extractor - finds variable names passed to the channel variable API

use super::has_extension;
use regex::Regex;

/// Matches `switch_channel_get_variable*`, `switch_channel_set_variable*` and
/// `switch_channel_var_true/false` calls, capturing the second argument.
pub const CHANNEL_VARIABLE_PATTERN: &str = r#"(switch_channel_var_(true|false)|switch_channel_(get|set)_variable\w*)\(\w+[-*>\w]*,\s*(?P<variable>"*\w+"*)"#;

/// Only implementation files are searched for call sites
pub const VARIABLE_EXTENSIONS: &[&str] = &[".c", ".cpp"];

/// A single call-site match, before constant substitution or quote stripping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMatch {
    /// Directory of the file relative to the scan base, `/`-separated
    pub path: String,
    pub filename: String,
    /// 1-based line number
    pub line: usize,
    /// Token as written: a string literal with quotes or a macro name
    pub raw: String,
}

impl VariableMatch {
    pub fn is_literal(&self) -> bool {
        self.raw.contains('"')
    }

    pub fn location(&self) -> String {
        if self.path.is_empty() {
            format!("{}:{}", self.filename, self.line)
        } else {
            format!("{}/{}:{}", self.path, self.filename, self.line)
        }
    }
}

pub struct VariableExtractor {
    pattern: Regex,
}

impl VariableExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(CHANNEL_VARIABLE_PATTERN).expect("valid regex"),
        }
    }

    pub fn handles(&self, filename: &str) -> bool {
        has_extension(filename, VARIABLE_EXTENSIONS)
    }

    /// Returns at most one match per line, in line order
    pub fn extract(&self, content: &str, path: &str, filename: &str) -> Vec<VariableMatch> {
        content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let cap = self.pattern.captures(line)?;
                let token = cap.name("variable")?.as_str();
                let raw = token
                    .split(')')
                    .next()
                    .and_then(|t| t.split_whitespace().next())?;

                Some(VariableMatch {
                    path: path.to_string(),
                    filename: filename.to_string(),
                    line: i + 1,
                    raw: raw.to_string(),
                })
            })
            .collect()
    }
}

impl Default for VariableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(content: &str) -> Vec<String> {
        VariableExtractor::new()
            .extract(content, "src", "switch_core.c")
            .into_iter()
            .map(|m| m.raw)
            .collect()
    }

    #[test]
    fn test_get_variable_literal() {
        let found = raws(r#"const char *cause = switch_channel_get_variable(channel, "hangup_cause");"#);
        assert_eq!(found, vec![r#""hangup_cause""#]);
    }

    #[test]
    fn test_set_variable_variants() {
        let content = r#"
switch_channel_set_variable(channel, "bridge_to", uuid);
switch_channel_set_variable_printf(channel, "sip_hangup_phrase", "%s", phrase);
switch_channel_get_variable_dup(channel, "api_result", SWITCH_TRUE, -1);
"#;
        assert_eq!(
            raws(content),
            vec![r#""bridge_to""#, r#""sip_hangup_phrase""#, r#""api_result""#]
        );
    }

    #[test]
    fn test_var_true_false() {
        let content = r#"
if (switch_channel_var_true(channel, "hangup_after_bridge")) {
} else if (switch_channel_var_false(channel, "continue_on_fail")) {
"#;
        assert_eq!(
            raws(content),
            vec![r#""hangup_after_bridge""#, r#""continue_on_fail""#]
        );
    }

    #[test]
    fn test_struct_member_channel_argument() {
        let found = raws(r#"switch_channel_get_variable(session->channel, "rtp_use_codec_name")"#);
        assert_eq!(found, vec![r#""rtp_use_codec_name""#]);

        let found = raws(r#"switch_channel_get_variable(tech_pvt->channel, "sip_from_user")"#);
        assert_eq!(found, vec![r#""sip_from_user""#]);
    }

    #[test]
    fn test_macro_argument() {
        let found = raws("switch_channel_get_variable(channel, SWITCH_CURRENT_APPLICATION_VARIABLE);");
        assert_eq!(found, vec!["SWITCH_CURRENT_APPLICATION_VARIABLE"]);
    }

    #[test]
    fn test_non_word_literal_is_truncated() {
        // Only the leading word of a literal like "foo-bar" is captured
        let found = raws(r#"switch_channel_get_variable(channel, "foo-bar")"#);
        assert_eq!(found, vec![r#""foo"#]);
    }

    #[test]
    fn test_first_match_per_line_only() {
        let content = r#"a = switch_channel_get_variable(channel, "one"); b = switch_channel_get_variable(channel, "two");"#;
        assert_eq!(raws(content), vec![r#""one""#]);
    }

    #[test]
    fn test_unrelated_calls_ignored() {
        let content = r#"
switch_event_add_header(event, SWITCH_STACK_BOTTOM, "Unique-ID", "%s", uuid);
switch_channel_get_name(channel);
"#;
        assert!(raws(content).is_empty());
    }

    #[test]
    fn test_line_numbers_and_location() {
        let content = "\n\nswitch_channel_get_variable(channel, \"x\");\n";
        let found = VariableExtractor::new().extract(content, "src/mod", "mod_a.c");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 3);
        assert_eq!(found[0].location(), "src/mod/mod_a.c:3");
        assert!(found[0].is_literal());

        let at_root = VariableMatch {
            path: String::new(),
            filename: "a.c".to_string(),
            line: 7,
            raw: "X".to_string(),
        };
        assert_eq!(at_root.location(), "a.c:7");
        assert!(!at_root.is_literal());
    }

    #[test]
    fn test_handles() {
        let extractor = VariableExtractor::new();
        assert!(extractor.handles("switch_ivr.c"));
        assert!(extractor.handles("mod_cv.cpp"));
        assert!(!extractor.handles("switch_types.h"));
        assert!(!extractor.handles("switch.hpp"));
    }
}
