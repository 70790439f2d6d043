//! Redaction of credential-looking text in command output
//!
//! Three key families are recognised, `password`, `secret` and `token`
//! (singular or plural, any case) directly followed by `=` or `:`. The key and
//! the rest of its line are replaced by [`REDACTION_MARKER`].
//!
//! Patterns run one after another over the same string. Because a match eats
//! the remainder of the line, a line holding several keys only ever shows the
//! first family that matched. Spacing tricks (`password = x`) and encodings are
//! not detected.

use std::sync::LazyLock;

use regex::Regex;

pub const REDACTION_MARKER: &str = "[REDACTED]";

static SENSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)passwords?[=:].+",
        r"(?i)secrets?[=:].+",
        r"(?i)tokens?[=:].+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid sensitive pattern"))
    .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSanitizer;

impl OutputSanitizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sanitize(&self, output: &str) -> String {
        if output.is_empty() {
            return String::new();
        }

        SENSITIVE_PATTERNS
            .iter()
            .fold(output.to_string(), |text, pattern| {
                pattern.replace_all(&text, REDACTION_MARKER).into_owned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(text: &str) -> String {
        OutputSanitizer::new().sanitize(text)
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(SENSITIVE_PATTERNS.len(), 3);
    }

    #[test]
    fn test_password_redacted() {
        let out = sanitize("password=secret123");
        assert!(out.contains(REDACTION_MARKER));
        assert!(!out.contains("secret123"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_families_and_case() {
        assert_eq!(sanitize("PASSWORDS: hunter2"), REDACTION_MARKER);
        assert_eq!(sanitize("db_secret=abc"), format!("db_{}", REDACTION_MARKER));
        assert_eq!(sanitize("Token:xyz"), REDACTION_MARKER);
        assert_eq!(sanitize("tokens=a,b"), REDACTION_MARKER);
    }

    #[test]
    fn test_redacts_to_end_of_line_only() {
        let out = sanitize("user=bob password=pw1 extra\nnext line\n");
        assert_eq!(out, format!("user=bob {}\nnext line\n", REDACTION_MARKER));
    }

    #[test]
    fn test_every_line_redacted() {
        let out = sanitize("token=a\nok\nsecret:b\n");
        assert_eq!(out, format!("{m}\nok\n{m}\n", m = REDACTION_MARKER));
    }

    #[test]
    fn test_first_family_consumes_line() {
        // The secret is hidden inside the password redaction
        assert_eq!(sanitize("password=x secret=y"), REDACTION_MARKER);
    }

    #[test]
    fn test_spaced_key_not_detected() {
        assert_eq!(sanitize("password = hunter2"), "password = hunter2");
        assert_eq!(sanitize("token"), "token");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        for text in ["Hello World\n", "", "a: b\nc=d", "\r\n\tindent"] {
            let once = sanitize(text);
            assert_eq!(sanitize(&once), once);
            assert_eq!(once, text);
        }
    }
}
