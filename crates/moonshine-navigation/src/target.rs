//! Navigation target normalization

/// Prefix added to input without a recognized scheme
pub const DEFAULT_SCHEME: &str = "https://";

/// Prefixes passed through untouched
pub const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://", "file://", "about:", "data:"];

/// Turn address field text into an absolute address.
///
/// Returns `None` for blank input. Anything else is accepted; a malformed
/// address is left for the engine to reject.
pub fn normalize_target(raw: &str) -> Option<String> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    if has_recognized_scheme(input) {
        Some(input.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_SCHEME, input))
    }
}

fn has_recognized_scheme(input: &str) -> bool {
    RECOGNIZED_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(
            normalize_target("example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_target("localhost:8080/path").as_deref(),
            Some("https://localhost:8080/path")
        );
    }

    #[test]
    fn test_schemed_input_unchanged() {
        assert_eq!(
            normalize_target("https://example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_target("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            normalize_target("HTTPS://Example.com").as_deref(),
            Some("HTTPS://Example.com")
        );
        assert_eq!(
            normalize_target("about:blank").as_deref(),
            Some("about:blank")
        );
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_target("test.org").unwrap();
        assert_eq!(normalize_target(&once), Some(once));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(
            normalize_target("  example.com \n").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_target(""), None);
        assert_eq!(normalize_target("   "), None);
    }

    #[test]
    fn test_no_further_validation() {
        // Handed to the engine as-is
        assert_eq!(
            normalize_target("not a url").as_deref(),
            Some("https://not a url")
        );
        assert_eq!(
            normalize_target("httpfoo").as_deref(),
            Some("https://httpfoo")
        );
    }
}
