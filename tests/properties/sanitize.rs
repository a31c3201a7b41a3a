//! Property tests for request and output sanitization.

use proptest::prelude::*;

use nestedpages::domain::policies::{escape_html, sanitize_text_field, sanitize_url};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitized text is trimmed, single-spaced and free of control characters.
    #[test]
    fn property_text_field_normalized(input in "(?s).{0,128}") {
        let out = sanitize_text_field(&input);

        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| c.is_control()));
        prop_assert!(!out.chars().any(|c| c.is_whitespace() && c != ' '));
    }

    /// PROPERTY: escaped markup contains no raw special characters.
    #[test]
    fn property_escape_html_has_no_raw_specials(input in "(?s).{0,128}") {
        let out = escape_html(&input);

        prop_assert!(!out.contains(['<', '>', '"', '\'']));
        let without_entities = out
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&#039;", "");
        prop_assert!(!without_entities.contains('&'));
    }

    /// PROPERTY: sanitized urls never carry whitespace or a script scheme.
    #[test]
    fn property_url_never_scriptable(
        scheme in prop::sample::select(vec!["javascript", "JavaScript", "java script", "data", "vbscript", "https", ""]),
        rest in "(?s).{0,48}",
    ) {
        let input = format!("{}:{}", scheme, rest);
        let out = sanitize_url(&input);

        prop_assert!(!out.chars().any(char::is_whitespace));
        let lower = out.to_ascii_lowercase();
        prop_assert!(!lower.starts_with("javascript:"));
        prop_assert!(!lower.starts_with("vbscript:"));
        prop_assert!(!lower.starts_with("data:"));
    }
}
