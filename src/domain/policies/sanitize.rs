//! Input sanitization for request parameters and stored urls
//!
//! Every value that reaches a query or the generated menu from outside
//! passes through one of these functions first.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Url schemes a menu entry may point to
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "gopher", "nntp", "feed", "telnet",
    "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

// =============================================================================
// PATTERNS
// =============================================================================

/// `<tag ...>` sequences; an unterminated tag runs to the end of input
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*(?:>|$)").expect("tag pattern"));

/// Percent-encoded octets
static OCTET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("octet pattern"));

/// Control characters that are not whitespace
static CONTROL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cc}&&[^\s]]").expect("control pattern"));

static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("space pattern"));

/// Characters a url may not carry: whitespace, controls and ascii
/// punctuation outside the url-safe set
static URL_JUNK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\p{Cc}]|[\x00-\x7F&&[^0-9A-Za-z\-~+_.?#=!&;,/:%@$|*'()\[\]]]")
        .expect("url junk pattern")
});

/// Scheme of a url that [`Url`] refuses, when the first `:` comes before
/// any path, query or fragment
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:/?#]+):").expect("scheme pattern"));

/// `name.php` links that are already relative to the site root
static PHP_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9\-]+\.php").expect("php file pattern"));

// =============================================================================
// SANITIZERS
// =============================================================================

/// Sanitize a free-text request value.
///
/// Strips markup tags and percent-encoded octets, drops control
/// characters, collapses whitespace runs to a single space and trims.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = TAG_RE.replace_all(input, "");
    let stripped = OCTET_RE.replace_all(&stripped, "");
    let stripped = CONTROL_RE.replace_all(&stripped, "");
    SPACES_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Sanitize a url for use as a menu entry target.
///
/// Returns an empty string when the url uses a scheme outside
/// [`ALLOWED_PROTOCOLS`]. Bare hostnames get an `http://` prefix.
pub fn sanitize_url(input: &str) -> String {
    let cleaned = URL_JUNK_RE.replace_all(input, "").into_owned();
    if cleaned.is_empty() {
        return cleaned;
    }

    if let Some(scheme) = scheme_of(&cleaned) {
        if !ALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
            return String::new();
        }
        return cleaned;
    }

    let relative = cleaned.starts_with(['/', '#', '?']);
    if relative || PHP_FILE_RE.is_match(&cleaned) || cleaned.contains(':') {
        cleaned
    } else {
        format!("http://{}", cleaned)
    }
}

/// Lowercased scheme of an absolute url
fn scheme_of(cleaned: &str) -> Option<String> {
    match Url::parse(cleaned) {
        Ok(url) => Some(url.scheme().to_string()),
        Err(_) => SCHEME_RE
            .captures(cleaned)
            .map(|caps| caps[1].to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_strips_tags_and_whitespace() {
        assert_eq!(
            sanitize_text_field("  <b>About</b>\n\tus  "),
            "About us".to_string()
        );
    }

    #[test]
    fn text_field_keeps_lone_angle_bracket() {
        assert_eq!(sanitize_text_field("a < b"), "a < b");
    }

    #[test]
    fn text_field_drops_unterminated_tag() {
        assert_eq!(sanitize_text_field("title<script"), "title");
    }

    #[test]
    fn text_field_strips_octets() {
        assert_eq!(sanitize_text_field("menu%20order%0A"), "menuorder");
    }

    #[test]
    fn text_field_drops_controls_inside_whitespace_runs() {
        assert_eq!(sanitize_text_field("a \u{1} \u{7f}b\u{0}c"), "a bc");
    }

    #[test]
    fn text_field_tag_spans_lines() {
        assert_eq!(sanitize_text_field("x<a\nhref=\"y\">z</a>"), "xz");
    }

    #[test]
    fn url_allows_known_schemes() {
        assert_eq!(sanitize_url("https://example.com/a?b=c"), "https://example.com/a?b=c");
        assert_eq!(sanitize_url("mailto:me@example.com"), "mailto:me@example.com");
    }

    #[test]
    fn url_rejects_script_scheme() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "");
        assert_eq!(sanitize_url("JaVaScRiPt:alert(1)"), "");
    }

    #[test]
    fn url_rejects_scheme_the_parser_refuses() {
        assert_eq!(sanitize_url("java_script:alert(1)"), "");
    }

    #[test]
    fn url_keeps_allowed_scheme_the_parser_refuses() {
        assert_eq!(sanitize_url("http://[oops/"), "http://[oops/");
    }

    #[test]
    fn url_rejects_host_port_without_scheme() {
        assert_eq!(sanitize_url("localhost:8080"), "");
    }

    #[test]
    fn url_prefixes_bare_hosts() {
        assert_eq!(sanitize_url("example.com"), "http://example.com");
        assert_eq!(sanitize_url("/about"), "/about");
        assert_eq!(sanitize_url("#top"), "#top");
        assert_eq!(sanitize_url("index.php?p=2"), "index.php?p=2");
    }

    #[test]
    fn url_drops_spaces_and_quotes() {
        assert_eq!(sanitize_url(" https://exa mple.com/\"x\" "), "https://example.com/x");
    }

    #[test]
    fn url_keeps_non_ascii_path() {
        assert_eq!(sanitize_url("/über uns"), "/überuns");
    }

    #[test]
    fn empty_url() {
        assert_eq!(sanitize_url("   "), "");
    }
}
