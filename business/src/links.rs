//! URL detection inside decoded payloads.

use std::sync::LazyLock;

use regex::Regex;

// Three alternatives, tried in order: explicit scheme, `www.` hosts, and
// bare domains with a known ending. Matching ignores case; QR alphanumeric
// payloads are upper-cased. Quotes terminate a match so URLs pasted inside
// JSON or HTML attributes come out clean.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:https?://[^\s'"]+)|(?:www\.[^\s'"]+)|(?:[a-z0-9\-.]+\.(?:com|net|org|io|gov|cn|xyz|top|info|biz|site|tech|me)(?:/[^\s'"]*)?)"#,
    )
    .unwrap()
});

/// First URL-looking substring of `text`, with `http://` prefixed onto
/// matches that carry no scheme so the OS opener accepts them.
pub fn extract_first(text: &str) -> Option<String> {
    let found = URL_PATTERN.find(text)?.as_str();
    if starts_with_scheme(found) {
        Some(found.to_owned())
    } else {
        Some(format!("http://{found}"))
    }
}

// Ignores case, like the pattern itself.
fn starts_with_scheme(url: &str) -> bool {
    ["http://", "https://"].into_iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
