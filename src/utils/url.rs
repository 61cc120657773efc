// src/utils/url.rs

//! URL normalization for dedup keys.

/// Clean a document URL down to the normal form used in dedup keys.
///
/// Surrounding whitespace is trimmed, the scheme (everything up to and
/// including the first `"://"`) is removed, and a single trailing `/` is
/// stripped. The `url` field on the document itself is never rewritten;
/// the cleaned form travels in the separate `cleaned_url` field.
///
/// # Examples
/// ```
/// use cdr_dedupe::utils::url::clean_url;
///
/// assert_eq!(clean_url("https://example.com/a/"), "example.com/a");
/// assert_eq!(clean_url("example.com/a"), "example.com/a");
/// ```
pub fn clean_url(url: &str) -> String {
    let url = url.trim();
    let stripped = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_http_and_https_schemes() {
        assert_eq!(clean_url("http://example.com/a"), "example.com/a");
        assert_eq!(clean_url("https://example.com/a"), "example.com/a");
    }

    #[test]
    fn test_schemes_and_trailing_slash_normalize_together() {
        // The pair that must collide for dedup to work across re-crawls.
        assert_eq!(
            clean_url("https://example.com/a/"),
            clean_url("http://example.com/a")
        );
    }

    #[test]
    fn test_schemeless_url_is_kept() {
        assert_eq!(clean_url("example.com/a"), "example.com/a");
    }

    #[test]
    fn test_strips_exactly_one_trailing_slash() {
        assert_eq!(clean_url("example.com/a//"), "example.com/a/");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(clean_url("  https://example.com/a/ \n"), "example.com/a");
    }

    #[test]
    fn test_degenerate_urls() {
        assert_eq!(clean_url("https://"), "");
        assert_eq!(clean_url("/"), "");
    }
}
