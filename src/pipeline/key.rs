// src/pipeline/key.rs

//! Deduplication key derivation.
//!
//! Keys are built in two stages: a content digest over the raw fetched
//! bytes, then a composite digest over the cleaned URL followed by the
//! hex text of the content digest. Digesting the content first keeps
//! the URL/content boundary unambiguous in the second stage (the hex
//! digest has fixed width), where a single digest over concatenated
//! raw fields would not.

use sha2::{Digest, Sha256};

use crate::models::KeyMode;
use crate::utils::url::clean_url;

/// Derived identity of one crawl document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentKey {
    /// The key checked against the membership store.
    pub dedupe_key: String,
    /// Normalized URL, recorded on admitted documents.
    pub cleaned_url: String,
    /// Hex digest of the raw content, recorded on admitted documents.
    pub content_hash: String,
}

impl DocumentKey {
    /// Derive the key for a crawl document.
    ///
    /// Depends only on `url`, `raw_content`, and the key mode; metadata
    /// fields never influence the key, so re-crawls of the same page
    /// collide regardless of timestamps or team tags.
    pub fn derive(url: &str, raw_content: &str, mode: KeyMode) -> Self {
        let cleaned_url = clean_url(url);
        let content_hash = content_hash(raw_content);
        let dedupe_key = match mode {
            KeyMode::UrlAndContent => composite_hash(&cleaned_url, &content_hash),
            KeyMode::ContentOnly => content_hash.clone(),
        };
        Self {
            dedupe_key,
            cleaned_url,
            content_hash,
        }
    }
}

/// Hex SHA-256 digest of a document's raw content.
pub fn content_hash(raw_content: &str) -> String {
    hex::encode(Sha256::digest(raw_content.as_bytes()))
}

/// Hex SHA-256 digest over the cleaned URL followed by the content
/// digest's hex text.
pub fn composite_hash(cleaned_url: &str, content_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(cleaned_url.as_bytes());
    hasher.update(content_hash.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn test_content_hash_matches_known_vectors() {
        assert_eq!(content_hash("hello"), HELLO_SHA256);
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = DocumentKey::derive("http://x.com/p", "hello", KeyMode::UrlAndContent);
        let b = DocumentKey::derive("http://x.com/p", "hello", KeyMode::UrlAndContent);
        assert_eq!(a, b);
        assert_eq!(a.cleaned_url, "x.com/p");
        assert_eq!(a.content_hash, HELLO_SHA256);
        assert_eq!(a.dedupe_key, composite_hash("x.com/p", HELLO_SHA256));
    }

    #[test]
    fn test_scheme_variants_share_a_key() {
        let http = DocumentKey::derive("http://x.com/p", "hello", KeyMode::UrlAndContent);
        let https = DocumentKey::derive("https://x.com/p/", "hello", KeyMode::UrlAndContent);
        assert_eq!(http.dedupe_key, https.dedupe_key);
    }

    #[test]
    fn test_key_is_sensitive_to_content_and_url() {
        let base = DocumentKey::derive("http://x.com/p", "hello", KeyMode::UrlAndContent);
        let other_content = DocumentKey::derive("http://x.com/p", "hello!", KeyMode::UrlAndContent);
        let other_url = DocumentKey::derive("http://x.com/q", "hello", KeyMode::UrlAndContent);
        assert_ne!(base.dedupe_key, other_content.dedupe_key);
        assert_ne!(base.dedupe_key, other_url.dedupe_key);
    }

    #[test]
    fn test_content_only_mode_collapses_mirrors() {
        let a = DocumentKey::derive("http://a.example/page", "hello", KeyMode::ContentOnly);
        let b = DocumentKey::derive("http://b.example/mirror", "hello", KeyMode::ContentOnly);
        assert_eq!(a.dedupe_key, b.dedupe_key);
        assert_eq!(a.dedupe_key, HELLO_SHA256);
        // Distinct cleaned URLs are still recorded per document.
        assert_ne!(a.cleaned_url, b.cleaned_url);
    }

    #[test]
    fn test_composite_hash_is_order_sensitive() {
        assert_ne!(composite_hash("ab", "cd"), composite_hash("cd", "ab"));
        // The two inputs are concatenated, not framed: fixed-width hex
        // digests in the second position keep the boundary unambiguous.
        assert_eq!(composite_hash("a", "bcd"), composite_hash("ab", "cd"));
    }
}
