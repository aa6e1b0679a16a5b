//! In-memory stand-in for `document.cookie`.
//!
//! A write string is read the way a browser reads an assignment: the first
//! `;`-separated segment is the `name=value` pair, everything after it is an
//! attribute. Unknown attributes (including extra `k=v` pairs) are ignored.

use async_trait::async_trait;
use pagekit_core::cookie::ENTRY_SEPARATOR;
use pagekit_core::{CookieStore, UtilError};
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// One stored cookie with the attributes that were recognized at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub secure: bool,
    pub same_site: Option<String>,
}

impl StoredCookie {
    fn render(&self) -> String {
        if self.name.is_empty() {
            self.value.clone()
        } else {
            format!("{}={}", self.name, self.value)
        }
    }
}

/// Cookies keyed by name and path, kept in insertion order. Rewriting an
/// existing key replaces its value in place.
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    entries: Mutex<Vec<StoredCookie>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored cookie.
    pub async fn entries(&self) -> Vec<StoredCookie> {
        self.entries.lock().await.clone()
    }
}

/// `None` for an assignment with an empty pair segment.
fn parse_assignment(cookie: &str) -> Option<(StoredCookie, bool)> {
    let mut segments = cookie.split(';');
    let pair = segments.next()?.trim();
    if pair.is_empty() {
        return None;
    }

    let (name, value) = match pair.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => ("", pair),
    };

    let mut parsed = StoredCookie {
        name: name.to_string(),
        value: value.to_string(),
        path: None,
        secure: false,
        same_site: None,
    };
    let mut expired = false;

    for attr in segments.map(str::trim).filter(|s| !s.is_empty()) {
        let (key, val) = match attr.split_once('=') {
            Some((k, v)) => (k.trim(), Some(v.trim())),
            None => (attr, None),
        };
        match key.to_ascii_lowercase().as_str() {
            "path" => parsed.path = val.map(str::to_string),
            "secure" => parsed.secure = true,
            "samesite" => parsed.same_site = val.map(str::to_string),
            "max-age" => {
                expired = val
                    .and_then(|v| v.parse::<i64>().ok())
                    .is_some_and(|secs| secs <= 0);
            }
            other => trace!(attribute = other, "ignoring cookie attribute"),
        }
    }

    Some((parsed, expired))
}

#[async_trait]
impl CookieStore for MemoryCookieStore {
    async fn read(&self) -> Result<String, UtilError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .map(StoredCookie::render)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR))
    }

    async fn write(&self, cookie: &str) -> Result<(), UtilError> {
        let Some((parsed, expired)) = parse_assignment(cookie) else {
            debug!("ignoring cookie write without a name/value pair");
            return Ok(());
        };

        let mut entries = self.entries.lock().await;
        let existing = entries
            .iter()
            .position(|c| c.name == parsed.name && c.path == parsed.path);

        match (existing, expired) {
            (Some(idx), true) => {
                entries.remove(idx);
            }
            (None, true) => {}
            (Some(idx), false) => entries[idx] = parsed,
            (None, false) => entries.push(parsed),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_flags() {
        let store = MemoryCookieStore::new();
        store
            .write("theme=dark; path=/; Secure; SameSite=None;")
            .await
            .unwrap();
        let entries = store.entries().await;
        assert_eq!(
            entries,
            vec![StoredCookie {
                name: "theme".into(),
                value: "dark".into(),
                path: Some("/".into()),
                secure: true,
                same_site: Some("None".into()),
            }]
        );
        assert_eq!(store.read().await.unwrap(), "theme=dark");
    }

    #[tokio::test]
    async fn last_write_wins_in_place() {
        let store = MemoryCookieStore::new();
        store.write("a=1; path=/").await.unwrap();
        store.write("b=2; path=/").await.unwrap();
        store.write("a=3; path=/").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "a=3; b=2");
    }

    #[tokio::test]
    async fn same_name_different_path_is_a_second_entry() {
        let store = MemoryCookieStore::new();
        store.write("a=1; path=/").await.unwrap();
        store.write("a=2; path=/docs").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "a=1; a=2");
    }

    #[tokio::test]
    async fn only_first_pair_of_a_multi_assignment_is_stored() {
        let store = MemoryCookieStore::new();
        store
            .write("a=1; b=2; path=/; Secure; SameSite=None;")
            .await
            .unwrap();
        assert_eq!(store.read().await.unwrap(), "a=1");
    }

    #[tokio::test]
    async fn flags_only_write_stores_path_pair() {
        let store = MemoryCookieStore::new();
        store.write("path=/; Secure; SameSite=None;").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "path=/");
    }

    #[tokio::test]
    async fn nameless_cookie_renders_bare_value() {
        let store = MemoryCookieStore::new();
        store.write("justvalue; path=/").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "justvalue");
        store.write("").await.unwrap();
        store.write("; path=/").await.unwrap();
        assert_eq!(store.entries().await.len(), 1);
    }

    #[tokio::test]
    async fn pair_whitespace_is_trimmed() {
        let store = MemoryCookieStore::new();
        store.write(" k =  padded ; path=/").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "k=padded");
    }

    #[tokio::test]
    async fn non_positive_max_age_deletes() {
        let store = MemoryCookieStore::new();
        store.write("a=1; path=/").await.unwrap();
        store.write("a=; path=/; max-age=0").await.unwrap();
        assert_eq!(store.read().await.unwrap(), "");
    }
}
