//! Cookie write-string serialization and lookup.
//!
//! Every string produced here ends with [`COOKIE_FLAGS`]. How a single
//! `name=value` pair is rendered is delegated to a [`CookieEncoder`], so a
//! stricter encoding can replace the raw one without touching callers.

/// Suffix appended to every cookie write. Not configurable.
pub const COOKIE_FLAGS: &str = "path=/; Secure; SameSite=None;";

/// Separator between entries, both when writing and when reading the store.
pub const ENTRY_SEPARATOR: &str = "; ";

/// Renders one `name=value` pair of a cookie write string and reverses
/// that rendering when the store is read back.
pub trait CookieEncoder: Send + Sync {
    fn encode_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn encode_value(&self, value: &str) -> String {
        value.to_string()
    }

    fn decode_value(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn encode(&self, name: &str, value: &str) -> String {
        format!("{}={}", self.encode_name(name), self.encode_value(value))
    }
}

/// Plain concatenation. `;` and `=` inside names or values are passed
/// through and may corrupt the resulting string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawEncoder;

impl CookieEncoder for RawEncoder {}

/// Percent-encodes both name and value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentEncoder;

impl CookieEncoder for PercentEncoder {
    fn encode_name(&self, name: &str) -> String {
        urlencoding::encode(name).into_owned()
    }

    fn encode_value(&self, value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Values that are not valid percent-encoded UTF-8 come back as stored.
    fn decode_value(&self, raw: &str) -> String {
        urlencoding::decode(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string())
    }
}

/// Builds `k1=v1; k2=v2; path=/; Secure; SameSite=None;` in iteration order.
/// No entries yields the flag suffix alone.
pub fn serialize_cookies<E, I, K, V>(encoder: &E, entries: I) -> String
where
    E: CookieEncoder + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (name, value) in entries {
        out.push_str(&encoder.encode(name.as_ref(), value.as_ref()));
        out.push_str(ENTRY_SEPARATOR);
    }
    out.push_str(COOKIE_FLAGS);
    out
}

/// First entry of `cookies` whose name is `name`; returns everything after
/// the first `=` of that entry.
pub fn find_cookie_value(cookies: &str, name: &str) -> Option<String> {
    lookup_cookie(&RawEncoder, cookies, name)
}

/// Like [`find_cookie_value`], with the name encoded and the value decoded
/// the way `encoder` wrote them.
pub fn lookup_cookie<E>(encoder: &E, cookies: &str, name: &str) -> Option<String>
where
    E: CookieEncoder + ?Sized,
{
    let prefix = format!("{}=", encoder.encode_name(name));
    cookies
        .split(ENTRY_SEPARATOR)
        .find(|row| row.starts_with(&prefix))
        .map(|row| encoder.decode_value(&row[prefix.len()..]))
}
