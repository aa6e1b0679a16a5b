use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of class tokens. Adding a present token is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the token was already present.
    pub fn add(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Returns false when the token was absent.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = ClassList::new();
        for token in iter {
            list.add(token.as_ref());
        }
        list
    }
}

/// Class tokens given to `element_create`: one token or a sequence.
///
/// A single string is always one token, even if it contains spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Classes {
    One(String),
    Many(Vec<String>),
}

impl Classes {
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Classes::One(token) => vec![token.as_str()],
            Classes::Many(tokens) => tokens.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Classes::Many(Vec::new())
    }
}

impl From<&str> for Classes {
    fn from(token: &str) -> Self {
        Classes::One(token.to_string())
    }
}

impl From<String> for Classes {
    fn from(token: String) -> Self {
        Classes::One(token)
    }
}

impl From<Vec<String>> for Classes {
    fn from(tokens: Vec<String>) -> Self {
        Classes::Many(tokens)
    }
}

impl From<Vec<&str>> for Classes {
    fn from(tokens: Vec<&str>) -> Self {
        Classes::Many(tokens.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Classes {
    fn from(tokens: [&str; N]) -> Self {
        Classes::Many(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Everything `element_create` may apply to a fresh node besides its tag.
///
/// `action`, `method` and `href` are shorthands for the attributes of the
/// same name. Entries in `attributes` are applied after them and win on
/// a name clash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementOptions {
    pub classes: Classes,
    pub text: String,
    pub action: Option<String>,
    pub method: Option<String>,
    pub href: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl ElementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(mut self, classes: impl Into<Classes>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Attribute pairs in application order: shorthands first, then the
    /// explicit list. Empty shorthands are skipped.
    pub fn resolved_attributes(&self) -> Vec<(&str, &str)> {
        let shorthands: [(&str, &Option<String>); 3] = [
            ("action", &self.action),
            ("method", &self.method),
            ("href", &self.href),
        ];
        shorthands
            .into_iter()
            .filter_map(|(name, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((name, v)),
                _ => None,
            })
            .chain(self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_deduplicates() {
        let mut list = ClassList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert_eq!(list.len(), 1);
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn class_list_displays_space_joined() {
        let list: ClassList = ["btn", "btn-primary", "btn"].into_iter().collect();
        assert_eq!(list.to_string(), "btn btn-primary");
    }

    #[test]
    fn single_string_is_one_token() {
        let classes = Classes::from("abc");
        assert_eq!(classes.tokens(), vec!["abc"]);
    }

    #[test]
    fn classes_deserialize_from_string_or_array() {
        let one: Classes = serde_json::from_str(r#""card""#).unwrap();
        let many: Classes = serde_json::from_str(r#"["card","shadow"]"#).unwrap();
        assert_eq!(one, Classes::One("card".into()));
        assert_eq!(many.tokens(), vec!["card", "shadow"]);
    }

    #[test]
    fn shorthands_precede_explicit_attributes() {
        let opts = ElementOptions::new()
            .href("/home")
            .method("")
            .attribute("href", "/override")
            .attribute("id", "nav");
        assert_eq!(
            opts.resolved_attributes(),
            vec![("href", "/home"), ("href", "/override"), ("id", "nav")]
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: ElementOptions =
            serde_json::from_str(r#"{"classes":"x","attributes":[["role","button"]]}"#).unwrap();
        assert_eq!(opts.text, "");
        assert_eq!(opts.resolved_attributes(), vec![("role", "button")]);
    }
}
