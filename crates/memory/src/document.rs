use async_trait::async_trait;
use pagekit_core::{ClassList, Document, UtilError};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug)]
struct ElementState {
    tag: String,
    classes: ClassList,
    text: String,
    attributes: Vec<(String, String)>,
}

/// Shared handle to an element created by [`MemoryDocument`]. Clones point
/// at the same element.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    inner: Arc<Mutex<ElementState>>,
}

impl MemoryElement {
    pub async fn tag(&self) -> String {
        self.inner.lock().await.tag.clone()
    }

    pub async fn class_list(&self) -> ClassList {
        self.inner.lock().await.classes.clone()
    }

    pub async fn text(&self) -> String {
        self.inner.lock().await.text.clone()
    }

    /// `class` reflects the class list, like the DOM attribute does.
    pub async fn attribute(&self, name: &str) -> Option<String> {
        let state = self.inner.lock().await;
        let name = name.to_ascii_lowercase();
        if name == "class" {
            return (!state.classes.is_empty()).then(|| state.classes.to_string());
        }
        state
            .attributes
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.clone())
    }

    /// Attributes other than `class`, in the order they were first set.
    pub async fn attributes(&self) -> Vec<(String, String)> {
        self.inner.lock().await.attributes.clone()
    }

    /// Outer HTML of the element with escaped text and attribute values.
    pub async fn to_html(&self) -> String {
        let state = self.inner.lock().await;
        let mut html = format!("<{}", state.tag);
        if !state.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape_attr(&state.classes.to_string())));
        }
        for (name, value) in &state.attributes {
            html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        html.push('>');
        if VOID_ELEMENTS.contains(&state.tag.as_str()) {
            return html;
        }
        html.push_str(&escape_text(&state.text));
        html.push_str(&format!("</{}>", state.tag));
        html
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn check_tag(tag: &str) -> Result<(), UtilError> {
    let valid = tag
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && !tag.chars().any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\''));
    if valid {
        Ok(())
    } else {
        Err(UtilError::invalid_input(format!("Invalid tag name: {:?}", tag))
            .with_context(json!({ "tag": tag })))
    }
}

fn check_token(token: &str) -> Result<(), UtilError> {
    if token.is_empty() {
        return Err(UtilError::invalid_input("Class token must not be empty"));
    }
    if token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(UtilError::invalid_input(format!(
            "Class token contains whitespace: {:?}",
            token
        ))
        .with_context(json!({ "token": token })));
    }
    Ok(())
}

fn check_attribute_name(name: &str) -> Result<(), UtilError> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '='));
    if invalid {
        Err(UtilError::invalid_input(format!("Invalid attribute name: {:?}", name))
            .with_context(json!({ "attribute": name })))
    } else {
        Ok(())
    }
}

/// Detached-element document. Created elements are owned by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryDocument;

impl MemoryDocument {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Document for MemoryDocument {
    type Node = MemoryElement;

    async fn create_element(&self, tag: &str) -> Result<MemoryElement, UtilError> {
        check_tag(tag)?;
        Ok(MemoryElement {
            inner: Arc::new(Mutex::new(ElementState {
                tag: tag.to_ascii_lowercase(),
                classes: ClassList::new(),
                text: String::new(),
                attributes: Vec::new(),
            })),
        })
    }

    async fn set_attribute(
        &self,
        node: &MemoryElement,
        name: &str,
        value: &str,
    ) -> Result<(), UtilError> {
        check_attribute_name(name)?;
        let name = name.to_ascii_lowercase();
        let mut state = node.inner.lock().await;
        if name == "class" {
            state.classes = value.split_ascii_whitespace().collect();
            return Ok(());
        }
        match state.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => state.attributes.push((name, value.to_string())),
        }
        Ok(())
    }

    async fn set_text(&self, node: &MemoryElement, text: &str) -> Result<(), UtilError> {
        node.inner.lock().await.text = text.to_string();
        Ok(())
    }

    async fn add_class(&self, node: &MemoryElement, token: &str) -> Result<(), UtilError> {
        check_token(token)?;
        node.inner.lock().await.classes.add(token);
        Ok(())
    }

    async fn remove_class(&self, node: &MemoryElement, token: &str) -> Result<(), UtilError> {
        check_token(token)?;
        node.inner.lock().await.classes.remove(token);
        Ok(())
    }

    async fn has_class(&self, node: &MemoryElement, token: &str) -> Result<bool, UtilError> {
        Ok(node.inner.lock().await.classes.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::ErrorCategory;

    #[tokio::test]
    async fn tag_is_lowercased() {
        let el = MemoryDocument.create_element("DIV").await.unwrap();
        assert_eq!(el.tag().await, "div");
    }

    #[tokio::test]
    async fn rejects_bad_tag_names() {
        for tag in ["", "1div", "di v", "<p>"] {
            let err = MemoryDocument.create_element(tag).await.unwrap_err();
            assert_eq!(err.category, ErrorCategory::InvalidInput, "tag {:?}", tag);
        }
    }

    #[tokio::test]
    async fn class_tokens_are_validated() {
        let el = MemoryDocument.create_element("p").await.unwrap();
        assert!(MemoryDocument.add_class(&el, "").await.is_err());
        assert!(MemoryDocument.add_class(&el, "a b").await.is_err());
        assert!(MemoryDocument.add_class(&el, "a-b").await.is_ok());
    }

    #[tokio::test]
    async fn class_attribute_replaces_class_list() {
        let doc = MemoryDocument;
        let el = doc.create_element("p").await.unwrap();
        doc.add_class(&el, "old").await.unwrap();
        doc.set_attribute(&el, "CLASS", "x  y x").await.unwrap();
        assert_eq!(el.attribute("class").await.as_deref(), Some("x y"));
        assert!(el.attributes().await.is_empty());
    }

    #[tokio::test]
    async fn attribute_rewrite_keeps_position() {
        let doc = MemoryDocument;
        let el = doc.create_element("a").await.unwrap();
        doc.set_attribute(&el, "href", "/a").await.unwrap();
        doc.set_attribute(&el, "id", "x").await.unwrap();
        doc.set_attribute(&el, "HREF", "/b").await.unwrap();
        assert_eq!(
            el.attributes().await,
            vec![("href".to_string(), "/b".to_string()), ("id".to_string(), "x".to_string())]
        );
        let err = doc.set_attribute(&el, "on click", "x").await.unwrap_err();
        assert_eq!(err.context["attribute"], "on click");
    }

    #[tokio::test]
    async fn renders_escaped_html() {
        let doc = MemoryDocument;
        let el = doc.create_element("a").await.unwrap();
        doc.add_class(&el, "link").await.unwrap();
        doc.set_attribute(&el, "title", "say \"hi\"").await.unwrap();
        doc.set_text(&el, "1 < 2 & 3").await.unwrap();
        assert_eq!(
            el.to_html().await,
            r#"<a class="link" title="say &quot;hi&quot;">1 &lt; 2 &amp; 3</a>"#
        );

        let input = doc.create_element("input").await.unwrap();
        doc.set_attribute(&input, "type", "text").await.unwrap();
        assert_eq!(input.to_html().await, r#"<input type="text">"#);
    }
}
