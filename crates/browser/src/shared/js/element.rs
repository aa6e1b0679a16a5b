//! Page-side halves of the document operations.
//!
//! Created elements live in `window.__pagekitNodes`, keyed by the id the
//! Rust side generated, until released. Every snippet answers with
//! `{ success, value?, error?, missing? }`.

pub const CREATE_ELEMENT: &str = r#"
(id, tag) => {
    const nodes = (window.__pagekitNodes = window.__pagekitNodes || new Map());
    try {
        const el = document.createElement(tag);
        nodes.set(id, el);
        return { success: true, value: el.localName };
    } catch (e) {
        return { success: false, error: e.name + ': ' + e.message };
    }
}
"#;

pub const SET_ATTRIBUTE: &str = r#"
(id, name, value) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    try {
        el.setAttribute(name, value);
        return { success: true };
    } catch (e) {
        return { success: false, error: e.name + ': ' + e.message };
    }
}
"#;

pub const SET_TEXT: &str = r#"
(id, text) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    el.innerText = text;
    return { success: true };
}
"#;

pub const ADD_CLASS: &str = r#"
(id, token) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    try {
        el.classList.add(token);
        return { success: true };
    } catch (e) {
        return { success: false, error: e.name + ': ' + e.message };
    }
}
"#;

pub const REMOVE_CLASS: &str = r#"
(id, token) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    try {
        el.classList.remove(token);
        return { success: true };
    } catch (e) {
        return { success: false, error: e.name + ': ' + e.message };
    }
}
"#;

pub const HAS_CLASS: &str = r#"
(id, token) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    return { success: true, value: el.classList.contains(token) };
}
"#;

pub const APPEND_TO: &str = r#"
(id, selector) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    const parent = document.querySelector(selector);
    if (!parent) return { success: false, error: 'No element matches ' + selector };
    parent.appendChild(el);
    return { success: true };
}
"#;

pub const OUTER_HTML: &str = r#"
(id) => {
    const el = window.__pagekitNodes && window.__pagekitNodes.get(id);
    if (!el) return { success: false, missing: true, error: 'Element not found' };
    return { success: true, value: el.outerHTML };
}
"#;

pub const RELEASE: &str = r#"
(id) => {
    const nodes = window.__pagekitNodes;
    return { success: true, value: !!nodes && nodes.delete(id) };
}
"#;
