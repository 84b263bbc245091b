use std::collections::BTreeMap;

use crate::event::{EventKind, Handler};
use crate::node_ref::{NodeHandle, NodeRef};

/// Value for a pass-through attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute: present when true, removed when false.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A node of the element tree.
///
/// Boolean attributes are stored with an empty value.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub handlers: Vec<(EventKind, Handler)>,
    pub refs: Vec<NodeRef>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set or remove a boolean attribute.
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.attrs.insert(name, String::new());
        } else {
            self.attrs.remove(&name);
        }
        self
    }

    pub fn apply(self, name: impl Into<String>, value: AttrValue) -> Self {
        match value {
            AttrValue::Text(text) => self.attr(name, text),
            AttrValue::Flag(on) => self.flag(name, on),
        }
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.push((kind, handler));
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.refs.push(node_ref.clone());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Effective tab index: the `tabindex` attribute if it parses, otherwise
    /// 0 for natively focusable tags.
    pub fn tab_index(&self) -> Option<i32> {
        if let Some(index) = self.get_attr("tabindex").and_then(|v| v.trim().parse().ok()) {
            return Some(index);
        }
        match self.tag.as_str() {
            "button" | "input" | "select" | "textarea" => Some(0),
            "a" if self.has_attr("href") => Some(0),
            _ => None,
        }
    }

    /// Whether the element can receive focus at all (programmatically).
    pub fn is_focusable(&self) -> bool {
        self.tab_index().is_some() && !self.has_attr("disabled")
    }

    /// Whether the element takes part in sequential (Tab) navigation.
    pub fn is_tabbable(&self) -> bool {
        self.is_focusable() && self.tab_index().is_some_and(|i| i >= 0)
    }

    pub fn handlers_for(&self, kind: EventKind) -> impl Iterator<Item = &Handler> {
        self.handlers
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, h)| h)
    }

    /// Find a descendant (or self) by handle relative to this element.
    pub fn find(&self, handle: &NodeHandle) -> Option<&Element> {
        handle
            .path()
            .iter()
            .try_fold(self, |el, &index| el.children.get(index))
    }

    /// All nodes in document order, paired with their handles.
    pub fn descendants(&self) -> Vec<(NodeHandle, &Element)> {
        let mut out = vec![(NodeHandle::root(), self)];
        collect(self, &NodeHandle::root(), &mut out);
        out
    }
}

fn collect<'a>(el: &'a Element, handle: &NodeHandle, out: &mut Vec<(NodeHandle, &'a Element)>) {
    for (i, child) in el.children.iter().enumerate() {
        let child_handle = handle.child(i);
        out.push((child_handle.clone(), child));
        collect(child, &child_handle, out);
    }
}
