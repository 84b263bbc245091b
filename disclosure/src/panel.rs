//! The content region of a disclosure.

use disclosure_dom::{AttrValue, Element, NodeRef};

use crate::context::DisclosureContext;

/// Builder for the panel shown and hidden by a disclosure.
///
/// The rendered element has `id` set to the panel id, the boolean `hidden`
/// attribute while closed, `data-state`, and `tabindex="-1"` so it never
/// takes part in Tab navigation.
#[derive(Debug, Clone)]
pub struct DisclosurePanel {
    context: DisclosureContext,
    tag: String,
    attrs: Vec<(String, AttrValue)>,
    text: Option<String>,
    children: Vec<Element>,
    node_ref: Option<NodeRef>,
}

impl DisclosurePanel {
    pub fn new(context: &DisclosureContext) -> Self {
        Self {
            context: context.clone(),
            tag: "div".into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            node_ref: None,
        }
    }

    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Pass an attribute through to the rendered element.
    ///
    /// May override `hidden`; `id`, `data-state` and `tabindex` always win.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
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

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub fn build(self) -> Element {
        let mut el = Element::new(self.tag).flag("hidden", !self.context.is_open());

        for (name, value) in self.attrs {
            el = el.apply(name, value);
        }

        el = el.attr("data-state", self.context.data_state().as_str());
        if !self.context.panel_id().is_empty() {
            el = el.attr("id", self.context.panel_id());
        }
        el = el.attr("tabindex", "-1");

        if let Some(node_ref) = &self.node_ref {
            el = el.node_ref(node_ref);
        }
        if let Some(text) = self.text {
            el = el.text(text);
        }

        el.children(self.children)
    }
}
