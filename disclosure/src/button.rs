//! The trigger of a disclosure.

use disclosure_dom::{
    AttrValue, Element, EventContext, EventKind, Handler, NodeRef, compose_handlers,
};

use crate::context::DisclosureContext;

/// Builder for the button that toggles a disclosure.
///
/// The rendered element carries `aria-controls` (the panel id),
/// `aria-expanded` and `data-state`. A click cancels the default action,
/// focuses the button and selects the disclosure.
///
/// # Example
///
/// ```
/// use disclosure::{Disclosure, DisclosureButton, DisclosureProps};
///
/// let disclosure = Disclosure::new(DisclosureProps::new().id("menu"));
/// let button = DisclosureButton::new(&disclosure.context())
///     .text("Menu")
///     .build();
///
/// assert_eq!(button.get_attr("aria-controls"), Some("panel--menu"));
/// assert_eq!(button.get_attr("aria-expanded"), Some("false"));
/// assert_eq!(button.get_attr("data-state"), Some("collapsed"));
/// ```
#[derive(Debug, Clone)]
pub struct DisclosureButton {
    context: DisclosureContext,
    tag: String,
    attrs: Vec<(String, AttrValue)>,
    text: Option<String>,
    children: Vec<Element>,
    on_click: Option<Handler>,
    on_mouse_down: Option<Handler>,
    on_pointer_down: Option<Handler>,
    node_ref: Option<NodeRef>,
}

impl DisclosureButton {
    pub fn new(context: &DisclosureContext) -> Self {
        Self {
            context: context.clone(),
            tag: "button".into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            on_click: None,
            on_mouse_down: None,
            on_pointer_down: None,
            node_ref: None,
        }
    }

    /// Render as a different tag.
    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Pass an attribute through to the rendered element.
    ///
    /// Overrides `aria-controls` and `aria-expanded`, but not `data-state`.
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

    /// Click handler, run before the button's own.
    pub fn on_click(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Handler::new(f));
        self
    }

    pub fn on_mouse_down(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_mouse_down = Some(Handler::new(f));
        self
    }

    pub fn on_pointer_down(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_pointer_down = Some(Handler::new(f));
        self
    }

    /// Ref that should also point at the rendered button.
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub fn build(self) -> Element {
        let open = self.context.is_open();
        let own_ref = NodeRef::new();

        let handle_click = {
            let focus_ref = own_ref.clone();
            let on_select = self.context.on_select().clone();
            Handler::new(move |cx| {
                cx.prevent_default();
                cx.focus(&focus_ref);
                on_select.call();
            })
        };

        let mut el = Element::new(self.tag);
        if !self.context.panel_id().is_empty() {
            el = el.attr("aria-controls", self.context.panel_id());
        }
        el = el.attr("aria-expanded", open.to_string());

        for (name, value) in self.attrs {
            el = el.apply(name, value);
        }

        el = el
            .attr("data-state", self.context.data_state().as_str())
            .node_ref(&own_ref)
            .on(EventKind::Click, compose_handlers(self.on_click, handle_click));

        if let Some(forwarded) = &self.node_ref {
            el = el.node_ref(forwarded);
        }
        if let Some(handler) = self.on_mouse_down {
            el = el.on(EventKind::MouseDown, handler);
        }
        if let Some(handler) = self.on_pointer_down {
            el = el.on(EventKind::PointerDown, handler);
        }
        if let Some(text) = self.text {
            el = el.text(text);
        }

        el.children(self.children)
    }
}
