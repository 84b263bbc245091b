use crate::element::Element;
use crate::error::DomError;
use crate::event::{Event, EventContext, EventKind, Handler, Key};
use crate::node_ref::NodeHandle;

type RenderFn = Box<dyn FnMut() -> Element>;

/// A mounted element tree.
///
/// The document owns the render function of its root. After every dispatched
/// event the tree is rendered again, refs are re-attached and focus is kept
/// on the same handle if that node is still focusable.
pub struct Document {
    render: RenderFn,
    root: Element,
    focused: Option<NodeHandle>,
    renders: usize,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("focused", &self.focused)
            .field("renders", &self.renders)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Render the tree for the first time and mount it.
    pub fn mount(render: impl FnMut() -> Element + 'static) -> Self {
        let mut doc = Self {
            render: Box::new(render),
            root: Element::default(),
            focused: None,
            renders: 0,
        };
        doc.rerender();
        doc
    }

    /// Render the tree again and re-attach refs.
    pub fn rerender(&mut self) {
        let root = (self.render)();
        for (_, el) in self.root.descendants() {
            for node_ref in &el.refs {
                node_ref.detach();
            }
        }
        for (handle, el) in root.descendants() {
            for node_ref in &el.refs {
                node_ref.attach(handle.clone());
            }
        }
        self.root = root;
        self.renders += 1;

        if let Some(focused) = &self.focused
            && !self.root.find(focused).is_some_and(Element::is_focusable)
        {
            log::debug!("Focused node {focused} is gone after render, clearing focus");
            self.focused = None;
        }
        log::debug!("Rendered document (render #{})", self.renders);
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Number of times the tree has been rendered, including the mount.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn get(&self, handle: &NodeHandle) -> Result<&Element, DomError> {
        self.root
            .find(handle)
            .ok_or_else(|| DomError::NodeNotFound(handle.clone()))
    }

    pub fn focused(&self) -> Option<&NodeHandle> {
        self.focused.as_ref()
    }

    /// Programmatically focus a node.
    pub fn focus(&mut self, handle: &NodeHandle) -> Result<(), DomError> {
        let el = self.get(handle)?;
        if !el.is_focusable() {
            return Err(DomError::NotFocusable(handle.clone()));
        }
        if self.focused.as_ref() != Some(handle) {
            log::debug!("Focus moved to {handle}");
            self.focused = Some(handle.clone());
        }
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Simulate a pointer click on a node.
    ///
    /// Fires `PointerDown`, `MouseDown` and `Click` in that order. An
    /// uncancelled mouse down focuses the nearest focusable node at or above
    /// the target. The tree is re-rendered once afterwards.
    pub fn click(&mut self, target: &NodeHandle) -> Result<(), DomError> {
        self.get(target)?;

        self.dispatch(Event::PointerDown, target);
        let mouse_down = self.dispatch(Event::MouseDown, target);
        if !mouse_down.is_default_prevented()
            && let Some(handle) = self.focusable_ancestor(target)
        {
            self.focused = Some(handle);
        }
        self.dispatch(Event::Click, target);

        self.rerender();
        Ok(())
    }

    /// Simulate a key press on the focused node.
    ///
    /// Returns `false` when nothing is focused. Tab and Shift+Tab move focus
    /// through tabbable nodes; Space and Enter on a native button fire a
    /// click on it, unless a key handler cancelled the default action.
    pub fn key(&mut self, key: Key) -> Result<bool, DomError> {
        let Some(target) = self.focused.clone() else {
            log::debug!("Key {key:?} with nothing focused");
            return Ok(false);
        };
        let el = self.get(&target)?;
        let is_button = el.tag == "button";

        let cx = self.dispatch(Event::Key(key), &target);
        if !cx.is_default_prevented() {
            match key {
                Key::Tab => self.focus_next(),
                Key::BackTab => self.focus_prev(),
                k if k.activates_button() && is_button => {
                    self.dispatch(Event::Click, &target);
                }
                _ => {}
            }
        }

        self.rerender();
        Ok(true)
    }

    /// Move focus to the next tabbable node, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    /// Move focus to the previous tabbable node, wrapping around.
    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.tab_order();
        if order.is_empty() {
            return;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|f| order.iter().position(|h| h == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        log::debug!("Tab focus moved to {}", order[next]);
        self.focused = Some(order[next].clone());
    }

    /// Tabbable, visible nodes in document order.
    pub fn tab_order(&self) -> Vec<NodeHandle> {
        self.root
            .descendants()
            .into_iter()
            .filter(|(handle, el)| el.is_tabbable() && self.is_visible(handle))
            .map(|(handle, _)| handle)
            .collect()
    }

    fn focusable_ancestor(&self, target: &NodeHandle) -> Option<NodeHandle> {
        let mut current = Some(target.clone());
        while let Some(handle) = current {
            if self.root.find(&handle).is_some_and(Element::is_focusable) {
                return Some(handle);
            }
            current = handle.parent();
        }
        None
    }

    /// Run the handlers of the target and then of each ancestor.
    fn dispatch(&mut self, event: Event, target: &NodeHandle) -> EventContext {
        let handlers = self.bubble_path_handlers(event.kind(), target);
        log::debug!(
            "Dispatching {:?} to {target} ({} handlers)",
            event,
            handlers.len()
        );

        let mut cx = EventContext::new(event, target.clone());
        for handler in &handlers {
            handler.call(&mut cx);
        }

        if let Some(handle) = cx.take_focus_request()
            && let Err(err) = self.focus(&handle)
        {
            log::warn!("Ignoring focus request: {err}");
        }
        cx
    }

    fn bubble_path_handlers(&self, kind: EventKind, target: &NodeHandle) -> Vec<Handler> {
        let mut handlers = Vec::new();
        let mut current = Some(target.clone());
        while let Some(handle) = current {
            if let Some(el) = self.root.find(&handle) {
                handlers.extend(el.handlers_for(kind).cloned());
            }
            current = handle.parent();
        }
        handlers
    }
}
