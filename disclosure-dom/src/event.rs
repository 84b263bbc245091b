use std::fmt;
use std::sync::Arc;

use crate::node_ref::{NodeHandle, NodeRef};

/// Events an element can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    MouseDown,
    Click,
    KeyDown,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
}

impl Key {
    /// Keys that activate a native button.
    pub fn activates_button(&self) -> bool {
        matches!(self, Key::Char(' ') | Key::Enter)
    }
}

/// A dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerDown,
    MouseDown,
    Click,
    Key(Key),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PointerDown => EventKind::PointerDown,
            Event::MouseDown => EventKind::MouseDown,
            Event::Click => EventKind::Click,
            Event::Key(_) => EventKind::KeyDown,
        }
    }
}

/// Passed to every handler during a dispatch.
///
/// Handlers may cancel the event's default action and request focus for a
/// node; the document applies the request once all handlers have run.
#[derive(Debug)]
pub struct EventContext {
    event: Event,
    target: NodeHandle,
    default_prevented: bool,
    focus_request: Option<NodeHandle>,
}

impl EventContext {
    pub(crate) fn new(event: Event, target: NodeHandle) -> Self {
        Self {
            event,
            target,
            default_prevented: false,
            focus_request: None,
        }
    }

    pub fn event(&self) -> Event {
        self.event
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> &NodeHandle {
        &self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Request focus for the node behind `node_ref`.
    ///
    /// Does nothing if the ref is not attached. A later request in the same
    /// dispatch replaces an earlier one.
    pub fn focus(&mut self, node_ref: &NodeRef) {
        if let Some(handle) = node_ref.get() {
            self.focus_request = Some(handle);
        }
    }

    pub(crate) fn take_focus_request(&mut self) -> Option<NodeHandle> {
        self.focus_request.take()
    }
}

/// An event handler attached to an element.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(&mut EventContext) + Send + Sync>);

impl Handler {
    pub fn new(f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, cx: &mut EventContext) {
        (self.0)(cx)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Combine a user supplied handler with a widget's own handler.
///
/// Both run once per event, the user handler first.
pub fn compose_handlers(user: Option<Handler>, internal: Handler) -> Handler {
    match user {
        None => internal,
        Some(user) => Handler::new(move |cx| {
            user.call(cx);
            internal.call(cx);
        }),
    }
}
