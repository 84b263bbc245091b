//! The value a [`Disclosure`](crate::Disclosure) hands to its button and panel.

use std::fmt;
use std::sync::Arc;

/// Value of the `data-state` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataState {
    Open,
    Collapsed,
}

impl DataState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataState::Open => "open",
            DataState::Collapsed => "collapsed",
        }
    }
}

impl From<bool> for DataState {
    fn from(open: bool) -> Self {
        if open {
            DataState::Open
        } else {
            DataState::Collapsed
        }
    }
}

impl fmt::Display for DataState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activation callback of a disclosure.
///
/// Identity is stable for the lifetime of the owning disclosure; compare
/// with [`OnSelect::ptr_eq`].
#[derive(Clone)]
pub struct OnSelect(Arc<dyn Fn() + Send + Sync>);

impl OnSelect {
    pub(crate) fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }

    pub fn ptr_eq(&self, other: &OnSelect) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnSelect(..)")
    }
}

#[derive(Debug)]
struct ContextValue {
    id: String,
    panel_id: String,
    open: bool,
    on_select: OnSelect,
}

/// Read-only context passed from a disclosure to its button and panel.
///
/// A new value (new identity) is produced only when the id, panel id, open
/// state or select callback changes; otherwise the previous value is handed
/// out again.
///
/// The default context is detached from any disclosure: empty ids, closed,
/// and a select callback that does nothing.
#[derive(Debug, Clone)]
pub struct DisclosureContext(Arc<ContextValue>);

impl DisclosureContext {
    pub(crate) fn new(id: String, panel_id: String, open: bool, on_select: OnSelect) -> Self {
        Self(Arc::new(ContextValue {
            id,
            panel_id,
            open,
            on_select,
        }))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn panel_id(&self) -> &str {
        &self.0.panel_id
    }

    pub fn is_open(&self) -> bool {
        self.0.open
    }

    pub fn data_state(&self) -> DataState {
        self.0.open.into()
    }

    pub fn on_select(&self) -> &OnSelect {
        &self.0.on_select
    }

    /// Activate the disclosure, as a click on its button would.
    pub fn select(&self) {
        self.0.on_select.call()
    }

    /// Whether this context was built without a disclosure.
    pub fn is_detached(&self) -> bool {
        self.0.id.is_empty()
    }

    /// Whether both handles refer to the same context value.
    pub fn ptr_eq(&self, other: &DisclosureContext) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Plain copy of the data descendants may read.
    pub fn snapshot(&self) -> DisclosureSnapshot {
        DisclosureSnapshot {
            id: self.0.id.clone(),
            panel_id: self.0.panel_id.clone(),
            open: self.0.open,
        }
    }
}

impl Default for DisclosureContext {
    fn default() -> Self {
        Self::new(
            String::new(),
            String::new(),
            false,
            OnSelect::new(|| log::warn!("Disclosure selected outside of a Disclosure, ignoring")),
        )
    }
}

/// Data of a disclosure as seen by arbitrary descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureSnapshot {
    pub id: String,
    pub panel_id: String,
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_state_strings() {
        assert_eq!(DataState::from(true).as_str(), "open");
        assert_eq!(DataState::from(false).to_string(), "collapsed");
    }

    #[test]
    fn test_detached_context() {
        let cx = DisclosureContext::default();
        assert!(cx.is_detached());
        assert!(!cx.is_open());
        assert_eq!(cx.panel_id(), "");
        cx.select();
        assert!(!cx.is_open());
    }

    #[test]
    fn test_snapshot() {
        let cx = DisclosureContext::new("a".into(), "panel--a".into(), true, OnSelect::new(|| {}));
        assert_eq!(
            cx.snapshot(),
            DisclosureSnapshot {
                id: "a".into(),
                panel_id: "panel--a".into(),
                open: true,
            }
        );
    }
}
