//! The state owner of a disclosure.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::context::{DisclosureContext, OnSelect};
use crate::id;
use crate::state::State;

/// Change notifier invoked on every activation.
pub type ChangeHandler = Arc<dyn Fn() + Send + Sync>;

/// Inputs of a [`Disclosure`], supplied at creation and again on every render.
///
/// # Example
///
/// ```
/// use disclosure::DisclosureProps;
///
/// let props = DisclosureProps::new()
///     .id("details")
///     .default_open(true)
///     .on_change(|| println!("toggled"));
/// assert!(props.open.is_none());
/// ```
#[derive(Clone, Default)]
pub struct DisclosureProps {
    /// Initial state of an uncontrolled disclosure.
    pub default_open: bool,
    /// External state. Present at creation means the disclosure is controlled.
    pub open: Option<bool>,
    pub on_change: Option<ChangeHandler>,
    pub id: Option<String>,
}

impl DisclosureProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn on_change(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Set the id. Strings and numbers are both accepted; an empty id counts
    /// as no id.
    pub fn id(mut self, id: impl fmt::Display) -> Self {
        self.id = Some(id.to_string());
        self
    }
}

impl fmt::Debug for DisclosureProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureProps")
            .field("default_open", &self.default_open)
            .field("open", &self.open)
            .field("on_change", &self.on_change.is_some())
            .field("id", &self.id)
            .finish()
    }
}

/// Where the open state lives. Decided once, when the disclosure is created.
#[derive(Debug)]
enum OpenMode {
    /// Uncontrolled: the disclosure owns the state and flips it on select.
    Owned(State<bool>),
    /// Controlled: the state mirrors the last external value.
    Mirrored(State<bool>),
}

impl OpenMode {
    fn state(&self) -> &State<bool> {
        match self {
            OpenMode::Owned(state) | OpenMode::Mirrored(state) => state,
        }
    }

    fn is_open(&self) -> bool {
        self.state().get()
    }
}

/// Owner of a disclosure's open state.
///
/// Create one per disclosure and keep it alive across renders. On every
/// render call [`Disclosure::provide`] with the current props and build the
/// button and panel from the returned context.
pub struct Disclosure {
    id: String,
    panel_id: String,
    mode: Arc<OpenMode>,
    on_change: State<Option<ChangeHandler>>,
    on_select: OnSelect,
    cached: RwLock<Option<DisclosureContext>>,
    warned_uncontrolled: AtomicBool,
}

impl Disclosure {
    /// Create the disclosure. Whether it is controlled is decided here, from
    /// `props.open`, and never changes afterwards.
    pub fn new(props: DisclosureProps) -> Self {
        let id = match props.id {
            Some(id) if !id.is_empty() => id,
            _ => id::generate_id(),
        };
        let panel_id = id::panel_id(&id);

        let mode = Arc::new(match props.open {
            Some(open) => OpenMode::Mirrored(State::new(open)),
            None => OpenMode::Owned(State::new(props.default_open)),
        });
        let on_change = State::new(props.on_change);

        let on_select = {
            let mode = Arc::clone(&mode);
            let on_change = on_change.clone();
            let id = id.clone();
            OnSelect::new(move || {
                if let Some(handler) = on_change.get() {
                    handler();
                }
                if let OpenMode::Owned(state) = &*mode {
                    state.update(|open| *open = !*open);
                    log::debug!("Disclosure {id} toggled, open={}", state.get());
                } else {
                    log::debug!("Disclosure {id} selected, waiting for external state");
                }
            })
        };

        log::debug!(
            "Created disclosure {id} ({})",
            if matches!(*mode, OpenMode::Mirrored(_)) {
                "controlled"
            } else {
                "uncontrolled"
            }
        );

        Self {
            id,
            panel_id,
            mode,
            on_change,
            on_select,
            cached: RwLock::new(None),
            warned_uncontrolled: AtomicBool::new(false),
        }
    }

    /// Apply this render's props and return the context for the children.
    ///
    /// A controlled disclosure takes its open state from `props.open`; a
    /// missing value reads as closed. An uncontrolled disclosure ignores
    /// `props.open`. The change notifier is always replaced by the latest
    /// one, while the select callback keeps its identity.
    pub fn provide(&self, props: &DisclosureProps) -> DisclosureContext {
        self.on_change.replace(props.on_change.clone());

        match &*self.mode {
            OpenMode::Mirrored(state) => {
                if state.set(props.open.unwrap_or(false)) {
                    log::debug!("Disclosure {} synced to open={}", self.id, state.get());
                }
            }
            OpenMode::Owned(_) => {
                if props.open.is_some() && !self.warned_uncontrolled.swap(true, Ordering::Relaxed) {
                    log::warn!(
                        "Disclosure {} was created uncontrolled, ignoring external open state",
                        self.id
                    );
                }
            }
        }
        if props
            .id
            .as_deref()
            .is_some_and(|id| !id.is_empty() && id != self.id)
        {
            log::debug!("Disclosure {} keeps its id, ignoring new id {:?}", self.id, props.id);
        }

        self.context()
    }

    /// The current context, reusing the previous value until the open state
    /// is written again.
    ///
    /// The id, panel id and select callback are fixed at creation, so only a
    /// write to the open state produces a new value.
    pub fn context(&self) -> DisclosureContext {
        let state = self.mode.state();
        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);

        let changed = state.take_changed();
        if !changed && let Some(cx) = cached.as_ref() {
            return cx.clone();
        }

        let open = state.get();
        log::debug!("Disclosure {} context recomputed, open={open}", self.id);
        let cx = DisclosureContext::new(
            self.id.clone(),
            self.panel_id.clone(),
            open,
            self.on_select.clone(),
        );
        *cached = Some(cx.clone());
        cx
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    pub fn is_controlled(&self) -> bool {
        matches!(*self.mode, OpenMode::Mirrored(_))
    }

    /// Activate the disclosure programmatically.
    pub fn select(&self) {
        self.on_select.call()
    }
}

impl fmt::Debug for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disclosure")
            .field("id", &self.id)
            .field("panel_id", &self.panel_id)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
