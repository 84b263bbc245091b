//! Accessible disclosure widget.
//!
//! A disclosure is a button that shows and hides a content panel. The
//! [`Disclosure`] owns the open state and hands out a [`DisclosureContext`];
//! [`DisclosureButton`] and [`DisclosurePanel`] are built from that context
//! and render as [`disclosure_dom::Element`]s with the matching ARIA
//! attributes.
//!
//! # Example
//!
//! ```
//! use disclosure::prelude::*;
//!
//! let props = DisclosureProps::new().id("faq");
//! let disclosure = Disclosure::new(props.clone());
//!
//! let mut doc = Document::mount(move || {
//!     let cx = disclosure.provide(&props);
//!     Element::div()
//!         .child(DisclosureButton::new(&cx).text("Show answer").build())
//!         .child(DisclosurePanel::new(&cx).text("42").build())
//! });
//!
//! let panel = doc.find_by_attr("id", "panel--faq").unwrap();
//! assert!(!doc.is_visible(&panel));
//!
//! let button = doc.find_by_text("show answer").unwrap();
//! doc.click(&button).unwrap();
//! assert!(doc.is_visible(&panel));
//! ```

pub mod button;
pub mod context;
pub mod disclosure;
pub mod id;
pub mod panel;
pub mod state;

pub use button::DisclosureButton;
pub use context::{DataState, DisclosureContext, DisclosureSnapshot, OnSelect};
pub use disclosure::{ChangeHandler, Disclosure, DisclosureProps};
pub use panel::DisclosurePanel;
pub use state::State;

pub mod prelude {
    pub use crate::button::DisclosureButton;
    pub use crate::context::{DataState, DisclosureContext, DisclosureSnapshot};
    pub use crate::disclosure::{Disclosure, DisclosureProps};
    pub use crate::panel::DisclosurePanel;
    pub use crate::state::State;

    pub use disclosure_dom::{Document, Element, EventKind, Handler, Key, NodeRef};
}
