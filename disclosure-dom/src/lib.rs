//! Headless host for widgets.
//!
//! `disclosure-dom` is a minimal stand-in for a UI rendering layer: an
//! element tree with attributes, event handlers and node refs, plus a
//! [`Document`] that mounts the tree, dispatches clicks and key presses,
//! tracks focus and re-renders after every dispatch.
//!
//! Nothing is drawn. The document exists so widget contracts (attributes,
//! focus movement, activation) can be exercised and inspected.

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod markup;
pub mod node_ref;
mod query;

pub use document::Document;
pub use element::{AttrValue, Element};
pub use error::DomError;
pub use event::{Event, EventContext, EventKind, Handler, Key, compose_handlers};
pub use markup::to_markup;
pub use node_ref::{NodeHandle, NodeRef};
