//! Id generation for disclosures and their panels.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

/// Base of generated disclosure ids.
pub const DEFAULT_ID_BASE: &str = "disclosure";

/// Prefix of panel ids.
pub const PANEL_PREFIX: &str = "panel";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Join a prefix and an id the way derived element ids are built.
///
/// `make_id("panel", "custom-id")` is `"panel--custom-id"`.
pub fn make_id(prefix: &str, id: impl Display) -> String {
    format!("{prefix}--{id}")
}

/// Panel id for a disclosure id.
pub fn panel_id(id: &str) -> String {
    make_id(PANEL_PREFIX, id)
}

pub(crate) fn generate_id() -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{DEFAULT_ID_BASE}-{n}")
}
