//! Lookups over the mounted tree, in the spirit of testing-library queries.

use crate::document::Document;
use crate::node_ref::NodeHandle;

impl Document {
    /// First node whose own text contains `needle`, ignoring case.
    pub fn find_by_text(&self, needle: &str) -> Option<NodeHandle> {
        let needle = needle.to_lowercase();
        self.root()
            .descendants()
            .into_iter()
            .find(|(_, el)| {
                el.text
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .map(|(handle, _)| handle)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<NodeHandle> {
        self.root()
            .descendants()
            .into_iter()
            .filter(|(_, el)| el.tag == tag)
            .map(|(handle, _)| handle)
            .collect()
    }

    /// First node carrying `name="value"`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<NodeHandle> {
        self.root()
            .descendants()
            .into_iter()
            .find(|(_, el)| el.get_attr(name) == Some(value))
            .map(|(handle, _)| handle)
    }

    /// A node is visible unless it or one of its ancestors is `hidden`.
    ///
    /// Unknown handles are reported as not visible.
    pub fn is_visible(&self, handle: &NodeHandle) -> bool {
        if self.root().find(handle).is_none() {
            return false;
        }
        let mut current = Some(handle.clone());
        while let Some(h) = current {
            if self.root().find(&h).is_some_and(|el| el.has_attr("hidden")) {
                return false;
            }
            current = h.parent();
        }
        true
    }
}
