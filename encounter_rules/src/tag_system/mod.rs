//! Tag system - read access to accumulated approach and focus values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mechanics::TagId;

/// Point queries over accumulated tag values.
///
/// Implementations return 0 for tags that were never set, so content can
/// reference a tag before anything has raised it.
pub trait TagValues {
    fn tag_value(&self, tag: TagId) -> u32;
}

impl<T: TagValues + ?Sized> TagValues for &T {
    fn tag_value(&self, tag: TagId) -> u32 {
        (**self).tag_value(tag)
    }
}

/// An immutable snapshot of tag values.
///
/// Encounter state implements [`TagValues`] directly; a snapshot is useful
/// when conditions need to be evaluated against a frozen or hypothetical set
/// of values (previews, tests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TagSystem {
    values: HashMap<TagId, u32>,
}

impl TagSystem {
    /// Create an empty tag system where every tag reads as 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `tag` set to `value`.
    pub fn with_value(mut self, tag: impl Into<TagId>, value: u32) -> Self {
        self.values.insert(tag.into(), value);
        self
    }

    pub(crate) fn raise(&mut self, tag: TagId, amount: u32) {
        let value = self.values.entry(tag).or_insert(0);
        *value = value.saturating_add(amount);
    }
}

impl TagValues for TagSystem {
    fn tag_value(&self, tag: TagId) -> u32 {
        self.values.get(&tag).copied().unwrap_or(0)
    }
}

impl FromIterator<(TagId, u32)> for TagSystem {
    fn from_iter<I: IntoIterator<Item = (TagId, u32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
