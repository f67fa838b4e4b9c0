//! The shared, read-only collection of narrative tags.

use encounter_rules::{ApproachTag, TagValues};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::NarrativeTag;
use crate::error::{EngineError, Result};

/// Deepest condition nesting accepted when building a catalog.
pub const MAX_CONDITION_DEPTH: usize = 16;

/// An ordered catalog of narrative tags, built once and shared by every
/// encounter session.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<NarrativeTag>,
    index: HashMap<String, usize>,
}

impl TagCatalog {
    /// Build a catalog, rejecting duplicate ids and over-deep conditions.
    pub fn new(tags: impl IntoIterator<Item = NarrativeTag>) -> Result<Self> {
        let mut catalog = Self::default();
        for tag in tags {
            let depth = tag.condition.depth();
            if depth > MAX_CONDITION_DEPTH {
                return Err(EngineError::ConditionTooDeep {
                    tag: tag.id,
                    depth,
                    max: MAX_CONDITION_DEPTH,
                });
            }
            if catalog.index.contains_key(&tag.id) {
                return Err(EngineError::DuplicateTag(tag.id));
            }
            catalog.index.insert(tag.id.clone(), catalog.tags.len());
            catalog.tags.push(tag);
        }
        debug!(tags = catalog.tags.len(), "tag catalog built");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&NarrativeTag> {
        self.index.get(id).map(|&i| &self.tags[i])
    }

    /// Iterate over tags in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &NarrativeTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags whose conditions hold for the given values, in catalog order.
    pub fn active_tags<'a>(&'a self, values: &impl TagValues) -> Vec<&'a NarrativeTag> {
        self.tags.iter().filter(|tag| tag.is_active(values)).collect()
    }

    /// Approaches blocked by the currently active tags.
    pub fn blocked_approaches(&self, values: &impl TagValues) -> BTreeSet<ApproachTag> {
        self.tags
            .iter()
            .filter_map(|tag| tag.blocked_approach.filter(|_| tag.is_active(values)))
            .collect()
    }
}
