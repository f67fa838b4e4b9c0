//! Encounter mechanics: approach and focus tag identifiers.

use serde::{Deserialize, Serialize};

/// How the player goes about an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApproachTag {
    /// Force and intimidation.
    Dominance,
    /// Charm and goodwill.
    Rapport,
    /// Reasoning and observation.
    Analysis,
    /// Careful, exact execution.
    Precision,
    /// Stealth and misdirection.
    Evasion,
}

impl ApproachTag {
    pub const ALL: [ApproachTag; 5] = [
        ApproachTag::Dominance,
        ApproachTag::Rapport,
        ApproachTag::Analysis,
        ApproachTag::Precision,
        ApproachTag::Evasion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ApproachTag::Dominance => "Dominance",
            ApproachTag::Rapport => "Rapport",
            ApproachTag::Analysis => "Analysis",
            ApproachTag::Precision => "Precision",
            ApproachTag::Evasion => "Evasion",
        }
    }
}

/// What an action is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FocusTag {
    Relationship,
    Information,
    Physical,
    Environment,
    Resource,
}

impl FocusTag {
    pub const ALL: [FocusTag; 5] = [
        FocusTag::Relationship,
        FocusTag::Information,
        FocusTag::Physical,
        FocusTag::Environment,
        FocusTag::Resource,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FocusTag::Relationship => "Relationship",
            FocusTag::Information => "Information",
            FocusTag::Physical => "Physical",
            FocusTag::Environment => "Environment",
            FocusTag::Resource => "Resource",
        }
    }
}

/// Identifier of a tag value tracked during an encounter.
///
/// Serialized as the bare variant name (`"Dominance"`, `"Physical"`), since
/// approach and focus names never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagId {
    Approach(ApproachTag),
    Focus(FocusTag),
}

impl TagId {
    /// Every tag identifier, approaches first.
    pub fn all() -> impl Iterator<Item = TagId> {
        ApproachTag::ALL
            .into_iter()
            .map(TagId::Approach)
            .chain(FocusTag::ALL.into_iter().map(TagId::Focus))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagId::Approach(tag) => tag.name(),
            TagId::Focus(tag) => tag.name(),
        }
    }

    pub fn is_approach(&self) -> bool {
        matches!(self, TagId::Approach(_))
    }
}

impl From<ApproachTag> for TagId {
    fn from(tag: ApproachTag) -> Self {
        TagId::Approach(tag)
    }
}

impl From<FocusTag> for TagId {
    fn from(tag: FocusTag) -> Self {
        TagId::Focus(tag)
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for ApproachTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for FocusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(TagId::from(ApproachTag::Dominance).to_string(), "Dominance");
        assert_eq!(TagId::from(FocusTag::Physical).to_string(), "Physical");
    }

    #[test]
    fn test_all_tags_are_distinct() {
        use std::collections::HashSet;

        let names: HashSet<_> = TagId::all().map(|t| t.name()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(TagId::all().filter(TagId::is_approach).count(), 5);
    }

    #[test]
    fn test_tag_id_serializes_as_bare_name() {
        let json = serde_json::to_string(&TagId::Focus(FocusTag::Information)).unwrap();
        assert_eq!(json, "\"Information\"");

        let tag: TagId = serde_json::from_str("\"Rapport\"").unwrap();
        assert_eq!(tag, TagId::Approach(ApproachTag::Rapport));

        assert!(serde_json::from_str::<TagId>("\"Cunning\"").is_err());
    }
}
