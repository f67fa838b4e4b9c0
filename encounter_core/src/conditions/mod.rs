//! Activation conditions - pure predicates over tag values.
//!
//! A condition tree is owned outright by whoever holds it, so it cannot
//! reference itself or an ancestor, and it never changes once built.
//!
//! Evaluation rules:
//! - `Always` is true.
//! - `Threshold` is true when the tag value is `>=` the threshold.
//! - `Combined` folds its children with AND (`require_all`) or OR. An empty
//!   AND is true and an empty OR is false.

use encounter_rules::{TagId, TagValues};
use serde::{Deserialize, Serialize};

/// A boolean predicate evaluated against tag values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivationCondition {
    /// Constant true.
    Always,

    /// True when `tag` has accumulated at least `threshold`.
    Threshold { tag: TagId, threshold: u32 },

    /// AND (`require_all`) or OR over child conditions.
    Combined {
        conditions: Vec<ActivationCondition>,
        require_all: bool,
    },
}

impl ActivationCondition {
    pub fn always() -> Self {
        ActivationCondition::Always
    }

    pub fn threshold(tag: impl Into<TagId>, threshold: u32) -> Self {
        ActivationCondition::Threshold {
            tag: tag.into(),
            threshold,
        }
    }

    pub fn combined(conditions: Vec<ActivationCondition>, require_all: bool) -> Self {
        ActivationCondition::Combined {
            conditions,
            require_all,
        }
    }

    /// True when every child is true.
    pub fn all(conditions: Vec<ActivationCondition>) -> Self {
        Self::combined(conditions, true)
    }

    /// True when at least one child is true.
    pub fn any(conditions: Vec<ActivationCondition>) -> Self {
        Self::combined(conditions, false)
    }

    /// Evaluate the condition against the given tag values.
    pub fn is_active(&self, tags: &impl TagValues) -> bool {
        match self {
            ActivationCondition::Always => true,
            ActivationCondition::Threshold { tag, threshold } => tags.tag_value(*tag) >= *threshold,
            ActivationCondition::Combined {
                conditions,
                require_all: true,
            } => conditions.iter().all(|c| c.is_active(tags)),
            ActivationCondition::Combined {
                conditions,
                require_all: false,
            } => conditions.iter().any(|c| c.is_active(tags)),
        }
    }

    /// Player-facing description derived from the condition's structure.
    pub fn description(&self) -> String {
        match self {
            ActivationCondition::Always => "Always".to_string(),
            ActivationCondition::Threshold { tag, threshold } => {
                format!("Requires {} {}+", tag, threshold)
            }
            ActivationCondition::Combined {
                conditions,
                require_all,
            } => {
                let separator = if *require_all { " AND " } else { " OR " };
                conditions
                    .iter()
                    .map(ActivationCondition::description)
                    .collect::<Vec<_>>()
                    .join(separator)
            }
        }
    }

    /// Nesting depth of the tree; leaves have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ActivationCondition::Combined { conditions, .. } => {
                1 + conditions.iter().map(ActivationCondition::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl std::fmt::Display for ActivationCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_rules::{ApproachTag, FocusTag, TagSystem};

    fn sample_systems() -> Vec<TagSystem> {
        vec![
            TagSystem::new(),
            TagSystem::new().with_value(ApproachTag::Dominance, 1),
            TagSystem::new().with_value(ApproachTag::Dominance, 3),
            TagSystem::new()
                .with_value(ApproachTag::Dominance, 5)
                .with_value(FocusTag::Physical, 2),
            TagSystem::new().with_value(FocusTag::Physical, 4),
        ]
    }

    #[test]
    fn test_threshold_uses_greater_or_equal() {
        for tags in sample_systems() {
            for k in 0..7 {
                let condition = ActivationCondition::threshold(ApproachTag::Dominance, k);
                let expected = tags.tag_value(ApproachTag::Dominance.into()) >= k;
                assert_eq!(condition.is_active(&tags), expected, "threshold {k}");
            }
        }
    }

    #[test]
    fn test_threshold_on_unset_tag() {
        let tags = TagSystem::new();
        assert!(ActivationCondition::threshold(FocusTag::Resource, 0).is_active(&tags));
        assert!(!ActivationCondition::threshold(FocusTag::Resource, 1).is_active(&tags));
    }

    #[test]
    fn test_always() {
        for tags in sample_systems() {
            assert!(ActivationCondition::always().is_active(&tags));
        }
    }

    #[test]
    fn test_empty_combined_identity_elements() {
        for tags in sample_systems() {
            assert!(ActivationCondition::all(vec![]).is_active(&tags));
            assert!(!ActivationCondition::any(vec![]).is_active(&tags));
        }
    }

    #[test]
    fn test_combined_and_or() {
        let children = [
            ActivationCondition::always(),
            ActivationCondition::threshold(ApproachTag::Dominance, 3),
            ActivationCondition::threshold(FocusTag::Physical, 2),
            ActivationCondition::any(vec![]),
        ];

        for tags in sample_systems() {
            for c1 in &children {
                for c2 in &children {
                    let and = ActivationCondition::all(vec![c1.clone(), c2.clone()]);
                    let or = ActivationCondition::any(vec![c1.clone(), c2.clone()]);
                    let (a, b) = (c1.is_active(&tags), c2.is_active(&tags));

                    assert_eq!(and.is_active(&tags), a && b);
                    assert_eq!(or.is_active(&tags), a || b);
                }
            }
        }
    }

    #[test]
    fn test_nested_combined() {
        // Dominance 3+ AND (Physical 2+ OR Rapport 1+)
        let condition = ActivationCondition::all(vec![
            ActivationCondition::threshold(ApproachTag::Dominance, 3),
            ActivationCondition::any(vec![
                ActivationCondition::threshold(FocusTag::Physical, 2),
                ActivationCondition::threshold(ApproachTag::Rapport, 1),
            ]),
        ]);

        let tags = TagSystem::new().with_value(ApproachTag::Dominance, 3);
        assert!(!condition.is_active(&tags));

        let tags = tags.with_value(ApproachTag::Rapport, 1);
        assert!(condition.is_active(&tags));
        assert_eq!(condition.depth(), 3);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            ActivationCondition::threshold(ApproachTag::Analysis, 4).description(),
            "Requires Analysis 4+"
        );

        let and = ActivationCondition::all(vec![
            ActivationCondition::threshold(ApproachTag::Dominance, 1),
            ActivationCondition::threshold(FocusTag::Physical, 2),
        ]);
        assert_eq!(and.description(), "Requires Dominance 1+ AND Requires Physical 2+");

        let or = ActivationCondition::any(vec![
            ActivationCondition::threshold(ApproachTag::Rapport, 3),
            ActivationCondition::threshold(FocusTag::Relationship, 2),
        ]);
        assert_eq!(or.to_string(), "Requires Rapport 3+ OR Requires Relationship 2+");
        assert_eq!(ActivationCondition::always().description(), "Always");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            condition: ActivationCondition,
        }

        let text = r#"
            [condition]
            kind = "combined"
            require_all = false
            conditions = [
                { kind = "threshold", tag = "Evasion", threshold = 2 },
                { kind = "always" },
            ]
        "#;
        let wrapper: Wrapper = toml::from_str(text).unwrap();
        assert_eq!(
            wrapper.condition,
            ActivationCondition::any(vec![
                ActivationCondition::threshold(ApproachTag::Evasion, 2),
                ActivationCondition::always(),
            ])
        );
    }

    #[test]
    fn test_combined_without_children_is_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrapper {
            condition: ActivationCondition,
        }

        let text = r#"
            [condition]
            kind = "combined"
            require_all = true
        "#;
        assert!(toml::from_str::<Wrapper>(text).is_err());
    }
}
