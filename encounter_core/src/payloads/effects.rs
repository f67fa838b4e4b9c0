//! Built-in mechanical effects.

use encounter_rules::{EncounterState, TagId};
use serde::{Deserialize, Serialize};

use super::MechanicalEffect;

/// Deepest compound nesting accepted from content.
pub const MAX_EFFECT_DEPTH: usize = 16;

/// The effect kinds content can name directly.
///
/// Custom effects can still implement [`MechanicalEffect`] themselves and be
/// registered alongside these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectSpec {
    /// Does nothing.
    None,

    Progress { amount: i32 },

    Pressure { amount: i32 },

    Momentum { amount: i32 },

    /// Clamped to the encounter's focus range.
    Focus { amount: i32 },

    AdvanceDuration { steps: u32 },

    RaiseTag { tag: TagId, amount: u32 },

    /// Move all pressure into momentum.
    ConvertPressureToMomentum,

    /// Apply each effect in order.
    Compound { effects: Vec<EffectSpec> },
}

impl EffectSpec {
    /// Nesting depth; non-compound effects have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            EffectSpec::Compound { effects } => {
                1 + effects.iter().map(EffectSpec::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

fn signed(amount: i32, what: &str) -> String {
    if amount >= 0 {
        format!("+{} {}", amount, what)
    } else {
        format!("{} {}", amount, what)
    }
}

impl MechanicalEffect for EffectSpec {
    fn apply(&self, state: &mut EncounterState) {
        match self {
            EffectSpec::None => {}
            EffectSpec::Progress { amount } => state.adjust_progress(*amount),
            EffectSpec::Pressure { amount } => state.adjust_pressure(*amount),
            EffectSpec::Momentum { amount } => state.adjust_momentum(*amount),
            EffectSpec::Focus { amount } => state.adjust_focus(*amount),
            EffectSpec::AdvanceDuration { steps } => state.advance_duration(*steps),
            EffectSpec::RaiseTag { tag, amount } => state.raise_tag(*tag, *amount),
            EffectSpec::ConvertPressureToMomentum => state.convert_pressure_to_momentum(),
            EffectSpec::Compound { effects } => {
                for effect in effects {
                    effect.apply(state);
                }
            }
        }
    }

    fn description_for_player(&self) -> String {
        match self {
            EffectSpec::None => "No effect".to_string(),
            EffectSpec::Progress { amount } => signed(*amount, "Progress"),
            EffectSpec::Pressure { amount } => signed(*amount, "Pressure"),
            EffectSpec::Momentum { amount } => signed(*amount, "Momentum"),
            EffectSpec::Focus { amount } => {
                let unit = if amount.unsigned_abs() == 1 { "Focus Point" } else { "Focus Points" };
                signed(*amount, unit)
            }
            EffectSpec::AdvanceDuration { steps } => {
                format!("Advances encounter duration by {}", steps)
            }
            EffectSpec::RaiseTag { tag, amount } => format!("+{} {}", amount, tag),
            EffectSpec::ConvertPressureToMomentum => "Convert all pressure to momentum".to_string(),
            EffectSpec::Compound { effects } => effects
                .iter()
                .map(EffectSpec::description_for_player)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
