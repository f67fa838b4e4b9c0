//! Encounter state - the mutable record of a single encounter session.

mod events;

pub use events::*;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::EncounterConfig;
use crate::mechanics::TagId;
use crate::tag_system::{TagSystem, TagValues};

/// Unique identifier for encounter sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterId(pub Uuid);

impl EncounterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EncounterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EncounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the player is working towards in this encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterGoal {
    pub progress_target: u32,
}

impl EncounterGoal {
    pub fn is_met_by(&self, state: &EncounterState) -> bool {
        state.progress >= self.progress_target
    }
}

/// Where an encounter stands, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterStatus {
    InProgress,
    GoalCompleted,
    DurationExhausted,
}

/// The complete state of one encounter session.
///
/// Counters change only through the mutators below, which are meant to be
/// called by mechanical effects. The event log is append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterState {
    id: EncounterId,

    duration_counter: u32,
    max_duration: u32,

    focus_points: u32,
    max_focus: u32,

    progress: u32,
    pressure: u32,
    momentum: u32,

    /// Accumulated approach and focus values.
    tags: TagSystem,

    goal: EncounterGoal,
    goal_completed: bool,
    /// Number of goal-completion checks performed so far.
    goal_checks: u32,

    event_log: Vec<EncounterEvent>,
}

impl Default for EncounterState {
    fn default() -> Self {
        Self::new(&EncounterConfig::default())
    }
}

impl EncounterState {
    /// Create a fresh encounter from its configuration.
    pub fn new(config: &EncounterConfig) -> Self {
        Self {
            id: EncounterId::new(),
            duration_counter: 0,
            max_duration: config.max_duration,
            focus_points: config.starting_focus.min(config.max_focus),
            max_focus: config.max_focus,
            progress: 0,
            pressure: 0,
            momentum: 0,
            tags: TagSystem::new(),
            goal: EncounterGoal {
                progress_target: config.progress_goal,
            },
            goal_completed: false,
            goal_checks: 0,
            event_log: Vec::new(),
        }
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    pub fn duration_counter(&self) -> u32 {
        self.duration_counter
    }

    pub fn max_duration(&self) -> u32 {
        self.max_duration
    }

    pub fn focus_points(&self) -> u32 {
        self.focus_points
    }

    pub fn max_focus(&self) -> u32 {
        self.max_focus
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn pressure(&self) -> u32 {
        self.pressure
    }

    pub fn momentum(&self) -> u32 {
        self.momentum
    }

    pub fn goal(&self) -> EncounterGoal {
        self.goal
    }

    pub fn goal_completed(&self) -> bool {
        self.goal_completed
    }

    pub fn goal_checks(&self) -> u32 {
        self.goal_checks
    }

    /// The ordered event log, oldest first.
    pub fn event_log(&self) -> &[EncounterEvent] {
        &self.event_log
    }

    /// A frozen copy of the current tag values.
    pub fn tag_system(&self) -> TagSystem {
        self.tags.clone()
    }

    /// Advance the duration counter.
    pub fn advance_duration(&mut self, steps: u32) {
        self.duration_counter = self.duration_counter.saturating_add(steps);
    }

    /// Change progress by `delta`, flooring at zero.
    pub fn adjust_progress(&mut self, delta: i32) {
        self.progress = self.progress.saturating_add_signed(delta);
    }

    /// Change pressure by `delta`, flooring at zero.
    pub fn adjust_pressure(&mut self, delta: i32) {
        self.pressure = self.pressure.saturating_add_signed(delta);
    }

    /// Change momentum by `delta`, flooring at zero.
    pub fn adjust_momentum(&mut self, delta: i32) {
        self.momentum = self.momentum.saturating_add_signed(delta);
    }

    /// Change focus points by `delta`, clamped to `0..=max_focus`.
    pub fn adjust_focus(&mut self, delta: i32) {
        self.focus_points = self.focus_points.saturating_add_signed(delta).min(self.max_focus);
    }

    /// Move all accumulated pressure into momentum.
    pub fn convert_pressure_to_momentum(&mut self) {
        self.momentum = self.momentum.saturating_add(self.pressure);
        self.pressure = 0;
    }

    /// Raise an approach or focus tag value.
    pub fn raise_tag(&mut self, tag: TagId, amount: u32) {
        self.tags.raise(tag, amount);
    }

    /// Append an event stamped with the current duration counter.
    pub fn record_event(&mut self, event_type: EncounterEventType, description: impl Into<String>) -> &EncounterEvent {
        let event = EncounterEvent::new(event_type, description, self.duration_counter);
        self.event_log.push(event);
        &self.event_log[self.event_log.len() - 1]
    }

    /// Check whether the goal has been reached.
    ///
    /// Completion latches: once the goal is met the flag stays set even if
    /// progress later drops.
    pub fn check_goal_completion(&mut self) -> bool {
        self.goal_checks += 1;
        if !self.goal_completed && self.goal.is_met_by(self) {
            self.goal_completed = true;
            info!(
                encounter = %self.id,
                progress = self.progress,
                duration = self.duration_counter,
                "encounter goal completed"
            );
        }
        self.goal_completed
    }

    pub fn is_duration_exhausted(&self) -> bool {
        self.duration_counter >= self.max_duration
    }

    pub fn status(&self) -> EncounterStatus {
        if self.goal_completed {
            EncounterStatus::GoalCompleted
        } else if self.is_duration_exhausted() {
            EncounterStatus::DurationExhausted
        } else {
            EncounterStatus::InProgress
        }
    }
}

impl TagValues for EncounterState {
    fn tag_value(&self, tag: TagId) -> u32 {
        self.tags.tag_value(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::{ApproachTag, FocusTag};

    fn config() -> EncounterConfig {
        EncounterConfig {
            max_focus: 5,
            starting_focus: 3,
            max_duration: 4,
            progress_goal: 10,
        }
    }

    #[test]
    fn test_new_state() {
        let state = EncounterState::new(&config());
        assert_eq!(state.focus_points(), 3);
        assert_eq!(state.progress(), 0);
        assert!(state.event_log().is_empty());
        assert_eq!(state.status(), EncounterStatus::InProgress);
    }

    #[test]
    fn test_counters_floor_at_zero() {
        let mut state = EncounterState::new(&config());
        state.adjust_pressure(2);
        state.adjust_pressure(-5);
        assert_eq!(state.pressure(), 0);

        state.adjust_momentum(-1);
        assert_eq!(state.momentum(), 0);
    }

    #[test]
    fn test_focus_clamped() {
        let mut state = EncounterState::new(&config());
        state.adjust_focus(10);
        assert_eq!(state.focus_points(), 5);

        state.adjust_focus(-8);
        assert_eq!(state.focus_points(), 0);
    }

    #[test]
    fn test_convert_pressure_to_momentum() {
        let mut state = EncounterState::new(&config());
        state.adjust_pressure(3);
        state.adjust_momentum(2);

        state.convert_pressure_to_momentum();

        assert_eq!(state.pressure(), 0);
        assert_eq!(state.momentum(), 5);
    }

    #[test]
    fn test_raise_tag() {
        let mut state = EncounterState::new(&config());
        state.raise_tag(ApproachTag::Rapport.into(), 2);
        state.raise_tag(ApproachTag::Rapport.into(), 1);

        assert_eq!(state.tag_value(ApproachTag::Rapport.into()), 3);
        assert_eq!(state.tag_value(FocusTag::Resource.into()), 0);
        assert_eq!(state.tag_system().tag_value(ApproachTag::Rapport.into()), 3);
    }

    #[test]
    fn test_record_event_uses_duration() {
        let mut state = EncounterState::new(&config());
        state.advance_duration(2);

        let event = state.record_event(EncounterEventType::PayloadApplied, "+1 Progress");
        assert_eq!(event.timestamp, 2);
        assert_eq!(state.event_log().len(), 1);
    }

    #[test]
    fn test_goal_completion_latches() {
        let mut state = EncounterState::new(&config());
        state.adjust_progress(9);
        assert!(!state.check_goal_completion());

        state.adjust_progress(1);
        assert!(state.check_goal_completion());

        state.adjust_progress(-4);
        assert!(state.check_goal_completion());
        assert_eq!(state.goal_checks(), 3);
        assert_eq!(state.status(), EncounterStatus::GoalCompleted);
    }

    #[test]
    fn test_duration_exhausted() {
        let mut state = EncounterState::new(&config());
        state.advance_duration(4);

        assert!(state.is_duration_exhausted());
        assert_eq!(state.status(), EncounterStatus::DurationExhausted);
    }
}
