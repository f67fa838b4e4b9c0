//! # Encounter Rules
//!
//! The data side of an encounter: tag identifiers, accumulated tag values,
//! and the mutable per-session encounter record with its event log.
//! This crate holds no rule-engine logic; conditions, effects and the payload
//! pipeline live in `encounter_core`.

pub mod config;
pub mod encounter_state;
pub mod mechanics;
pub mod tag_system;

pub use config::*;
pub use encounter_state::*;
pub use mechanics::*;
pub use tag_system::*;
