//! # Encounter Core
//!
//! The rule engine of an encounter. This crate evaluates tag activation
//! conditions against `encounter_rules` state and runs the payload pipeline
//! that applies mechanical effects to it.
//!
//! ## Core Components
//!
//! - **conditions**: Pure boolean predicates over tag values
//! - **tags**: Named narrative tags and the shared tag catalog
//! - **payloads**: Mechanical effects, the payload registry, and the processor
//! - **session**: Per-encounter facade bundling state and processor
//! - **content**: TOML loading of tag catalogs and payload registries
//!
//! ## Sharing
//!
//! Catalogs and registries are built once and shared read-only through `Arc`.
//! Each encounter owns its own state and processor.

pub mod conditions;
pub mod content;
pub mod error;
pub mod payloads;
pub mod session;
pub mod tags;

pub use conditions::*;
pub use content::*;
pub use error::*;
pub use payloads::*;
pub use session::*;
pub use tags::*;
