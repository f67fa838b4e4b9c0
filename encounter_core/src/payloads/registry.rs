//! Payload registry - maps payload ids to mechanical effects.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::{MechanicalEffect, PayloadId};
use crate::error::{EngineError, Result};

/// Process-wide mapping from payload id to effect.
///
/// Populated at startup and then shared read-only (typically behind an `Arc`)
/// by every encounter's processor.
#[derive(Debug, Default)]
pub struct PayloadRegistry {
    effects: HashMap<PayloadId, Arc<dyn MechanicalEffect>>,
}

impl PayloadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect under `id`. Ids must be unique.
    pub fn register(&mut self, id: impl Into<PayloadId>, effect: impl MechanicalEffect + 'static) -> Result<()> {
        self.register_shared(id.into(), Arc::new(effect))
    }

    /// Register an effect that is already shared elsewhere.
    pub fn register_shared(&mut self, id: PayloadId, effect: Arc<dyn MechanicalEffect>) -> Result<()> {
        if self.effects.contains_key(&id) {
            return Err(EngineError::DuplicatePayload(id));
        }
        debug!(payload = %id, "payload registered");
        self.effects.insert(id, effect);
        Ok(())
    }

    /// Look up the effect for `id`.
    pub fn get_effect(&self, id: &PayloadId) -> Result<&Arc<dyn MechanicalEffect>> {
        self.effects
            .get(id)
            .ok_or_else(|| EngineError::PayloadNotFound(id.clone()))
    }

    pub fn contains(&self, id: &PayloadId) -> bool {
        self.effects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::EffectSpec;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PayloadRegistry::new();
        registry
            .register("press_advantage", EffectSpec::Momentum { amount: 2 })
            .unwrap();

        let effect = registry.get_effect(&"press_advantage".into()).unwrap();
        assert_eq!(effect.description_for_player(), "+2 Momentum");
        assert!(registry.contains(&PayloadId::new("press_advantage")));
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let mut registry = PayloadRegistry::new();
        registry.register("calm", EffectSpec::Pressure { amount: -1 }).unwrap();

        let first = registry.get_effect(&"calm".into()).unwrap().clone();
        let second = registry.get_effect(&"calm".into()).unwrap().clone();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unknown_payload() {
        let registry = PayloadRegistry::new();
        let err = registry.get_effect(&"missing".into()).unwrap_err();
        assert!(matches!(err, EngineError::PayloadNotFound(id) if id.as_str() == "missing"));
    }

    #[test]
    fn test_duplicate_payload_rejected() {
        let mut registry = PayloadRegistry::new();
        registry.register("rest", EffectSpec::Focus { amount: 2 }).unwrap();

        let err = registry.register("rest", EffectSpec::None).unwrap_err();
        assert!(matches!(err, EngineError::DuplicatePayload(_)));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_effect(&"rest".into()).unwrap().description_for_player(),
            "+2 Focus Points"
        );
    }
}
