//! Engine errors

use thiserror::Error;

use crate::content::ContentError;
use crate::payloads::PayloadId;

/// Engine result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by catalog construction and payload resolution.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("payload not registered: {0}")]
    PayloadNotFound(PayloadId),

    #[error("payload registered twice: {0}")]
    DuplicatePayload(PayloadId),

    #[error("tag defined twice: {0}")]
    DuplicateTag(String),

    #[error("condition of tag {tag} nests {depth} levels deep (max {max})")]
    ConditionTooDeep { tag: String, depth: usize, max: usize },

    #[error("effect of payload {payload} nests {depth} levels deep (max {max})")]
    EffectTooDeep {
        payload: PayloadId,
        depth: usize,
        max: usize,
    },

    #[error(transparent)]
    Content(#[from] ContentError),
}
