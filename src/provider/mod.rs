// src/provider/mod.rs — Reply gateway layer

pub mod potential;

use async_trait::async_trait;

use crate::core::emotion::EmotionLabel;
use crate::infra::errors::MindMateError;

/// One remote generation exchange per turn. Implementations must perform at
/// most one network request per invocation; every failure mode collapses to
/// [`MindMateError::Transport`], since the session handles them identically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyGateway: Send + Sync {
    async fn generate(
        &self,
        user_text: &str,
        emotion: EmotionLabel,
    ) -> Result<String, MindMateError>;
}
