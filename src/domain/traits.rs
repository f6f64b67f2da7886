use crate::domain::error::TranslatorError;
use crate::domain::model::{TranslationRequest, TranslationResponse};
use async_trait::async_trait;

/// Trait for remote translation services
///
/// Implementations own transport, authentication and endpoint configuration.
/// They are constructed once and shared read-only between calls.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Send one translation request and return the decoded response
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslatorError>;
}
