use crate::domain::error::TranslatorError;
use crate::domain::model::{TranslationRequest, EN_FR, FR_EN};
use crate::domain::traits::TranslationClient;
use serde_json::Value;
use std::sync::Arc;

/// Stateless facade over a remote translation client.
///
/// Every failure collapses to `None` at this boundary; the cause is only
/// logged. Use [`TranslationFacade::try_translate`] to keep it.
#[derive(Clone)]
pub struct TranslationFacade {
    client: Arc<dyn TranslationClient>,
}

impl TranslationFacade {
    pub fn new(client: Arc<dyn TranslationClient>) -> Self {
        Self { client }
    }

    pub async fn translate(&self, text: &str, model_id: &str) -> Option<String> {
        match self.try_translate(text, model_id).await {
            Ok(translation) => Some(translation),
            Err(e) => {
                tracing::warn!(model_id, error = %e, "translation failed");
                None
            }
        }
    }

    /// Translate a dynamically typed value; anything but a string is absent.
    pub async fn translate_value(&self, text: &Value, model_id: &str) -> Option<String> {
        match text {
            Value::String(s) => self.translate(s, model_id).await,
            other => {
                let err = TranslatorError::InvalidInput(format!(
                    "expected a string, got {}",
                    value_kind(other)
                ));
                tracing::debug!(model_id, error = %err, "translation skipped");
                None
            }
        }
    }

    pub async fn english_to_french(&self, text: &str) -> Option<String> {
        self.translate(text, EN_FR).await
    }

    pub async fn french_to_english(&self, text: &str) -> Option<String> {
        self.translate(text, FR_EN).await
    }

    pub async fn try_translate(&self, text: &str, model_id: &str) -> Result<String, TranslatorError> {
        let request = TranslationRequest::new(text, model_id);
        let response = self.client.translate(&request).await?;
        response.into_first().ok_or_else(|| {
            TranslatorError::MalformedResponse("response contained no translations".to_string())
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
