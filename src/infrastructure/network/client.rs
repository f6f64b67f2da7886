use crate::domain::error::TranslatorError;
use crate::domain::model::{TranslationRequest, TranslationResponse};
use crate::domain::traits::TranslationClient;
use crate::infrastructure::config::Credentials;
use crate::infrastructure::network::auth::IamAuthenticator;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

// Watson Language Translator v3 request body
#[derive(Serialize, Debug)]
struct WatsonRequest<'a> {
    text: [&'a str; 1],
    model_id: &'a str,
}

/// Watson Language Translator client
pub struct WatsonTranslator {
    client: Client,
    service_url: String,
    version: String,
    authenticator: IamAuthenticator,
}

impl WatsonTranslator {
    pub fn new(
        client: Client,
        credentials: &Credentials,
        version: impl Into<String>,
        iam_url: impl Into<String>,
    ) -> Self {
        let authenticator =
            IamAuthenticator::new(client.clone(), credentials.api_key.clone(), iam_url);
        Self {
            client,
            service_url: credentials.service_url.clone(),
            version: version.into(),
            authenticator,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/translate", self.service_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationClient for WatsonTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslatorError> {
        let authorization = self.authenticator.authorization().await?;
        let body = WatsonRequest {
            text: [request.text.as_str()],
            model_id: request.model_id.as_str(),
        };

        tracing::debug!(model_id = %request.model_id, "sending translation request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("version", self.version.as_str())])
            .header("Authorization", authorization)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TranslatorError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let parsed: TranslationResponse = serde_json::from_str(&text)
            .map_err(|e| TranslatorError::MalformedResponse(e.to_string()))?;

        tracing::debug!(
            alternatives = parsed.translations.len(),
            "translation response received"
        );

        Ok(parsed)
    }
}

// Watson 错误体: {"code": 404, "error": "Model not found."}
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
