use crate::domain::error::TranslatorError;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
// 服务端返回的有效期不可信，超过一天按一天处理
const MAX_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
    expiration: Option<i64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    refresh_at: i64,
}

/// Exchanges an API key for IAM bearer tokens and caches them
pub struct IamAuthenticator {
    client: Client,
    api_key: String,
    iam_url: String,
    token: RwLock<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn new(client: Client, api_key: impl Into<String>, iam_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            iam_url: iam_url.into(),
            token: RwLock::new(None),
        }
    }

    /// Value for the `Authorization` header
    pub async fn authorization(&self) -> Result<String, TranslatorError> {
        Ok(format!("Bearer {}", self.access_token().await?))
    }

    pub async fn access_token(&self) -> Result<String, TranslatorError> {
        let now = Utc::now().timestamp();

        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.refresh_at > now) {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.token.write().await;
        // 另一个调用可能已在等待写锁期间刷新
        if let Some(token) = cached.as_ref().filter(|t| t.refresh_at > now) {
            return Ok(token.access_token.clone());
        }

        let fresh = self.request_token(now).await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    async fn request_token(&self, now: i64) -> Result<CachedToken, TranslatorError> {
        tracing::debug!(url = %self.iam_url, "requesting IAM token");

        let response = self
            .client
            .post(&self.iam_url)
            .header("Accept", "application/json")
            .form(&[("grant_type", GRANT_TYPE), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::Auth(format!(
                "IAM token request failed ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| TranslatorError::Auth(format!("Invalid IAM token response: {}", e)))?;

        if token.access_token.is_empty() {
            return Err(TranslatorError::Auth("IAM returned an empty token".to_string()));
        }

        Ok(CachedToken {
            refresh_at: refresh_at(now, token.expires_in, token.expiration),
            access_token: token.access_token,
        })
    }
}

/// Refresh once 80% of the token lifetime has elapsed
fn refresh_at(now: i64, expires_in: Option<i64>, expiration: Option<i64>) -> i64 {
    let lifetime = expires_in
        .or_else(|| expiration.map(|exp| exp.saturating_sub(now)))
        .unwrap_or(0)
        .clamp(0, MAX_TOKEN_LIFETIME_SECS);
    now.saturating_add(lifetime * 8 / 10)
}
