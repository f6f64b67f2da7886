// HTTP client utilities
use crate::domain::error::TranslatorError;
use crate::infrastructure::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Create the shared HTTP client.
///
/// The source service defines no timeout, so one is always set here.
pub fn create_client(config: &HttpConfig) -> Result<Client, TranslatorError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.timeout_secs.max(1)))
        .user_agent(config.user_agent.as_str());

    if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
