use crate::application::translate::TranslationFacade;
use crate::domain::error::TranslatorError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::WatsonTranslator;
use crate::infrastructure::network::http::create_client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub translator: TranslationFacade,
}

impl AppState {
    /// Fails when either credential is missing
    pub fn new(config: &Config) -> Result<Self, TranslatorError> {
        let credentials = config.credentials()?;
        let http_client = create_client(&config.http)?;

        let client = WatsonTranslator::new(
            http_client,
            &credentials,
            config.watson.version.clone(),
            config.watson.iam_url.clone(),
        );

        Ok(Self {
            translator: TranslationFacade::new(Arc::new(client)),
        })
    }
}
