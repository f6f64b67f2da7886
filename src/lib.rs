pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use application::translate::TranslationFacade;
pub use domain::error::TranslatorError;
pub use domain::model::{TranslationRequest, TranslationResponse, EN_FR, FR_EN};
pub use domain::traits::TranslationClient;
