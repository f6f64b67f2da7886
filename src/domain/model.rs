use serde::{Deserialize, Serialize};

// 语言对标识
pub const EN_FR: &str = "en-fr";
pub const FR_EN: &str = "fr-en";

// 单次翻译请求，不做任何本地校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub model_id: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: model_id.into(),
        }
    }
}

// 远端返回的翻译结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResponse {
    pub translations: Vec<Translation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub translation: String,
}

impl TranslationResponse {
    /// Build a response carrying a single alternative
    pub fn single(translation: impl Into<String>) -> Self {
        Self {
            translations: vec![Translation {
                translation: translation.into(),
            }],
            word_count: None,
            character_count: None,
        }
    }

    /// First translation alternative, if the service returned any
    pub fn into_first(self) -> Option<String> {
        self.translations.into_iter().next().map(|t| t.translation)
    }
}
