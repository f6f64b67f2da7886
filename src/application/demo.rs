use crate::application::translate::TranslationFacade;
use serde_json::Value;

pub const DEMO_ENGLISH: &str = "Hello";
pub const DEMO_FRENCH: &str = "Bonjour";

// 无结果时的输出
pub const ABSENT: &str = "None";

/// Line printed for a translation result
pub fn display_result(result: Option<&str>) -> &str {
    result.unwrap_or(ABSENT)
}

/// The two demo lines: English to French, then French to English
pub async fn demo_lines(translator: &TranslationFacade) -> [String; 2] {
    let french = translator.english_to_french(DEMO_ENGLISH).await;
    let english = translator.french_to_english(DEMO_FRENCH).await;
    [
        display_result(french.as_deref()).to_string(),
        display_result(english.as_deref()).to_string(),
    ]
}

/// Output of a single command-line translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub line: String,
    pub exit_code: i32,
}

/// Translate one query; an absent result prints `None` and exits with 1.
///
/// With `json` the query is parsed as a JSON value first, and falls back to
/// the raw text when it is not valid JSON.
pub async fn run_query(
    translator: &TranslationFacade,
    query: &str,
    model_id: &str,
    json: bool,
) -> QueryOutput {
    let result = if json {
        let value =
            serde_json::from_str(query).unwrap_or_else(|_| Value::String(query.to_string()));
        translator.translate_value(&value, model_id).await
    } else {
        translator.translate(query, model_id).await
    };

    QueryOutput {
        line: display_result(result.as_deref()).to_string(),
        exit_code: if result.is_some() { 0 } else { 1 },
    }
}
