//! 配置功能测试

use mt_translate::infrastructure::config::{
    load_config_from, write_config_sample, Config, ENV_API_KEY, ENV_SERVICE_URL,
};
use mt_translate::state::AppState;
use mt_translate::TranslatorError;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.watson.api_key, None);
    assert_eq!(config.watson.url, None);
    assert_eq!(config.watson.version, "2018-05-01");
    assert_eq!(
        config.watson.iam_url,
        "https://iam.cloud.ibm.com/identity/token"
    );
    assert_eq!(config.http.timeout_secs, 30);
    assert!(config.http.user_agent.starts_with("mt/"));
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
[watson]
api_key = "secret"
url = "https://api.eu-de.language-translator.watson.cloud.ibm.com/instances/abc/"

[http]
timeout_secs = 5
proxy = "http://127.0.0.1:8080"

[logging]
enable = false
path = "/tmp/mt.log"
level = "DEBUG"
"#;

    let config: Config = toml::from_str(toml_content).unwrap();

    assert_eq!(config.watson.api_key.as_deref(), Some("secret"));
    assert_eq!(config.watson.version, "2018-05-01");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.http.proxy.as_deref(), Some("http://127.0.0.1:8080"));
    assert!(!config.logging.enable);
    assert_eq!(config.logging.level, "DEBUG");

    let credentials = config.credentials().unwrap();
    assert_eq!(credentials.api_key, "secret");
    assert_eq!(
        credentials.service_url,
        "https://api.eu-de.language-translator.watson.cloud.ibm.com/instances/abc"
    );
}

#[test]
fn test_missing_credentials_are_fatal() {
    let config = Config::default();
    let err = config.credentials().unwrap_err();
    assert!(matches!(err, TranslatorError::Config(ref msg) if msg.contains("API key")));

    let mut config = Config::default();
    config.watson.api_key = Some("secret".to_string());
    let err = config.credentials().unwrap_err();
    assert!(matches!(err, TranslatorError::Config(ref msg) if msg.contains("Service URL")));

    let mut config = Config::default();
    config.watson.api_key = Some("   ".to_string());
    config.watson.url = Some("https://example.com".to_string());
    assert!(config.credentials().is_err());
}

#[test]
fn test_env_overrides_file_values() {
    let mut config = Config::default();
    config.watson.api_key = Some("from-file".to_string());
    config.watson.url = Some("https://file.example.com".to_string());

    config.apply_env(env(&[
        (ENV_API_KEY, "from-env"),
        (ENV_SERVICE_URL, "https://env.example.com"),
    ]));

    let credentials = config.credentials().unwrap();
    assert_eq!(credentials.api_key, "from-env");
    assert_eq!(credentials.service_url, "https://env.example.com");
}

#[test]
fn test_blank_env_keeps_file_values() {
    let mut config = Config::default();
    config.watson.api_key = Some("from-file".to_string());

    config.apply_env(env(&[(ENV_API_KEY, ""), (ENV_SERVICE_URL, "  ")]));

    assert_eq!(config.watson.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.watson.url, None);
}

#[test]
fn test_env_names_match_dotenv_convention() {
    assert_eq!(ENV_API_KEY, "apikey");
    assert_eq!(ENV_SERVICE_URL, "url");
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[watson]\napi_key = \"k\"\nurl = \"https://u\"\n").unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.watson.api_key.as_deref(), Some("k"));
    assert_eq!(config.watson.url.as_deref(), Some("https://u"));
}

#[test]
fn test_missing_or_broken_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.http.timeout_secs, 30);

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[watson\napi_key = ").unwrap();
    let config = load_config_from(&broken).unwrap();
    assert_eq!(config.watson.api_key, None);
}

#[test]
fn test_write_config_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    assert!(write_config_sample(&path).unwrap());
    assert!(!write_config_sample(&path).unwrap());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[watson]"));
    assert!(written.contains("[logging]"));

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.watson.version, "2018-05-01");
    assert!(config.credentials().is_err());
}

#[test]
fn test_app_state_requires_credentials() {
    let config = Config::default();
    assert!(matches!(
        AppState::new(&config),
        Err(TranslatorError::Config(_))
    ));

    let mut config = Config::default();
    config.watson.api_key = Some("secret".to_string());
    config.watson.url = Some("https://example.com".to_string());
    assert!(AppState::new(&config).is_ok());
}
