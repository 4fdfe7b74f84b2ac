//! Service configuration read from the environment at startup.

use std::path::PathBuf;

use tracing::warn;
use trip_rag::RetrievalConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_GUIDES_PATH: &str = "data/local_guides.json";
pub const DEFAULT_FRONTEND_PATH: &str = "frontend/index.html";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Credentials and endpoint for the chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Answer with a fake model instead of calling a provider.
    pub test_mode: bool,
    /// Augment prompts with local guide snippets.
    pub enable_rag: bool,
    pub guides_path: PathBuf,
    pub frontend_path: PathBuf,
    pub retrieval: RetrievalConfig,
    /// `None` when no API key is configured.
    pub model: Option<ModelSettings>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            test_mode: false,
            enable_rag: false,
            guides_path: PathBuf::from(DEFAULT_GUIDES_PATH),
            frontend_path: PathBuf::from(DEFAULT_FRONTEND_PATH),
            retrieval: RetrievalConfig::default(),
            model: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `TRIP_HOST` | `127.0.0.1` |
    /// | `TRIP_PORT` | `8000` |
    /// | `TEST_MODE` | off |
    /// | `ENABLE_RAG` | off |
    /// | `LOCAL_GUIDES_PATH` | `data/local_guides.json` |
    /// | `FRONTEND_PATH` | `frontend/index.html` |
    /// | `RAG_TOP_K` | `3` |
    /// | `OPENAI_API_KEY` | unset |
    /// | `OPENAI_BASE_URL` | api.openai.com |
    /// | `OPENAI_MODEL` | `gpt-4o-mini` |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("TRIP_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid TRIP_PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let retrieval = match var("RAG_TOP_K") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .and_then(|k| RetrievalConfig::builder().top_k(k).build().ok())
                .unwrap_or_else(|| {
                    warn!(value = %raw, "invalid RAG_TOP_K, using default");
                    RetrievalConfig::default()
                }),
            None => RetrievalConfig::default(),
        };

        let model = var("OPENAI_API_KEY").map(|api_key| ModelSettings {
            api_key,
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("OPENAI_BASE_URL"),
        });

        Self {
            host: var("TRIP_HOST").unwrap_or(defaults.host),
            port,
            test_mode: var("TEST_MODE").is_some_and(|v| is_truthy(&v)),
            enable_rag: var("ENABLE_RAG").is_some_and(|v| is_truthy(&v)),
            guides_path: var("LOCAL_GUIDES_PATH").map(PathBuf::from).unwrap_or(defaults.guides_path),
            frontend_path: var("FRONTEND_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.frontend_path),
            retrieval,
            model,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_switches_and_paths() {
        let config = config_from(&[
            ("TEST_MODE", "1"),
            ("ENABLE_RAG", "True"),
            ("TRIP_HOST", "0.0.0.0"),
            ("TRIP_PORT", "9001"),
            ("LOCAL_GUIDES_PATH", "/srv/guides.json"),
            ("RAG_TOP_K", "5"),
        ]);
        assert!(config.test_mode);
        assert!(config.enable_rag);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
        assert_eq!(config.guides_path, PathBuf::from("/srv/guides.json"));
        assert_eq!(config.retrieval.top_k, 5);
    }

    #[test]
    fn falsy_and_invalid_values_fall_back() {
        let config = config_from(&[
            ("TEST_MODE", "0"),
            ("ENABLE_RAG", "nope"),
            ("TRIP_PORT", "not-a-port"),
            ("RAG_TOP_K", "0"),
        ]);
        assert!(!config.test_mode);
        assert!(!config.enable_rag);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.retrieval, RetrievalConfig::default());
    }

    #[test]
    fn model_settings_need_api_key() {
        assert!(config_from(&[("OPENAI_MODEL", "gpt-4o")]).model.is_none());

        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "https://openrouter.ai/api/v1"),
        ]);
        let model = config.model.unwrap();
        assert_eq!(model.api_key, "sk-test");
        assert_eq!(model.model, DEFAULT_MODEL);
        assert_eq!(model.base_url.as_deref(), Some("https://openrouter.ai/api/v1"));
    }
}
