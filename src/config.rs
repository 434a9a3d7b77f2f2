use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Config {
    /// A missing key is not fatal here; the provider rejects the request later.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GROQ_API_KEY").unwrap_or_else(|| {
            tracing::warn!("GROQ_API_KEY is not set, playlist requests will fail");
            String::new()
        });

        Self {
            api_key,
            base_url: non_empty("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    #[cfg(test)]
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_key: "test-key".to_string(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "gsk_abc")]));
        assert_eq!(config.api_key, "gsk_abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn overrides_are_respected() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "k"),
            ("GROQ_BASE_URL", "http://localhost:8080/v1"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("UNRELATED", "x"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("GROQ_MODEL", "  ")]));
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
