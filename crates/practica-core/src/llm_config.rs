use std::time::Duration;

use async_openai::config::OpenAIConfig;
use practica_utils::args::llm::{DEFAULT_OPENROUTER_BASE_URL, DEFAULT_OPENROUTER_MODEL, LlmArgs};
use reqwest::header::{HeaderMap, HeaderValue};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, TypedBuilder)]
pub struct LlmConfig {
    #[builder(default, setter(strip_option, into))]
    api_key: Option<String>,
    #[builder(default = DEFAULT_OPENROUTER_MODEL.to_owned(), setter(into))]
    model: String,
    #[builder(default = DEFAULT_OPENROUTER_BASE_URL.to_owned(), setter(into))]
    base_url: String,
    #[builder(default, setter(strip_option, into))]
    site_url: Option<String>,
    #[builder(default, setter(strip_option, into))]
    app_name: Option<String>,
    #[builder(default = Duration::from_secs(60))]
    timeout: Duration,
}

impl From<LlmArgs> for LlmConfig {
    fn from(args: LlmArgs) -> Self {
        Self {
            api_key: args.openrouter_key.filter(|key| !key.trim().is_empty()),
            model: args.openrouter_model,
            base_url: args.openrouter_base_url,
            site_url: args.openrouter_site_url,
            app_name: args.openrouter_app_name,
            timeout: Duration::from_secs(args.openrouter_timeout),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn openai_config(&self) -> OpenAIConfig {
        let mut openai_config = OpenAIConfig::default().with_api_base(&self.base_url);
        if let Some(api_key) = &self.api_key {
            openai_config = openai_config.with_api_key(api_key);
        }
        openai_config
    }

    /// Attribution headers OpenRouter shows in its dashboard. Values that are not valid header
    /// text are skipped.
    #[must_use]
    pub fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let attribution = [("http-referer", &self.site_url), ("x-title", &self.app_name)];
        for (name, value) in attribution {
            let Some(value) = value else { continue };
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.insert(name, value);
                }
                Err(_) => tracing::warn!(header = name, "ignoring invalid header value"),
            }
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let config = LlmConfig::builder()
            .api_key("sk-test")
            .site_url("https://practica.example")
            .build();
        let headers = config.default_headers();

        assert_eq!(headers.get("HTTP-Referer").unwrap(), "https://practica.example");
        assert!(headers.get("X-Title").is_none());
        assert_eq!(config.model(), DEFAULT_OPENROUTER_MODEL);
    }

    #[test]
    fn test_blank_key_from_args_is_missing() {
        let config = LlmConfig::from(LlmArgs {
            openrouter_key: Some("  ".to_owned()),
            openrouter_model: "openai/gpt-4o".to_owned(),
            openrouter_base_url: DEFAULT_OPENROUTER_BASE_URL.to_owned(),
            openrouter_site_url: None,
            openrouter_app_name: None,
            openrouter_timeout: 5,
        });

        assert_eq!(config.api_key(), None);
        assert_eq!(config.model(), "openai/gpt-4o");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
