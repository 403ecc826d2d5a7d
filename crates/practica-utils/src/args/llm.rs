use clap::Args;

pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Connection settings of the OpenAI compatible provider used for course generation.
#[derive(Debug, Clone, Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENROUTER_API_KEY", required = false, hide_env_values = true)]
    pub openrouter_key: Option<String>,
    #[arg(long, env = "OPENROUTER_MODEL", default_value = DEFAULT_OPENROUTER_MODEL)]
    pub openrouter_model: String,
    #[arg(long, env = "OPENROUTER_BASE_URL", default_value = DEFAULT_OPENROUTER_BASE_URL)]
    pub openrouter_base_url: String,
    /// Sent as `HTTP-Referer`
    #[arg(long, env = "OPENROUTER_SITE_URL", required = false)]
    pub openrouter_site_url: Option<String>,
    /// Sent as `X-Title`
    #[arg(long, env = "OPENROUTER_APP_NAME", required = false)]
    pub openrouter_app_name: Option<String>,
    /// Seconds until a single provider request is abandoned
    #[arg(long, default_value_t = 60)]
    pub openrouter_timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        llm: LlmArgs,
    }

    #[test]
    fn test_explicit_values() {
        let cli = Cli::parse_from([
            "practica",
            "--openrouter-key",
            "sk-test",
            "--openrouter-model",
            "anthropic/claude-3-haiku",
            "--openrouter-app-name",
            "Practica",
        ]);
        assert_eq!(cli.llm.openrouter_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.llm.openrouter_model, "anthropic/claude-3-haiku");
        assert_eq!(cli.llm.openrouter_app_name.as_deref(), Some("Practica"));
        assert_eq!(cli.llm.openrouter_timeout, 60);
    }
}
