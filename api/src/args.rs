use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use plantcare_core::domain::common::{LLMConfig, PlantcareConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "plantcare-api", version, about = "Plant care analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list. When empty the request origin is mirrored.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MAX_TOKENS", default_value_t = 1000)]
    pub openai_max_tokens: u32,

    #[arg(long, env = "OPENAI_TEMPERATURE", default_value_t = 0.7)]
    pub openai_temperature: f32,

    #[arg(long, env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub openai_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl From<&Args> for PlantcareConfig {
    fn from(args: &Args) -> Self {
        PlantcareConfig {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key.clone(),
                openai_model: args.llm.openai_model.clone(),
                openai_base_url: args.llm.openai_base_url.clone(),
                max_tokens: args.llm.openai_max_tokens,
                temperature: args.llm.openai_temperature,
                timeout: Duration::from_secs(args.llm.openai_timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["plantcare-api", "--openai-api-key", "sk-test"]);
        let config = PlantcareConfig::from(&args);

        assert_eq!(config.llm.openai_model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.llm.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_allowed_origins_are_split() {
        let args = Args::parse_from([
            "plantcare-api",
            "--openai-api-key",
            "sk-test",
            "--allowed-origins",
            "http://localhost:3000,https://app.example.com",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }
}
