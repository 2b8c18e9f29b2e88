use std::path::PathBuf;

use bapsang_core::domain::common::{
    BapsangConfig, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DatabaseConfig, LLMConfig,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bapsang-api", about = "Korean dish nutrition analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    /// SQLite file holding the FOOD_NUTRITION table
    #[arg(long = "database-path", env = "DATABASE_PATH", default_value = "food_db.db")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    #[arg(long = "llm-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.0)]
    pub temperature: f32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Directive used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for BapsangConfig {
    fn from(args: Args) -> Self {
        BapsangConfig {
            database: DatabaseConfig {
                path: args.database.path,
            },
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                temperature: args.llm.temperature,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "bapsang-api",
            "--database-path",
            "/data/food.db",
            "--llm-api-key",
            "sk-test",
            "--llm-model",
            "gpt-4o",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = BapsangConfig::from(args);
        assert_eq!(config.database.path, PathBuf::from("/data/food.db"));
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.temperature, 0.0);
    }
}
