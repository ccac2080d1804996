use crate::cli::Args;
use crate::models::{self, tier_by_id, ModelTier};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub stream_timeout: u64,
    pub verbose: bool,
    pub default_tier: &'static ModelTier,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub stream_timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_tier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        // Config file settings sit below env vars and CLI flags.
        let json_config = JsonConfig::load().unwrap_or_default();

        // API key is required from the environment.
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable not set".to_string())?;

        let api_endpoint = env::var("IVAN_API_ENDPOINT")
            .ok()
            .or(json_config.api.endpoint.clone())
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());

        let stream_timeout = env::var("IVAN_STREAM_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(json_config.api.stream_timeout)
            .unwrap_or(30);

        let verbose = args.verbose
            || env::var("IVAN_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(json_config.session.verbose)
                .unwrap_or(false);

        // Tier: CLI > env > config file > catalog default.
        let tier_id = args
            .model
            .clone()
            .or_else(|| env::var("IVAN_MODEL_TIER").ok())
            .or(json_config.model.default_tier.clone());

        let default_tier = match tier_id {
            Some(id) => {
                tier_by_id(&id).ok_or_else(|| format!("Unknown model tier: {}", id))?
            }
            None => models::default_tier(),
        };

        Ok(Self {
            api_key,
            api_endpoint,
            stream_timeout,
            verbose,
            default_tier,
        })
    }
}

impl JsonConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ivan").join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: JsonConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?;

        Ok(config)
    }
}
