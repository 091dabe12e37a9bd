use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub api_base: String,
    pub page_size: u32,
    pub page_delay_ms: u64,
    pub timeout_ms: u64,
    pub default_max_comments: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: "https://www.googleapis.com/youtube/v3".to_string(),
            page_size: 100,
            page_delay_ms: 500,
            timeout_ms: 30_000,
            default_max_comments: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { top_words: 50 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_base) = env::var("YOUTUBE_API_BASE") {
            if !api_base.trim().is_empty() {
                self.fetch.api_base = api_base;
            }
        }
        if let Ok(page_size) = env::var("FETCH_PAGE_SIZE") {
            if let Ok(value) = page_size.parse::<u32>() {
                self.fetch.page_size = value;
            }
        }
        if let Ok(delay) = env::var("FETCH_PAGE_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.fetch.page_delay_ms = value;
            }
        }
        if let Ok(timeout) = env::var("FETCH_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.fetch.timeout_ms = value;
            }
        }
        if let Ok(top_words) = env::var("TOP_WORDS") {
            if let Ok(value) = top_words.parse::<usize>() {
                self.analysis.top_words = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("COMMENTSCOPE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/commentscope.toml")))
}
