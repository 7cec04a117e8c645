use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key; catalog calls fail with `NotConfigured` when absent
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image CDN base URL
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Base URL of the local Ollama instance
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Ollama model used by the chat assistant
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,

    /// Directory for the on-device ledger and profile snapshots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Poster image size variants supported by the TMDB image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    Small,
    Medium,
    Large,
    Original,
}

impl PosterSize {
    fn path_segment(self) -> &'static str {
        match self {
            PosterSize::Small => "/w185",
            PosterSize::Medium => "/w342",
            PosterSize::Large => "/w500",
            PosterSize::Original => "/original",
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Whether a usable TMDB key is present
    pub fn is_configured(&self) -> bool {
        self.tmdb_api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    pub fn poster_url(&self, path: &str, size: PosterSize) -> String {
        format!("{}{}{}", self.tmdb_image_url, size.path_segment(), path)
    }

    pub fn backdrop_url(&self, path: &str) -> String {
        format!("{}/w780{}", self.tmdb_image_url, path)
    }
}
