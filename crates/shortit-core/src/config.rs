use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// is.gd JSON API; takes `format=json&url=...`.
pub const DEFAULT_PRIMARY_ENDPOINT: &str = "https://is.gd/create.php";
/// TinyURL plain-text API; takes `url=...`.
pub const DEFAULT_FALLBACK_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    30
}

/// Global configuration loaded from `~/.config/shortit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortitConfig {
    /// Primary shortening service (JSON response).
    pub primary_endpoint: String,
    /// Secondary shortening service used when the primary fails (plain-text response).
    pub fallback_endpoint: String,
    /// Connection timeout per request, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total timeout per request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional User-Agent header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ShortitConfig {
    fn default() -> Self {
        Self {
            primary_endpoint: DEFAULT_PRIMARY_ENDPOINT.to_string(),
            fallback_endpoint: DEFAULT_FALLBACK_ENDPOINT.to_string(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

/// Parsed service endpoints, ready for query building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub primary: Url,
    pub fallback: Url,
}

impl ShortitConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses both endpoints; each must be an absolute http(s) URL.
    pub fn endpoints(&self) -> Result<Endpoints> {
        Ok(Endpoints {
            primary: parse_endpoint("primary_endpoint", &self.primary_endpoint)?,
            fallback: parse_endpoint("fallback_endpoint", &self.fallback_endpoint)?,
        })
    }
}

fn parse_endpoint(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("{field}: invalid URL {raw:?}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("{field}: unsupported scheme {other:?} (expected http or https)"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shortit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShortitConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ShortitConfig> {
    if !path.exists() {
        let default_cfg = ShortitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ShortitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
