//! Configuration loading and validation for bookcase.
//!
//! Values are layered with [`figment`], later layers overriding earlier ones:
//!
//! 1. Built-in defaults (see [`Config::default`]).
//! 2. A config file: either an explicit path ([`Config::load_from`]), or any
//!    of `config.{toml,yaml,yml,json}` found in the per-user config directory
//!    ([`Config::load`]). The format is chosen by file extension.
//! 3. Environment variables prefixed with `BOOKCASE_`, e.g.
//!    `BOOKCASE_PAGE_SIZE=12` or `BOOKCASE_THEME=night`.
//!
//! ```toml
//! page_size = 36
//! theme = "night"
//! catalog = "/srv/bookcase/books.json"
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use bookcase_browse::{DEFAULT_PAGE_SIZE, Session, Theme};
use bookcase_catalog::Catalog;
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "BOOKCASE_";
/// Config file extensions searched for, in merge order.
pub const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Books revealed per page; at least 1.
    pub page_size: usize,
    /// Forced theme. When unset, the environment's color scheme preference
    /// decides (see [`Config::theme`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// JSON catalog to browse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE.get(), theme: None, catalog: None }
    }
}

impl Config {
    /// Loads configuration from the per-user config directory (if any config
    /// files exist there) and the environment.
    #[instrument]
    pub fn load() -> Result<Self> {
        let files: Vec<PathBuf> = Self::search_paths().into_iter().filter(|path| path.exists()).collect();
        tracing::debug!(files = ?files, "Discovered config files");
        Self::load_layers(&files)
    }

    /// Loads configuration from an explicit file, plus the environment.
    ///
    /// Unlike [`Config::load`], the file must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        Self::load_layers(&[path.to_path_buf()])
    }

    /// Candidate config file locations, e.g. `~/.config/bookcase/config.toml`
    /// on Linux. Empty if no home directory can be determined.
    pub fn search_paths() -> Vec<PathBuf> {
        ProjectDirs::from("", "", "bookcase")
            .map(|dirs| EXTENSIONS.iter().map(|ext| dirs.config_dir().join(format!("config.{ext}"))).collect())
            .unwrap_or_default()
    }

    fn load_layers(files: &[PathBuf]) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        for file in files {
            figment = match file.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(file)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
                Some("json") => figment.merge(Json::file(file)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(file.clone())),
            };
        }
        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            exn::bail!(ErrorKind::Invalid("page_size"));
        }
        Ok(())
    }

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// The configured theme, or else the one matching the environment's
    /// color scheme preference.
    pub fn theme(&self, prefers_dark: bool) -> Theme {
        self.theme.unwrap_or_else(|| Theme::preferred(prefers_dark))
    }

    /// Loads the configured catalog, if one is configured.
    pub fn load_catalog(&self) -> Result<Option<Catalog>> {
        self.catalog.as_deref().map(|path| Catalog::from_path(path).or_raise(|| ErrorKind::Catalog)).transpose()
    }

    /// Starts a browsing session over `catalog` with the configured page size
    /// and theme.
    pub fn session<'c>(&self, catalog: &'c Catalog, prefers_dark: bool) -> Session<'c> {
        Session::with_page_size(catalog, self.page_size()).with_theme(self.theme(prefers_dark))
    }
}
