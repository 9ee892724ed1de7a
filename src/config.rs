//! TOML configuration.
//!
//! ```toml
//! [api]
//! base = "http://www.colourlovers.com/api/palettes/top"
//! batch_size = 20
//!
//! [view]
//! strategy = "concentric"
//! reverse = false
//! width = 320.0
//! height = 320.0
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use url::Url;
use crate::fetch::{FetchService, Transport, DEFAULT_API_BASE, DEFAULT_BATCH_SIZE};
use crate::geometry::Rect;
use crate::render::Strategy;
use crate::view::PaletteView;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Where palettes are fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base: Url,
    pub batch_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig { base: DEFAULT_API_BASE.clone(),
                    batch_size: DEFAULT_BATCH_SIZE }
    }
}

impl ApiConfig {
    pub fn service<T: Transport>(&self, transport: T) -> FetchService<T> {
        FetchService::new(transport)
            .with_base(self.base.clone())
            .with_batch_size(self.batch_size)
    }
}

/// How palettes are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub strategy: Strategy,
    pub reverse: bool,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig { strategy: Strategy::Bisection, reverse: true,
                     width: 320., height: 320. }
    }
}

impl ViewConfig {
    /// An empty view drawing with these settings.
    pub fn view(&self) -> PaletteView {
        let mut view = PaletteView::new();
        view.set_strategy(Some(self.strategy));
        view.set_reverse(self.reverse);
        view
    }

    pub fn bounds(&self) -> Rect { Rect::from_size(self.width, self.height) }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub view: ViewConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| {
            ConfigError::Io { path: path.to_path_buf(), source } })?;
        Self::from_toml_str(&data)
    }

    /// The configuration of `path`, or the defaults together with the
    /// reason `path` could not be used.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.api.batch_size, 20);
        assert_eq!(cfg.view.strategy, Strategy::Bisection);
        assert!(cfg.view.reverse);
    }

    #[test]
    fn partial_sections() {
        let cfg = Config::from_toml_str(
            "[api]\nbase = \"http://example.com/top\"\n\
             [view]\nstrategy = \"circular\"\nwidth = 100.0\n").unwrap();
        assert_eq!(cfg.api.base.as_str(), "http://example.com/top");
        assert_eq!(cfg.api.batch_size, 20);
        assert_eq!(cfg.view.strategy, Strategy::Concentric);
        assert_eq!(cfg.view.bounds(), Rect::from_size(100., 320.));
        let view = cfg.view.view();
        assert_eq!(view.strategy(), Some(Strategy::Concentric));
        assert!(view.reverse());
    }

    #[test]
    fn strategy_names_ignore_case() {
        let cfg = Config::from_toml_str("[view]\nstrategy = \"Concentric\"").unwrap();
        assert_eq!(cfg.view.strategy, Strategy::Concentric);
        let cfg = Config::from_toml_str("[view]\nstrategy = \"BAYESIAN\"").unwrap();
        assert_eq!(cfg.view.strategy, Strategy::Bisection);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(Config::from_toml_str("[view]\nstrategy = \"spiral\""),
                         Err(ConfigError::Toml(_))));
        assert!(Config::from_toml_str("[api]\nbase = \"not a url\"").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let (cfg, err) = Config::load_or_default("/nonexistent/mosaic.toml");
        assert_eq!(cfg, Config::default());
        assert!(err.unwrap().contains("/nonexistent/mosaic.toml"));
    }

    #[test]
    fn service_from_config() {
        let api = ApiConfig { batch_size: 7, ..ApiConfig::default() };
        let service = api.service(|_: &Url| -> Result<Vec<u8>, crate::FetchError> {
            Ok(b"[]".to_vec())
        });
        assert_eq!(service.batch_size(), 7);
        assert_eq!(service.base(), &*DEFAULT_API_BASE);
    }
}
