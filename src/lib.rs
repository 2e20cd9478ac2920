//! Countrydex: a Zellij plugin for browsing the world's countries.
//!
//! The plugin fetches the REST Countries catalog once, then lets the user page
//! through it ten countries at a time and narrow it with a live, case-sensitive
//! search over name, capital, region, and subregion.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← web_request, keys
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - ListViewModel: search + pagination               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Catalog (catalog/)    │   │ UI Layer (ui/)          │
//! │ - Response decoding   │   │ - Components, themes    │
//! │ - In-memory cache     │   │ - ANSI rendering        │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/countrydex.wasm" {
//!         endpoint "https://restcountries.com/v3.1/all"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use countrydex::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchCountries { .. }));
//!
//! let body = br#"[{"name":{"common":"Chad"},"capital":["N'Djamena"],"region":"Africa","cca3":"TCD"}]"#;
//! handle_event(&mut state, &Event::CountriesFetched { status: 200, body: body.to_vec() })?;
//! assert_eq!(state.list.visible_page().countries[0].display_name(), "Chad");
//! # Ok::<(), countrydex::CountrydexError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ListViewModel, LoadState};
pub use domain::{Country, CountryCode, CountrydexError, Result};
pub use ui::Theme;

use catalog::DEFAULT_ENDPOINT;
use std::collections::BTreeMap;

/// Plugin configuration parsed from the KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL returning the JSON country array. Only `http`/`https` are accepted.
    pub endpoint: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` resolves to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the trace log. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank values count as unset. An endpoint that is not an http(s) URL is
    /// logged and replaced with the default.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use countrydex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "ftp://mirror/all".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "https://restcountries.com/v3.1/all");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        let endpoint = match value("endpoint") {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => url,
            Some(url) => {
                tracing::warn!(endpoint = %url, "endpoint is not an http(s) URL, using default");
                defaults.endpoint
            }
            None => defaults.endpoint,
        };

        Self {
            endpoint,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// A file or name that fails to load is logged and skipped.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme file"),
            }
        }

        if let Some(name) = &self.theme_name {
            match Theme::from_name(name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %name, "unknown theme, using default"),
            }
        }

        Theme::default()
    }
}

/// Builds the initial application state: resolved theme, empty catalog, idle.
///
/// Nothing is fetched here; the first fetch is requested once Zellij grants
/// web access.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing countrydex");
    AppState::new(config.resolve_theme(), config.endpoint.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::from_zellij(&map(&[("trace_level", "  ")])), Config::default());
    }

    #[test]
    fn custom_endpoint_is_kept() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/v3.1/all"),
            ("trace_level", "countrydex=debug"),
        ]));
        assert_eq!(config.endpoint, "http://localhost:8080/v3.1/all");
        assert_eq!(config.trace_level, "countrydex=debug");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "from-file");
    }

    #[test]
    fn broken_theme_sources_fall_back() {
        let config = Config {
            theme_file: Some("~/missing/theme.toml".to_string()),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-frappe");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme(), Theme::default());
    }

    #[test]
    fn initialize_starts_idle_with_endpoint() {
        let state = initialize(&Config::default());
        assert_eq!(state.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(state.list.load_state(), &LoadState::Idle);
        assert!(state.list.catalog().is_empty());
    }
}
