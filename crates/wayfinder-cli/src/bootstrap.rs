//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Navigation backend client (via wayfinder-http)
//! - Console notification sink and SVG surface (this crate)
//! - Navigator (via wayfinder-core)
//!
//! Command handlers receive the composed `CliContext`.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use wayfinder_core::{
    NavigationApiPort, Navigator, NavigatorDeps, NavigatorSettings, NotificationService,
    SpeechRecognizerPort,
};
use wayfinder_http::{DEFAULT_API_BASE_URL, DefaultNavigationClient, HttpClientConfig};

use crate::console::ConsoleSink;
use crate::error::CliError;
use crate::parser::Cli;
use crate::svg::SvgSurface;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the navigation backend.
    pub api_base_url: String,
    /// Navigator settings, defaulted unless a settings file was given.
    pub settings: NavigatorSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            settings: NavigatorSettings::default(),
        }
    }
}

impl CliConfig {
    /// Resolve configuration from parsed arguments (and the environment
    /// clap already folded in).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = match &cli.settings {
            Some(path) => load_settings(path)?,
            None => NavigatorSettings::default(),
        };
        Ok(Self {
            api_base_url: cli
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            settings,
        })
    }
}

/// Read and validate a JSON settings file.
pub fn load_settings(path: &Path) -> Result<NavigatorSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    NavigatorSettings::from_json_str(&json)
        .with_context(|| format!("Invalid settings in {}", path.display()))
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The navigator, drawing into an SVG document.
    pub navigator: Navigator<SvgSurface>,
}

impl CliContext {
    /// Wire the HTTP backend, console notifications and an SVG surface.
    pub fn bootstrap(
        config: &CliConfig,
        recognizer: Arc<dyn SpeechRecognizerPort>,
    ) -> Result<Self, CliError> {
        let client_config = HttpClientConfig::new().with_base_url(config.api_base_url.clone());
        let client = DefaultNavigationClient::new(&client_config)?;
        tracing::debug!(base_url = %config.api_base_url, "Bootstrapped navigation client");
        Ok(Self::with_api(config, Arc::new(client), recognizer))
    }

    /// Wire a context around an already-built backend.
    pub fn with_api(
        config: &CliConfig,
        api: Arc<dyn NavigationApiPort>,
        recognizer: Arc<dyn SpeechRecognizerPort>,
    ) -> Self {
        let settings = config.settings.clone();
        let notifications =
            NotificationService::new(Arc::new(ConsoleSink::new()), settings.notification_timeout());
        let deps = NavigatorDeps {
            api,
            recognizer,
            notifications,
            surface: SvgSurface::new(settings.surface),
        };
        Self {
            navigator: Navigator::new(deps, settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;
    use wayfinder_core::UnsupportedRecognizer;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["wayfinder", "rooms"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.settings, NavigatorSettings::default());
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_settings_file_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"surface": {{"width": 300.0, "height": 300.0}}, "stroke_width": 2.0}}"#)
            .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert!((settings.surface.width - 300.0).abs() < f64::EPSILON);
        assert!((settings.stroke_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(settings.notification_timeout_ms, 5_000);
    }

    #[test]
    fn test_invalid_settings_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"notification_timeout_ms": 0}}"#).unwrap();

        let err = load_settings(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid settings"));
    }

    #[test]
    fn test_missing_settings_file() {
        let err = load_settings(Path::new("/nonexistent/wayfinder.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn test_bootstrap_rejects_bad_base_url() {
        let config = CliConfig {
            api_base_url: "::not a url::".to_string(),
            ..CliConfig::default()
        };
        let result = CliContext::bootstrap(&config, Arc::new(UnsupportedRecognizer));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
