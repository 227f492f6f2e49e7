//! Configuration for the `numen` binary.
//!
//! Settings come from three layers, lowest precedence first: an optional
//! TOML file, `NUMEN_*` environment variables, then command-line flags.
//!
//! # Example
//!
//! ```toml
//! [engine]
//! locale = "en"
//! meanings = "meanings.json"
//!
//! [serve]
//! port = 8080
//! rate_limit = 60
//! api_key = "secret"
//! ```

use std::path::{Path, PathBuf};

use numen_core::{Meanings, DEFAULT_LOCALE};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "numen.toml";

/// Default HTTP port for `numen serve`.
pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Default rate limit: 60 requests per minute per IP.
pub(crate) const DEFAULT_RATE_LIMIT: u64 = 60;

// ── File format ───────────────────────────────────────────────────────────────

/// Top-level config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) engine: EngineSection,
    pub(crate) serve: ServeSection,
}

/// `[engine]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct EngineSection {
    /// Locale for narrative text when a request does not name one.
    pub(crate) locale: Option<String>,
    /// Replacement meanings resource. Relative paths resolve against the
    /// directory holding the config file.
    pub(crate) meanings: Option<PathBuf>,
}

/// `[serve]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ServeSection {
    pub(crate) port: Option<u16>,
    /// Requests per minute per IP.
    pub(crate) rate_limit: Option<u64>,
    pub(crate) api_key: Option<String>,
}

/// Read and parse a config TOML file from `path`.
pub(crate) fn read_config(path: &Path) -> Result<ConfigFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;

    if let (Some(meanings), Some(dir)) = (&config.engine.meanings, path.parent()) {
        if meanings.is_relative() {
            config.engine.meanings = Some(dir.join(meanings));
        }
    }
    Ok(config)
}

/// Load the explicit config file, or `numen.toml` if one exists, or defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, String> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                read_config(implicit)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

// ── Resolved settings ─────────────────────────────────────────────────────────

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) locale: Option<String>,
    pub(crate) meanings: Option<PathBuf>,
    pub(crate) port: Option<u16>,
}

/// HTTP server settings after all layers are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeSettings {
    pub(crate) port: u16,
    pub(crate) rate_limit: u64,
    pub(crate) api_key: Option<String>,
}

/// Everything a command needs, fully resolved.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) locale: String,
    pub(crate) meanings: Meanings,
    pub(crate) serve: ServeSettings,
}

impl Settings {
    /// Resolve against the process environment.
    pub(crate) fn resolve(file: ConfigFile, flags: Overrides) -> Result<Settings, String> {
        Self::resolve_with(file, flags, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub(crate) fn resolve_with(
        file: ConfigFile,
        flags: Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, String> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let locale = flags
            .locale
            .or_else(|| env("NUMEN_LOCALE"))
            .or(file.engine.locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let meanings_path = flags
            .meanings
            .or_else(|| env("NUMEN_MEANINGS").map(PathBuf::from))
            .or(file.engine.meanings);
        let meanings = match meanings_path {
            Some(path) => load_meanings(&path)?,
            None => Meanings::builtin().map_err(|e| e.to_string())?,
        };

        let rate_limit = match env("NUMEN_RATE_LIMIT") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("NUMEN_RATE_LIMIT must be a whole number, got '{}'", v))?,
            None => file.serve.rate_limit.unwrap_or(DEFAULT_RATE_LIMIT),
        };

        let api_key = env("NUMEN_API_KEY")
            .or(file.serve.api_key)
            .filter(|k| !k.is_empty());

        Ok(Settings {
            locale,
            meanings,
            serve: ServeSettings {
                port: flags.port.or(file.serve.port).unwrap_or(DEFAULT_PORT),
                rate_limit,
                api_key,
            },
        })
    }
}

/// Read a meanings resource from disk and validate it.
pub(crate) fn load_meanings(path: &Path) -> Result<Meanings, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    tracing::info!(path = %path.display(), "loading meanings resource");
    Meanings::from_json_str(&content).map_err(|e| format!("{}: {}", path.display(), e))
}
