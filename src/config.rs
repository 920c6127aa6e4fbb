//! Server settings: defaults, then `menu.toml`, then environment variables.

use std::{fs, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// File read from the working directory when present.
pub const SETTINGS_FILE: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    /// `None` means locate `assets/` relative to the working directory.
    pub assets_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".into(),
            assets_dir: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    assets_dir: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Defaults, then `menu.toml`, then environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg: FileSettings =
            toml::from_str(raw).with_context(|| format!("failed to parse {SETTINGS_FILE}"))?;
        if let Some(v) = file_cfg.bind_addr {
            settings.bind_addr = v;
        }
        if let Some(v) = file_cfg.assets_dir {
            settings.assets_dir = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("MENU_BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("MENU_ASSETS_DIR") {
        settings.assets_dir = Some(PathBuf::from(v));
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_file_or_env() {
        assert_eq!(settings_from(None, no_env).unwrap(), Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let raw = r#"
            bind_addr = "127.0.0.1:9000"
            assets_dir = "./widget"
        "#;
        let settings = settings_from(Some(raw), no_env).unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.assets_dir, Some(PathBuf::from("./widget")));
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("APP__BIND_ADDR", "127.0.0.1:7000"),
            ("RUST_LOG", "debug"),
        ]
        .into_iter()
        .collect();
        let raw = r#"bind_addr = "127.0.0.1:9000""#;

        let settings =
            settings_from(Some(raw), |key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:7000");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(settings_from(Some("bind_addr = "), no_env).is_err());
        assert!(settings_from(Some("port = 80"), no_env).is_err());
    }
}
