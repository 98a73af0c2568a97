//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TotuiError, TotuiResult};

use super::env_validator::{suggest, EnvVarValidator, InvalidEnvValue};
use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".totui.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    /// Config file the key came from; `None` for environment variables
    pub file: Option<PathBuf>,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => {
                write!(f, "unknown key '{}' in {}:{}", self.key, file.display(), line)?
            }
            (Some(file), None) => write!(f, "unknown key '{}' in {}", self.key, file.display())?,
            (None, _) => write!(f, "invalid value for {}", self.key)?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl From<InvalidEnvValue> for ConfigWarning {
    fn from(invalid: InvalidEnvValue) -> Self {
        Self {
            key: format!("{}={}", invalid.var_name, invalid.value),
            file: None,
            line: None,
            suggestion: invalid.suggestion,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TotuiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TotuiError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: Some(path.to_path_buf()),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but cannot be parsed is an error.
pub fn load_or_default(project_root: Option<&Path>) -> TotuiResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if path.is_file() {
            let (config, mut warnings) = load_with_warnings(&path)?;
            let (config, env_warnings) = with_env_overrides(config);
            warnings.extend(env_warnings);
            return Ok((config, warnings));
        }
    }

    Ok(with_env_overrides(Config::default()))
}

/// `~/.config/totui/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("totui").join("config.toml"))
}

/// Apply environment variable overrides (TOTUI_* prefix)
fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    // TOTUI_COLOR
    if let Some(value) = get_env("TOTUI_COLOR") {
        let validator = EnvVarValidator::new("TOTUI_COLOR", &["auto", "always", "never"]);
        match validator.parse(&value, ColorMode::parse) {
            Ok(mode) => config.output.color = mode,
            Err(invalid) => warnings.push(invalid.into()),
        }
    }

    // TOTUI_UNICODE
    if let Some(value) = get_env("TOTUI_UNICODE") {
        let validator = EnvVarValidator::new("TOTUI_UNICODE", &["true", "false", "1", "0"]);
        match validator.parse(&value, parse_bool) {
            Ok(unicode) => config.output.unicode = unicode,
            Err(invalid) => warnings.push(invalid.into()),
        }
    }

    // TOTUI_LOG_LEVEL
    if let Some(level) = get_env("TOTUI_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
        config.log.level = level.trim().to_string();
    }

    // TOTUI_LOG_FILE (empty disables file logging)
    if let Some(file) = get_env("TOTUI_LOG_FILE") {
        config.log.file = (!file.is_empty()).then(|| PathBuf::from(file));
    }

    (config, warnings)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Line of the first `key = ...` assignment
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "color", "unicode", "log", "level", "file"];
    suggest(unknown, CANDIDATES)
}
