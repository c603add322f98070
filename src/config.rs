//! Editor options and the files they are loaded from.
//!
//! Config files hold one option per line, either `key value` or
//! `key=value`. Blank lines and `#` comments are skipped, and so are
//! unknown keys and bad values (with a warning). The same parser handles
//! `set` commands typed at the command prompt.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_TABSIZE: usize = 4;
pub const DEFAULT_MESSAGE_COOLDOWN: u32 = 2;

/// A rejected option assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Effective editor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Tab stop width in columns, at least 1.
    pub tabsize: usize,
    /// Redraws a status message stays visible for.
    pub message_cooldown: u32,
    pub show_linenumbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tabsize: DEFAULT_TABSIZE,
            message_cooldown: DEFAULT_MESSAGE_COOLDOWN,
            show_linenumbers: false,
        }
    }
}

impl Options {
    /// Assign one option by name.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a value that does not parse; the options
    /// are left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut overrides = ConfigOverrides::default();
        overrides.set(key, value)?;
        *self = overrides.apply_to(*self);
        Ok(())
    }
}

/// Options named by one config layer. Unset fields defer to lower layers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub tabsize: Option<usize>,
    pub message_cooldown: Option<u32>,
    pub show_linenumbers: Option<bool>,
}

impl ConfigOverrides {
    /// Layer `other` on top of `self`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tabsize: other.tabsize.or(self.tabsize),
            message_cooldown: other.message_cooldown.or(self.message_cooldown),
            show_linenumbers: other.show_linenumbers.or(self.show_linenumbers),
        }
    }

    /// Apply the fields that are set to `base`.
    pub fn apply_to(&self, base: Options) -> Options {
        Options {
            tabsize: self.tabsize.unwrap_or(base.tabsize),
            message_cooldown: self.message_cooldown.unwrap_or(base.message_cooldown),
            show_linenumbers: self.show_linenumbers.unwrap_or(base.show_linenumbers),
        }
    }

    /// Resolve against the built-in defaults.
    pub fn resolve(&self) -> Options {
        self.apply_to(Options::default())
    }

    /// Parse and record one `key`/`value` pair.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "tabsize" => {
                let tabsize = value.parse::<usize>().ok().filter(|&n| n >= 1);
                self.tabsize = Some(tabsize.ok_or_else(invalid)?);
            }
            "message_cooldown" => {
                self.message_cooldown = Some(value.parse().map_err(|_| invalid())?);
            }
            "show_linenumbers" => {
                self.show_linenumbers = Some(parse_bool(value).ok_or_else(invalid)?);
            }
            _ => return Err(ConfigError::UnknownOption(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Split a config line or command into key and value.
///
/// Accepts `key value` and `key=value`. Returns `None` if either half is
/// missing.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (key, value) = match line.split_once('=') {
        Some((key, value)) if !key.trim().contains(char::is_whitespace) => (key, value),
        _ => line.split_once(char::is_whitespace)?,
    };
    let (key, value) = (key.trim(), value.trim());
    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

/// Parse config file contents, skipping anything that does not apply.
pub fn parse_config(content: &str) -> ConfigOverrides {
    let mut overrides = ConfigOverrides::default();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = split_assignment(line) else {
            warn!(line = number + 1, "ignoring malformed config line");
            continue;
        };
        if let Err(err) = overrides.set(key, value) {
            warn!(line = number + 1, %err, "ignoring config line");
        }
    }
    overrides
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("quill").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("quill")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("quill").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("quill").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".quillrc")
}

/// Load a config file. A missing file sets nothing.
///
/// # Errors
///
/// Fails if the file exists but cannot be read.
pub fn load_config(path: &Path) -> Result<ConfigOverrides> {
    if !path.exists() {
        return Ok(ConfigOverrides::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    Ok(parse_config(&content))
}

/// Write the set fields of `overrides` to `path`, creating parent directories.
///
/// # Errors
///
/// Fails if the directory or file cannot be written.
pub fn save_config(path: &Path, overrides: &ConfigOverrides) -> Result<()> {
    let mut lines = vec!["# quill defaults (saved with --save)".to_string()];
    if let Some(tabsize) = overrides.tabsize {
        lines.push(format!("tabsize {tabsize}"));
    }
    if let Some(cooldown) = overrides.message_cooldown {
        lines.push(format!("message_cooldown {cooldown}"));
    }
    if let Some(show) = overrides.show_linenumbers {
        lines.push(format!("show_linenumbers {}", if show { "on" } else { "off" }));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove a saved config file if there is one.
///
/// # Errors
///
/// Fails if the file exists but cannot be removed.
pub fn clear_config(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}
