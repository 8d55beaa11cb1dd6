//! Env file type.
//!
//! Represents a parsed .env file with typed access.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl EnvFile {
    /// Parse an .env file from disk
    ///
    /// Skips empty lines and comments (lines starting with #).
    /// Accepts an optional `export ` prefix and values with or without quotes.
    /// A key repeated later in the file overrides the earlier value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, or
    /// `ConfigError::ReadFile` if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::parse(&contents, path.to_path_buf()))
    }

    /// Parse .env content already in memory
    pub fn parse(contents: &str, path: PathBuf) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                if key.is_empty() {
                    continue;
                }
                let value = parse_env_value(value.trim());
                match entries.iter_mut().find(|(k, _)| *k == key) {
                    Some(entry) => entry.1 = value,
                    None => entries.push((key, value)),
                }
            }
        }

        Self { entries, path }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_env_value(raw: &str) -> String {
    // Quoted values end at the closing quote; anything after it is a comment
    if let Some(rest) = raw.strip_prefix('"') {
        if let Some(end) = closing_double_quote(rest) {
            return unescape_double_quoted(&rest[..end]);
        }
    }

    if let Some(rest) = raw.strip_prefix('\'') {
        if let Some(end) = rest.find('\'') {
            return rest[..end].to_string();
        }
    }

    // Unquoted values may carry a trailing ` # comment`
    match raw.find(" #") {
        Some(idx) => raw[..idx].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// Byte offset of the first unescaped `"` in `value`.
fn closing_double_quote(value: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in value.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(idx),
            _ => {}
        }
    }
    None
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
