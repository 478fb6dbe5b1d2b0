//! Flat key/value view over the INI-style `config.properties` file.

use std::{collections::HashMap, fs, path::Path};

use crate::errors::PropertiesError;

/// Flattened key/value mapping parsed from an INI-style file.
///
/// Section headers are required but discarded: keys from every section share
/// one namespace and a key repeated in a later section overwrites the earlier
/// value. Key case is preserved. Values may be empty (a bare `key` line is
/// allowed), and indented lines continue the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Read and parse `path`.
    pub fn load(path: &Path) -> Result<Self, PropertiesError> {
        let content = fs::read_to_string(path).map_err(|source| PropertiesError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse already-read file content. `path` is used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, PropertiesError> {
        let mut entries: HashMap<String, String> = HashMap::new();
        let mut in_section = false;
        // Key and value currently being accumulated across continuation lines.
        let mut current: Option<(String, String)> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }

            // Indented non-blank lines continue the previous value.
            if raw_line.starts_with(' ') || raw_line.starts_with('\t') {
                match current.as_mut() {
                    Some((_, value)) => {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                    }
                    None => {
                        return Err(PropertiesError::StrayContinuation {
                            path: path.to_path_buf(),
                            line,
                        });
                    }
                }
                continue;
            }

            if let Some((key, value)) = current.take() {
                entries.insert(key, value);
            }

            if trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                in_section = true;
                continue;
            }
            if !in_section {
                return Err(PropertiesError::MissingSectionHeader {
                    path: path.to_path_buf(),
                    line,
                });
            }

            let (key, value) = match trimmed.split_once(['=', ':']) {
                Some((key, value)) => (key.trim_end().to_string(), value.trim_start().to_string()),
                None => (trimmed.to_string(), String::new()),
            };
            current = Some((key, value));
        }

        if let Some((key, value)) = current {
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Look up a key, section-independent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, defaulting to the empty string.
    pub fn get_or_default(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Number of distinct keys across all sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the file contained no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
