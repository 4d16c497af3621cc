//! Descriptor parsing
//!
//! Descriptors are INI-like: `[Section]` headers followed by `key=value`
//! lines. Parsing is lenient: comments, blank lines and lines without `=`
//! are skipped, values are taken verbatim (no interpolation or unescaping),
//! keys compare case-insensitively and the last occurrence of a key wins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, bundle as bundle_error};

/// The only section that is read
pub const DESKTOP_ENTRY_SECTION: &str = "Desktop Entry";

/// Version assumed when the descriptor declares none
pub const DEFAULT_VERSION: &str = "1.0";

/// Metadata read from a bundle's `.desktop` descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleMetadata {
    pub name: String,
    pub comment: String,
    /// Semicolon separated, as declared
    pub categories: String,
    /// Launch command declared by the bundle; the installer computes its own
    pub exec: String,
    /// Icon file name or identifier hint
    pub icon: String,
    pub version: String,
}

impl Default for BundleMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            comment: String::new(),
            categories: String::new(),
            exec: String::new(),
            icon: String::new(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl BundleMetadata {
    /// Read and parse a descriptor file
    pub fn parse(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).map_err(|e| bundle_error::descriptor_parse_failed(path, e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);
        Self::from_desktop_str(&content).ok_or_else(|| {
            bundle_error::descriptor_parse_failed(
                path,
                format!("missing [{DESKTOP_ENTRY_SECTION}] section"),
            )
        })
    }

    /// Parse descriptor text; `None` when there is no `[Desktop Entry]` section
    pub fn from_desktop_str(content: &str) -> Option<Self> {
        let entries = read_section(content, DESKTOP_ENTRY_SECTION)?;
        let field = |key: &str| entries.get(key).cloned().unwrap_or_default();

        Some(Self {
            name: field("name"),
            comment: field("comment"),
            categories: field("categories"),
            exec: field("exec"),
            icon: field("icon"),
            version: entries
                .get("version")
                .cloned()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }
}

/// Collect the keys of one section, lowercased, last value winning.
/// Repeated headers of the same section are merged.
fn read_section(content: &str, section: &str) -> Option<HashMap<String, String>> {
    let mut entries = HashMap::new();
    let mut found = false;
    let mut in_section = false;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = header == section;
            found |= in_section;
            continue;
        }

        if !in_section {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                entries.insert(key.to_lowercase(), value.trim().to_string());
            }
        }
    }

    found.then_some(entries)
}
