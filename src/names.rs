//! Application identifiers
//!
//! A display name such as `Visual Studio Code` maps to the identifier
//! `visual_studio_code`, which keys the registry and names the installed
//! launcher entry and icon.

use std::fmt;

use crate::error::{AppError, Result};

/// Lowercase the name and replace each space with an underscore.
///
/// No other characters are touched, so the mapping is idempotent on its own
/// output. Empty input yields empty output.
pub fn normalize(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "_")
}

/// A validated, normalized application identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppId(String);

impl AppId {
    /// Normalize a display name into an identifier.
    ///
    /// Rejects names that normalize to nothing or that would escape the
    /// target directories when used as a file basename.
    pub fn from_display_name(name: &str) -> Result<Self> {
        let id = normalize(name);
        let escapes = id == "." || id == ".." || id.contains('/') || id.contains('\0');
        if name.trim().is_empty() || escapes {
            return Err(AppError::InvalidAppName {
                name: name.to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Visual Studio Code"), "visual_studio_code");
        assert_eq!(normalize("GIMP"), "gimp");
        assert_eq!(normalize("kdenlive-23.08"), "kdenlive-23.08");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_only_touches_case_and_spaces() {
        assert_eq!(normalize("Foo\tBar.Baz"), "foo\tbar.baz");
        assert_eq!(normalize("a  b"), "a__b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["firefox", "visual_studio_code", "obs_studio-30", ""] {
            assert_eq!(normalize(&normalize(name)), normalize(name));
        }
        let once = normalize("Krita Next");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_app_id_from_display_name() {
        let id = AppId::from_display_name("Obsidian").unwrap();
        assert_eq!(id.as_str(), "obsidian");
        assert_eq!(id.to_string(), "obsidian");
    }

    #[test]
    fn test_app_id_rejects_empty_name() {
        assert!(matches!(
            AppId::from_display_name(""),
            Err(AppError::InvalidAppName { .. })
        ));
        assert!(matches!(
            AppId::from_display_name("   "),
            Err(AppError::InvalidAppName { .. })
        ));
    }

    #[test]
    fn test_app_id_rejects_path_like_names() {
        assert!(AppId::from_display_name("../evil").is_err());
        assert!(AppId::from_display_name("..").is_err());
        assert!(AppId::from_display_name("a/b").is_err());
    }

    #[test]
    fn test_distinct_names_can_collide() {
        let a = AppId::from_display_name("My App").unwrap();
        let b = AppId::from_display_name("my_app").unwrap();
        assert_eq!(a, b);
    }
}
