//! File discovery inside an extracted bundle

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Icon extensions in order of preference: bitmap, vector, legacy pixmap
pub const ICON_EXTENSIONS: [&str; 3] = [".png", ".svg", ".xpm"];

/// Return the first file below `root` whose name ends with `extension`.
///
/// The walk visits entries sorted by file name, so the result is stable for
/// a given tree. A missing `root` yields `None`.
pub fn find_first_by_extension(root: &Path, extension: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(extension))
        })
        .map(walkdir::DirEntry::into_path)
}

/// Pick an icon for the bundle.
///
/// For each extension in [`ICON_EXTENSIONS`] only the first file found is
/// considered, and it is accepted when its basename contains `hint`. This is
/// a heuristic: a tree with several PNGs may yield none even if one of them
/// matches, and an empty hint accepts the first icon of any kind.
pub fn select_icon(root: &Path, hint: &str) -> Option<PathBuf> {
    ICON_EXTENSIONS.iter().find_map(|extension| {
        find_first_by_extension(root, extension).filter(|candidate| {
            candidate
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(hint))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, relative).unwrap();
    }

    #[test]
    fn test_find_first_by_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "usr/share/applications/app.desktop");
        touch(temp.path(), "AppRun");

        let found = find_first_by_extension(temp.path(), ".desktop").unwrap();
        assert!(found.ends_with("usr/share/applications/app.desktop"));
        assert!(find_first_by_extension(temp.path(), ".png").is_none());
    }

    #[test]
    fn test_find_first_by_extension_is_deterministic() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.desktop");
        touch(temp.path(), "a.desktop");
        touch(temp.path(), "c/a.desktop");

        let first = find_first_by_extension(temp.path(), ".desktop").unwrap();
        assert_eq!(first, temp.path().join("a.desktop"));
        for _ in 0..5 {
            assert_eq!(
                find_first_by_extension(temp.path(), ".desktop").unwrap(),
                first
            );
        }
    }

    #[test]
    fn test_find_first_by_extension_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("icons.png")).unwrap();
        touch(temp.path(), "real/icon.png");

        let found = find_first_by_extension(temp.path(), ".png").unwrap();
        assert!(found.ends_with("real/icon.png"));
    }

    #[test]
    fn test_find_first_by_extension_missing_root() {
        let temp = TempDir::new().unwrap();
        assert!(find_first_by_extension(&temp.path().join("squashfs-root"), ".desktop").is_none());
    }

    #[test]
    fn test_select_icon_prefers_bitmap() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "foo.png");
        touch(temp.path(), "bar.svg");

        let icon = select_icon(temp.path(), "foo").unwrap();
        assert_eq!(icon, temp.path().join("foo.png"));
    }

    #[test]
    fn test_select_icon_falls_through_to_vector() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "other.png");
        touch(temp.path(), "inkscape.svg");

        let icon = select_icon(temp.path(), "inkscape").unwrap();
        assert_eq!(icon, temp.path().join("inkscape.svg"));
    }

    #[test]
    fn test_select_icon_substring_match() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "usr/share/icons/org.gimp.GIMP-256.png");

        assert!(select_icon(temp.path(), "org.gimp.GIMP").is_some());
        assert!(select_icon(temp.path(), "krita").is_none());
    }

    #[test]
    fn test_select_icon_only_first_candidate_per_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a-unrelated.png");
        touch(temp.path(), "z-app.png");

        assert!(select_icon(temp.path(), "app").is_none());
    }
}
