//! Finding font files.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// File extensions identified as fonts, compared case-insensitively.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// `true` if `path` has a font file extension.
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Expand the command line paths into a sorted list of font files.
///
/// Directories are walked recursively and only font files are kept from
/// them. Paths named directly are kept whatever their extension, so a
/// missing or mistyped file is reported when it is read.
pub fn collect_font_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(path, &mut found);
        } else {
            found.push(path.clone());
        }
    }
    found.sort();
    found.dedup();
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list {}: {e}", dir.display());
            return;
        }
    };
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("cannot list {}: {e}", dir.display());
                continue;
            }
        };
        if path.is_dir() {
            walk(&path, found);
        } else if is_font_file(&path) {
            found.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert!(is_font_file(Path::new("a/Arial.TTF")));
        assert!(is_font_file(Path::new("cambria.ttc")));
        assert!(is_font_file(Path::new("x.otc")));
        assert!(!is_font_file(Path::new("font.woff2")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    #[test]
    fn walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        for name in ["b.otf", "notes.txt", "nested/a.ttf", "nested/c.TTC"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let explicit = dir.path().join("readme.md");

        let found = collect_font_paths(&[dir.path().to_owned(), explicit.clone()]);
        let mut expected = vec![
            dir.path().join("b.otf"),
            nested.join("a.ttf"),
            nested.join("c.TTC"),
            explicit,
        ];
        expected.sort();
        assert_eq!(found, expected);
    }
}
