//! Directory I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// List the names of non-directory entries in `dir` (non-recursive).
///
/// Names that are not valid UTF-8 are skipped. A missing path maps to
/// `directory.not_found`; anything else that stops the listing maps to
/// `directory.read_failed`.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let display = dir.display().to_string();

    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::directory_not_found(display.clone()),
        _ => Error::directory_read_failed(display.clone(), e.to_string()),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::directory_read_failed(display.clone(), e.to_string()))?;

        let file_type = entry
            .file_type()
            .map_err(|e| Error::directory_read_failed(display.clone(), e.to_string()))?;
        if file_type.is_dir() {
            continue;
        }

        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    Ok(names)
}

/// Rename `from` to `to` inside `dir`, refusing to overwrite an existing entry.
///
/// A case-only rename is let through: on case-insensitive filesystems the
/// target resolves to the source itself.
pub fn rename_in_dir(dir: &Path, from: &str, to: &str) -> Result<()> {
    let source = dir.join(from);
    let target = dir.join(to);
    let case_only = from != to && from.to_lowercase() == to.to_lowercase();

    if !case_only && target.symlink_metadata().is_ok() {
        return Err(Error::rename_target_exists(
            source.display().to_string(),
            target.display().to_string(),
        ));
    }

    fs::rename(&source, &target).map_err(|e| {
        Error::rename_failed(
            source.display().to_string(),
            target.display().to_string(),
            e.to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_skips_directories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "").unwrap();
        fs::create_dir(tmp.path().join("nested.md")).unwrap();

        let names = list_file_names(tmp.path()).unwrap();
        assert_eq!(names, vec!["a.md".to_string()]);
    }

    #[test]
    fn list_missing_dir_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = list_file_names(&tmp.path().join("absent")).unwrap_err();
        assert_eq!(err.code.as_str(), "directory.not_found");
    }

    #[test]
    fn list_file_path_is_read_failure() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = list_file_names(&file).unwrap_err();
        assert_eq!(err.code.as_str(), "directory.read_failed");
    }

    #[test]
    fn rename_moves_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "body").unwrap();

        rename_in_dir(tmp.path(), "a.md", "0001-a.md").unwrap();

        assert!(!tmp.path().join("a.md").exists());
        assert_eq!(
            fs::read_to_string(tmp.path().join("0001-a.md")).unwrap(),
            "body"
        );
    }

    #[test]
    fn rename_refuses_to_clobber() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "a").unwrap();
        fs::write(tmp.path().join("b.md"), "b").unwrap();

        let err = rename_in_dir(tmp.path(), "a.md", "b.md").unwrap_err();
        assert_eq!(err.code.as_str(), "rename.target_exists");
        assert_eq!(fs::read_to_string(tmp.path().join("b.md")).unwrap(), "b");
    }

    #[test]
    fn case_only_rename_is_allowed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("0001-Foo.md"), "foo").unwrap();

        rename_in_dir(tmp.path(), "0001-Foo.md", "0001-foo.md").unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("0001-foo.md")).unwrap(),
            "foo"
        );
    }

    #[test]
    fn rename_missing_source_fails() {
        let tmp = TempDir::new().unwrap();
        let err = rename_in_dir(tmp.path(), "ghost.md", "0001-ghost.md").unwrap_err();
        assert_eq!(err.code.as_str(), "rename.failed");
    }
}
