use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "renumber.json";

/// Default target directory, relative to the working directory.
pub const DEFAULT_DIR: &str = "proposals";

/// Current working directory
pub fn cwd() -> Result<PathBuf> {
    env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("read current directory".to_string())))
}

/// Default config file path (./renumber.json)
pub fn default_config() -> Result<PathBuf> {
    Ok(cwd()?.join(CONFIG_FILENAME))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        let abs = cwd().unwrap().join("elsewhere");
        assert_eq!(resolve_against(Path::new("base"), &abs), abs);
    }

    #[test]
    fn relative_paths_join_base() {
        assert_eq!(
            resolve_against(Path::new("repo"), Path::new("proposals")),
            Path::new("repo").join("proposals")
        );
    }
}
