use std::{
    env, io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

const APPLICATION_DIR_NAME: &str = "productivity-tracker";

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        fn state_home() -> Result<PathBuf> {
            env::var("APPDATA")
                .map(PathBuf::from)
                .map_err(|_| anyhow!("APPDATA should be present on Windows"))
        }
    } else {
        fn state_home() -> Result<PathBuf> {
            env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".local/state");
                        path
                    })
                })
                .map_err(|_| anyhow!("Couldn't find neither XDG_STATE_HOME nor HOME"))
        }
    }
}

/// Returns `$XDG_STATE_HOME/productivity-tracker` (or `$HOME/.local/state/...`) on unix and
/// `%APPDATA%/productivity-tracker` on Windows.
pub fn default_application_path() -> Result<PathBuf> {
    let mut path = state_home()?;
    path.push(APPLICATION_DIR_NAME);
    Ok(path)
}

/// Creates the application directory, using `dir` when given and the default location otherwise.
pub fn create_application_path(dir: Option<&Path>) -> Result<PathBuf> {
    let path = match dir {
        Some(dir) => dir.to_path_buf(),
        None => default_application_path()?,
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_directory_is_created() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("nested").join("app");

        let path = create_application_path(Some(&target))?;

        assert_eq!(path, target);
        assert!(path.is_dir());
        Ok(())
    }

    #[test]
    fn test_existing_directory_is_reused() -> Result<()> {
        let dir = tempdir()?;

        create_application_path(Some(dir.path()))?;
        let path = create_application_path(Some(dir.path()))?;

        assert_eq!(path, dir.path());
        Ok(())
    }

    #[test]
    fn test_default_path_ends_with_application_name() -> Result<()> {
        let path = default_application_path()?;
        assert!(path.ends_with(APPLICATION_DIR_NAME));
        Ok(())
    }
}
