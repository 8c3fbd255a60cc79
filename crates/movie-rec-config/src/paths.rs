use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base directory override from the `REELPICK_HOME` environment variable
pub fn home_override() -> Option<PathBuf> {
    std::env::var_os("REELPICK_HOME").map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelpick");

        Ok(Self::from_base(base_dir))
    }

    /// Config at the base level, data and logs in subdirectories
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn session_log_file(&self) -> PathBuf {
        self.log_dir.join("reelpick.log")
    }

    /// Resolve a configured data path; relative paths are taken from the config dir
    pub fn resolve_data_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = home_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/reelpick on Linux), else the working directory
        Self::new().unwrap_or_else(|_| Self::from_base("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::from_base("/srv/reelpick");
        assert_eq!(paths.config_file(), PathBuf::from("/srv/reelpick/config.toml"));
        assert_eq!(paths.data_dir(), Path::new("/srv/reelpick/data"));
        assert_eq!(paths.session_log_file(), PathBuf::from("/srv/reelpick/logs/reelpick.log"));
    }

    #[test]
    fn test_resolve_data_path() {
        let paths = PathManager::from_base("/srv/reelpick");
        assert_eq!(
            paths.resolve_data_path(Path::new("data/movies.csv")),
            PathBuf::from("/srv/reelpick/data/movies.csv")
        );
        assert_eq!(
            paths.resolve_data_path(Path::new("/tmp/movies.csv")),
            PathBuf::from("/tmp/movies.csv")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path().join("home"));
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
