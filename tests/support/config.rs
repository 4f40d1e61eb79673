use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A config file and its database, both inside one temp directory.
pub struct TempConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    /// Config pointing at a fresh database, plus any extra TOML sections.
    pub fn with_sections(sections: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let database = dir.path().join("market.db");
        let contents = format!("database = {:?}\n{sections}", database.to_string_lossy());
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    /// Config whose node cannot be reached.
    pub fn offline() -> Self {
        Self::with_sections("\n[node]\nurl = \"http://127.0.0.1:1\"\ntimeout_secs = 1\n")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn database(&self) -> PathBuf {
        self.dir.path().join("market.db")
    }
}
