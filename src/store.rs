use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// The single-slot preference store, keyed `"theme"`.
///
/// Values read back are trusted verbatim; values written by the controller
/// are always exactly `"dark"` or `"light"`, never `"auto"`.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    theme: Option<String>,
}

/// File-backed store. An absent file or absent key means the user has never
/// made an explicit choice.
pub struct FilePrefs {
    path: PathBuf,
    prefs: PrefsFile,
}

impl FilePrefs {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let prefs = if path.exists() {
            let bytes =
                std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parse {}", path.display()))?
        } else {
            PrefsFile::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            prefs,
        })
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self) -> Option<String> {
        self.prefs.theme.clone()
    }

    fn set(&mut self, value: &str) -> anyhow::Result<()> {
        self.prefs.theme = Some(value.to_string());
        let json = serde_json::to_string_pretty(&self.prefs).context("encode preferences")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPrefs(pub Option<String>);

impl PreferenceStore for MemoryPrefs {
    fn get(&self) -> Option<String> {
        self.0.clone()
    }

    fn set(&mut self, value: &str) -> anyhow::Result<()> {
        self.0 = Some(value.to_string());
        Ok(())
    }
}
