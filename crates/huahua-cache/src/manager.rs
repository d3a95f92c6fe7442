//! Debug capture and label file storage.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use huahua_types::{RawTransaction, is_unresolved_label};
use thiserror::Error;
use tracing::{debug, info};

/// Default directory for debug captures and reports.
pub const DEFAULT_DEBUG_DIR: &str = "_reports";

/// File name prefix of debug captures.
pub const CAPTURE_PREFIX: &str = "testhuahua";

/// File name of the IBC label table.
pub const LABELS_FILE: &str = "ibc_addresses.json";

/// Errors that can occur while reading or writing cache files.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse cache file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize cache: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Manages the debug capture directory and the label cache directory.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory holding `testhuahua.<wallet>.json` captures.
    debug_dir: PathBuf,
    /// Directory holding the label file.
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a cache manager. Directories are created on first write.
    #[must_use]
    pub const fn new(debug_dir: PathBuf, cache_dir: PathBuf) -> Self {
        Self {
            debug_dir,
            cache_dir,
        }
    }

    /// Returns the default path for the label cache.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/huahua-tax/`
    /// - macOS: `~/Library/Application Support/huahua-tax/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\huahua-tax\`
    ///
    /// Falls back to `~/.huahua-tax/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "huahua-tax").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Returns the capture directory.
    #[must_use]
    pub fn debug_dir(&self) -> &Path {
        &self.debug_dir
    }

    /// Returns the label cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the path of the capture for `wallet`.
    #[must_use]
    pub fn capture_path(&self, wallet: &str) -> PathBuf {
        self.debug_dir.join(format!("{CAPTURE_PREFIX}.{wallet}.json"))
    }

    /// Returns the path of the label file.
    #[must_use]
    pub fn labels_path(&self) -> PathBuf {
        self.cache_dir.join(LABELS_FILE)
    }

    /// Loads the capture for `wallet`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture exists but cannot be read or parsed.
    pub fn load_capture(&self, wallet: &str) -> Result<Option<Vec<RawTransaction>>> {
        let path = self.capture_path(wallet);
        let Some(records) = read_json::<Vec<RawTransaction>>(&path)? else {
            return Ok(None);
        };
        info!(path = %path.display(), records = records.len(), "Loaded debug capture");
        Ok(Some(records))
    }

    /// Writes the capture for `wallet`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized or written.
    pub fn save_capture(&self, wallet: &str, records: &[RawTransaction]) -> Result<PathBuf> {
        let path = self.capture_path(wallet);
        write_json(&self.debug_dir, &path, &records)?;
        info!(path = %path.display(), records = records.len(), "Saved debug capture");
        Ok(path)
    }

    /// Loads the label table, or an empty one if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_labels(&self) -> Result<HashMap<String, String>> {
        let labels: HashMap<String, String> =
            read_json(&self.labels_path())?.unwrap_or_default();
        debug!(count = labels.len(), "Loaded IBC labels");
        Ok(labels)
    }

    /// Writes the resolved entries of `labels`.
    ///
    /// Entries whose value still starts with `ibc/` are dropped. Returns the
    /// number of entries written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_labels(&self, labels: &HashMap<String, String>) -> Result<usize> {
        let resolved: BTreeMap<&str, &str> = labels
            .iter()
            .filter(|(_, symbol)| !is_unresolved_label(symbol))
            .map(|(denom, symbol)| (denom.as_str(), symbol.as_str()))
            .collect();
        write_json(&self.cache_dir, &self.labels_path(), &resolved)?;
        debug!(count = resolved.len(), "Saved IBC labels");
        Ok(resolved.len())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| CacheError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| CacheError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_json<T: serde::Serialize + ?Sized>(dir: &Path, path: &Path, value: &T) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| CacheError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| CacheError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".huahua-tax")
}
