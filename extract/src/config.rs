//! Extraction settings and path resolution.
//!
//! Settings can come from a YAML file; every key is optional.
//!
//! # Example YAML
//!
//! ```yaml
//! inputPath: words/input.txt
//! outputPath: words/output.json
//! printDuplicates: false
//! ```
//!
//! Relative paths are joined onto a fixed base directory (by default the
//! directory holding the executable), never the caller's working directory.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// User-facing extraction settings, before path resolution.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vocab_extract::config::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert!(config.print_duplicates);
///
/// let resolved = config.resolve(Path::new("/opt/vocab"));
/// assert_eq!(resolved.input_path, Path::new("/opt/vocab/input.txt"));
/// assert_eq!(resolved.output_path, Path::new("/opt/vocab/output.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractConfig {
    /// Vocabulary text file, relative to the base directory unless absolute.
    pub input_path: PathBuf,
    /// JSON destination, relative to the base directory unless absolute.
    pub output_path: PathBuf,
    /// Log duplicate keys at warning level instead of counting them silently.
    pub print_duplicates: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_duplicates: true,
        }
    }
}

impl ExtractConfig {
    /// Loads settings from a YAML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReadConfig`](ExtractError::ReadConfig) if the file cannot be
    /// opened, or [`ParseConfig`](ExtractError::ParseConfig) if it is not
    /// valid YAML for this struct.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExtractError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ExtractError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Joins relative paths onto `base_dir`. Absolute paths are kept as-is.
    pub fn resolve(&self, base_dir: &Path) -> ResolvedConfig {
        ResolvedConfig {
            input_path: base_dir.join(&self.input_path),
            output_path: base_dir.join(&self.output_path),
            print_duplicates: self.print_duplicates,
        }
    }
}

/// Settings with concrete file locations, ready for an
/// [`Extractor`](crate::Extractor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub print_duplicates: bool,
}

/// Directory containing the running executable, with symlinks resolved.
///
/// Falls back to `.` when the executable path is unavailable.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .and_then(|exe| exe.canonicalize())
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
