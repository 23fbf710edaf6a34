//! File-level extraction: read the vocabulary text, parse it, write JSON.
//!
//! The output file is only touched after the whole input has been parsed and
//! serialized in memory, so a failed run never leaves a half-written file
//! behind.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use crate::config::{ExtractConfig, ResolvedConfig};
use crate::error::{ExtractError, Result};
use crate::output::format_vocabulary;
use crate::parser::{Extraction, LineParser};
use crate::report::{ExtractionReport, log_extraction};

/// Runs extractions for one resolved configuration.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vocab_extract::{Extractor, config::ExtractConfig};
///
/// let extractor = Extractor::from_config(&ExtractConfig::default(), Path::new("/srv/words"));
/// if !extractor.save() {
///     eprintln!("extraction failed, see log");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ResolvedConfig,
}

impl Extractor {
    pub fn new(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Resolves `config` against `base_dir` and builds an extractor.
    pub fn from_config(config: &ExtractConfig, base_dir: &Path) -> Self {
        debug!("Resolving paths against '{}'.", base_dir.display());
        Self::new(config.resolve(base_dir))
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Reads and parses the input file, logging every line outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ReadInput`](ExtractError::ReadInput) if the file cannot be
    /// read as UTF-8 text.
    pub fn extract(&self) -> Result<Extraction> {
        let path = &self.config.input_path;
        let text = fs::read_to_string(path).map_err(|source| ExtractError::ReadInput {
            path: path.clone(),
            source,
        })?;
        let extraction = LineParser::new(&text).parse();
        log_extraction(&extraction, self.config.print_duplicates);
        Ok(extraction)
    }

    /// Extracts, serializes, and only then writes the output file.
    ///
    /// # Errors
    ///
    /// Returns [`ReadInput`](ExtractError::ReadInput) or
    /// [`WriteOutput`](ExtractError::WriteOutput) on I/O failure.
    pub fn try_save(&self) -> Result<Extraction> {
        let extraction = self.extract()?;
        let json = format_vocabulary(&extraction.entries)?;

        let path = &self.config.output_path;
        fs::write(path, json).map_err(|source| ExtractError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!("OK: saved words to json, see: '{}'.", path.display());
        Ok(extraction)
    }

    /// Like [`try_save`](Self::try_save), but logs the failure and returns a
    /// report only on success.
    pub fn save_with_report(&self) -> Option<ExtractionReport> {
        match self.try_save() {
            Ok(extraction) => Some(ExtractionReport::new(
                &extraction,
                &self.config.input_path,
                Some(&self.config.output_path),
            )),
            Err(err) => {
                error!("Failed to save json: {err}.");
                None
            }
        }
    }

    /// Runs the full extraction; `true` means the output file was written.
    pub fn save(&self) -> bool {
        self.save_with_report().is_some()
    }
}
