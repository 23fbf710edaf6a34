//! Reporting for finished parse passes.
//!
//! The parser only returns structured outcomes; this module turns them into
//! log events and into a serializable summary.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};
use vocab_extract_core::{DropReason, DropStatistics};

use crate::parser::{Extraction, LineOutcome, MIN_LINE_CHARS};

/// Summary of one extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub extracted: usize,
    pub dropped: usize,
    pub skipped_lines: usize,
    pub statistics: DropStatistics,
}

impl ExtractionReport {
    pub fn new(extraction: &Extraction, input: &Path, output: Option<&Path>) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.map(|path| path.display().to_string()),
            extracted: extraction.entries.len(),
            dropped: extraction.statistics.total(),
            skipped_lines: extraction.skipped_lines.len(),
            statistics: extraction.statistics.clone(),
        }
    }
}

/// Emits one log event per parsed line plus a closing summary.
///
/// Drops are warnings. Duplicates are only warnings when `print_duplicates`
/// is set, and debug events otherwise.
pub fn log_extraction(extraction: &Extraction, print_duplicates: bool) {
    for line in &extraction.skipped_lines {
        debug!(
            "{}. Skipping '{}' because it is shorter than {} characters.",
            line.number,
            line.text,
            MIN_LINE_CHARS
        );
    }

    for line in &extraction.lines {
        match &line.outcome {
            LineOutcome::Accepted(entry) => {
                debug!(
                    "{}. OK: appended entry: '{}' - '{}' ({})",
                    line.number, entry.key, entry.answer, entry.extra
                );
            }
            LineOutcome::Dropped(DropReason::Duplicate) if !print_duplicates => {
                debug!("{}. Dropping duplicate '{}'.", line.number, line.text);
            }
            LineOutcome::Dropped(reason) => {
                warn!(
                    "{}. Dropping '{}' because {}.",
                    line.number,
                    line.text,
                    reason.describe()
                );
            }
        }
    }

    info!(
        "OK: extracted '{}' words; dropped: '{}'.",
        extraction.entries.len(),
        extraction.statistics
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineParser;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured_log(extraction: &Extraction, print_duplicates: bool) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(buffer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            log_extraction(extraction, print_duplicates);
        });
        buffer.contents()
    }

    #[test]
    fn test_log_names_each_skipped_line() {
        let extraction = LineParser::new("cat - kot\n\nab\n——\ndog - pies").parse();
        let log = captured_log(&extraction, true);

        assert!(log.contains("2. Skipping '' because it is shorter than 4 characters."), "{log}");
        assert!(log.contains("3. Skipping 'ab' because"), "{log}");
        assert!(log.contains("4. Skipping '--' because"), "{log}");
        assert!(log.contains("extracted '2' words"), "{log}");
    }

    #[test]
    fn test_log_duplicate_level_follows_flag() {
        let extraction = LineParser::new("cat - kot\ncat - kotek").parse();

        let loud = captured_log(&extraction, true);
        assert!(loud.contains("WARN"), "{loud}");
        assert!(loud.contains("because it's a duplicate"), "{loud}");

        let quiet = captured_log(&extraction, false);
        assert!(!quiet.contains("WARN"), "{quiet}");
        assert!(quiet.contains("2. Dropping duplicate 'cat - kotek'."), "{quiet}");
    }

    #[test]
    fn test_report_counts_match_extraction() {
        let extraction = LineParser::new("cat - kot\ncat - kot\nbroken\n\ndog - pies").parse();
        let report = ExtractionReport::new(&extraction, Path::new("in.txt"), None);

        assert_eq!(report.extracted, 2);
        assert_eq!(report.dropped, 2);
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(report.statistics.count(DropReason::Duplicate), 1);
    }

    #[test]
    fn test_report_json_omits_missing_output() {
        let extraction = LineParser::new("cat - kot\nbroken").parse();
        let report = ExtractionReport::new(&extraction, Path::new("in.txt"), None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("output").is_none());
        assert_eq!(json["statistics"]["no_hyphen"], 1);
        assert_eq!(json["extracted"], 1);
    }

    #[test]
    fn test_report_json_includes_output_when_written() {
        let extraction = LineParser::new("cat - kot").parse();
        let report = ExtractionReport::new(
            &extraction,
            Path::new("in.txt"),
            Some(Path::new("out.json")),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["output"], "out.json");
        assert!(json["statistics"].as_object().unwrap().is_empty());
    }
}
