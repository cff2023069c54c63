//! Parse JSON and JSON Lines documents and diagnose whatever fails.

use crate::analyzer::{ErrorAnalyzer, ErrorMatch};
use crate::error::DoctorError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const BOM: char = '\u{feff}';
const DOCUMENT_PATTERNS: [&str; 3] = ["*.json", "*.jsonl", "*.ndjson"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Jsonl,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                DocumentFormat::Jsonl
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// A parse failure with its position in the checked document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    fn from_json(error: &serde_json::Error, line_offset: usize) -> Self {
        let line = error.line();
        // serde_json reports line 0 when it has no position.
        let message = if line == 0 {
            error.to_string()
        } else {
            format!(
                "{} at line {} column {}",
                error_code_text(error),
                line + line_offset,
                error.column()
            )
        };

        Self {
            message,
            line: line + line_offset,
            column: error.column(),
        }
    }

    /// Error for a document that starts with U+FEFF.
    ///
    /// This is not a parse failure: the rest of the document is still parsed
    /// after the mark is stripped. JSON text must not begin with a byte order
    /// mark, so a document carrying one is reported as invalid even when
    /// nothing else is wrong with it, and `check` exits with status 1.
    fn byte_order_mark() -> Self {
        Self {
            message: "unexpected byte order mark (BOM) at line 1 column 1".to_string(),
            line: 1,
            column: 1,
        }
    }
}

/// Text of a `serde_json::Error` without its " at line N column M" suffix.
fn error_code_text(error: &serde_json::Error) -> String {
    let text = error.to_string();
    match text.rfind(" at line ") {
        Some(index) => text[..index].to_string(),
        None => text,
    }
}

/// One invalid document (or JSON Lines record) and what the analyzer made of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub source: String,
    pub format: DocumentFormat,
    pub error: SyntaxError,
    pub matches: Vec<ErrorMatch>,
}

pub struct Validator<'a> {
    analyzer: &'a ErrorAnalyzer,
    suggest_fixes: bool,
}

impl<'a> Validator<'a> {
    pub fn new(analyzer: &'a ErrorAnalyzer) -> Self {
        Self {
            analyzer,
            suggest_fixes: true,
        }
    }

    pub fn suggest_fixes(mut self, enabled: bool) -> Self {
        self.suggest_fixes = enabled;
        self
    }

    /// Check one document held in memory. An empty result means it parsed.
    pub fn check_str(&self, source: &str, text: &str, format: DocumentFormat) -> Vec<Diagnosis> {
        let mut diagnoses = Vec::new();

        let text = match text.strip_prefix(BOM) {
            Some(rest) => {
                diagnoses.push(self.diagnose(source, format, SyntaxError::byte_order_mark(), text));
                rest
            }
            None => text,
        };

        match format {
            DocumentFormat::Json => {
                if let Err(e) = serde_json::from_str::<serde_json::Value>(text) {
                    let error = SyntaxError::from_json(&e, 0);
                    diagnoses.push(self.diagnose(source, format, error, text));
                }
            }
            DocumentFormat::Jsonl => {
                for (index, line) in text.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(e) = serde_json::from_str::<serde_json::Value>(line) {
                        let error = SyntaxError::from_json(&e, index);
                        diagnoses.push(self.diagnose(source, format, error, line));
                    }
                }
            }
        }

        debug!(source, problems = diagnoses.len(), "checked document");
        diagnoses
    }

    /// Like [`Validator::check_str`], but reports invalid UTF-8 as a diagnosis.
    pub fn check_bytes(&self, source: &str, bytes: &[u8], format: DocumentFormat) -> Vec<Diagnosis> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.check_str(source, text, format),
            Err(e) => {
                let prefix = String::from_utf8_lossy(&bytes[..e.valid_up_to()]);
                let line = prefix.matches('\n').count() + 1;
                let column = prefix.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
                let error = SyntaxError {
                    message: format!("invalid UTF-8 at line {} column {}: {}", line, column, e),
                    line,
                    column,
                };
                vec![self.diagnose(source, format, error, &String::from_utf8_lossy(bytes))]
            }
        }
    }

    pub fn check_path(&self, path: &Path) -> Result<Vec<Diagnosis>, DoctorError> {
        let bytes = fs::read(path).map_err(|e| DoctorError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let source = path.display().to_string();
        Ok(self.check_bytes(&source, &bytes, DocumentFormat::from_path(path)))
    }

    fn diagnose(&self, source: &str, format: DocumentFormat, error: SyntaxError, content: &str) -> Diagnosis {
        let content = self.suggest_fixes.then_some(content);
        let matches = self.analyzer.analyze_error(&error.message, content);
        Diagnosis {
            source: source.to_string(),
            format,
            error,
            matches,
        }
    }
}

/// Expand `paths` into the list of documents to check.
///
/// Files are taken as given; directories are walked recursively and only
/// `.json`, `.jsonl` and `.ndjson` files inside them are kept.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, DoctorError> {
    let patterns: Vec<glob::Pattern> = DOCUMENT_PATTERNS
        .iter()
        .filter_map(|pattern| glob::Pattern::new(pattern).ok())
        .collect();
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            if !path.exists() {
                return Err(DoctorError::ReadError {
                    path: path.clone(),
                    message: "no such file or directory".to_string(),
                });
            }
            files.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let is_document = {
                let name = entry.file_name().to_string_lossy();
                patterns.iter().any(|pattern| pattern.matches(&name))
            };
            if is_document {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}
