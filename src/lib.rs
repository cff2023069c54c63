pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod theme;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use analyzer::{ErrorAnalyzer, ErrorMatch, KEYWORD_ANALYSIS};
pub use catalog::{Category, ErrorGuideItem, Severity};
pub use config::Config;
pub use error::DoctorError;
pub use validate::{Diagnosis, DocumentFormat, Validator};
