//! Static catalogs of JSON error guides and the message patterns that point at them.

use crate::error::DoctorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

mod guides;
mod patterns;

pub use guides::GUIDES;
pub use patterns::{PatternDef, PATTERNS};

/// Broad family an error guide belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Syntax,
    Structure,
    DataType,
    Encoding,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Syntax,
        Category::Structure,
        Category::DataType,
        Category::Encoding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Syntax => "syntax",
            Category::Structure => "structure",
            Category::DataType => "data-type",
            Category::Encoding => "encoding",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DoctorError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// One entry of the error guide: what the error means, why it happens and how to fix it.
///
/// `related_errors` holds guide ids. They are not required to resolve; lookups
/// drop ids that are not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorGuideItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub common_causes: &'static [&'static str],
    pub bad_example: &'static str,
    pub solution: &'static str,
    pub tips: &'static [&'static str],
    pub related_errors: &'static [&'static str],
}
