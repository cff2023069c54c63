//! The `json-doctor` command line: argument definitions and subcommand dispatch.

use crate::analyzer::ErrorAnalyzer;
use crate::catalog::{Category, ErrorGuideItem};
use crate::config::{self, Config};
use crate::error::DoctorError;
use crate::report::{limit_matches, Renderer};
use crate::validate::{collect_files, Diagnosis, DocumentFormat, Validator};
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Every document parsed and nothing else went wrong.
pub const EXIT_OK: u8 = 0;
/// `check` found at least one invalid document.
pub const EXIT_INVALID: u8 = 1;
/// Bad arguments, unreadable input, unknown ids, broken config.
pub const EXIT_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "json-doctor", version, about = "Explains JSON and JSONL parse errors")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explain a parser error message
    Analyze {
        message: String,
        /// The JSON text that failed to parse
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read the JSON text that failed to parse from a file
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Maximum number of matches to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Parse documents and explain every error found
    Check {
        /// Files or directories; reads stdin when omitted
        paths: Vec<PathBuf>,
        /// Treat stdin as JSON Lines
        #[arg(long)]
        jsonl: bool,
        #[arg(long)]
        json: bool,
    },
    /// List error guides
    Guides {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show one error guide with its related errors
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file
    InitConfig,
}

#[derive(Serialize)]
struct GuideDetail<'a> {
    guide: &'a ErrorGuideItem,
    related: &'a [&'a ErrorGuideItem],
}

/// Run a parsed command line, writing its report to `out`, and return the exit status.
///
/// Failures are printed to stderr and turn into [`EXIT_FAILURE`].
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> u8 {
    match run(cli, out) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            EXIT_FAILURE
        }
    }
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<u8> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if let Command::InitConfig = cli.command {
        return init_config(&config_path, out);
    }

    let mut config = Config::load_or_default(&config_path)?;
    if cli.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let analyzer = ErrorAnalyzer::new();
    let renderer = Renderer::from_config(&config.display);

    match cli.command {
        Command::Analyze {
            message,
            content,
            file,
            json,
            limit,
        } => {
            let content = match file {
                Some(path) => Some(fs::read_to_string(&path).map_err(|e| DoctorError::ReadError {
                    path,
                    message: e.to_string(),
                })?),
                None => content,
            };
            if let Some(limit) = limit {
                config.analysis.max_results = limit;
            }

            let content = content.as_deref().filter(|_| config.analysis.suggest_fixes);
            let matches = limit_matches(analyzer.analyze_error(&message, content), &config.analysis);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&matches)?)?;
            } else {
                write!(out, "{}", renderer.matches(&matches))?;
            }
        }
        Command::Check { paths, jsonl, json } => {
            let validator = Validator::new(&analyzer).suggest_fixes(config.analysis.suggest_fixes);

            let (diagnoses, failures) = if paths.is_empty() {
                let mut input = Vec::new();
                io::stdin().read_to_end(&mut input)?;
                let format = if jsonl {
                    DocumentFormat::Jsonl
                } else {
                    DocumentFormat::Json
                };
                (validator.check_bytes("<stdin>", &input, format), Vec::new())
            } else {
                check_paths(&validator, &paths)
            };

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&diagnoses)?)?;
            } else {
                if diagnoses.is_empty() && failures.is_empty() {
                    writeln!(out, "{}", "No problems found".green().bold())?;
                } else {
                    write!(out, "{}", renderer.diagnoses(&diagnoses, &config.analysis))?;
                }
                for failure in &failures {
                    writeln!(out, "{}: {}", "error".red().bold(), failure)?;
                }
            }

            if !failures.is_empty() {
                return Ok(EXIT_FAILURE);
            }
            if !diagnoses.is_empty() {
                return Ok(EXIT_INVALID);
            }
        }
        Command::Guides {
            category,
            search,
            json,
        } => {
            let mut guides = match category {
                Some(name) => analyzer.error_guides_by_category(name.parse::<Category>()?),
                None => analyzer.all_error_guides().iter().collect(),
            };
            if let Some(query) = search {
                let found = analyzer.search_error_guides(&query);
                guides.retain(|guide| found.iter().any(|f| f.id == guide.id));
            }

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&guides)?)?;
            } else {
                write!(out, "{}", renderer.guide_list(&guides))?;
            }
        }
        Command::Show { id, json } => {
            let guide = analyzer
                .error_guide_by_id(&id)
                .ok_or(DoctorError::UnknownGuide(id.clone()))?;
            let related = analyzer.related_errors(&id);

            if json {
                let detail = GuideDetail {
                    guide,
                    related: &related,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
            } else {
                write!(out, "{}", renderer.guide(guide, &related))?;
            }
        }
        Command::InitConfig => return init_config(&config_path, out),
    }

    Ok(EXIT_OK)
}

/// Check every document under `paths`. A path that cannot be read is recorded
/// and skipped so the remaining documents are still reported.
fn check_paths(validator: &Validator<'_>, paths: &[PathBuf]) -> (Vec<Diagnosis>, Vec<DoctorError>) {
    let mut diagnoses = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        let files = match collect_files(std::slice::from_ref(path)) {
            Ok(files) => files,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping path");
                failures.push(e);
                continue;
            }
        };

        for file in files {
            match validator.check_path(&file) {
                Ok(found) => diagnoses.extend(found),
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "skipping unreadable file");
                    failures.push(e);
                }
            }
        }
    }

    (diagnoses, failures)
}

fn init_config<W: Write>(path: &Path, out: &mut W) -> Result<u8> {
    if path.exists() {
        writeln!(out, "Config file already exists at {:?}", path)?;
    } else {
        Config::create_default(path)?;
        writeln!(out, "Created default config file at {:?}", path)?;
    }
    Ok(EXIT_OK)
}
