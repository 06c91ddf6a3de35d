//! CLI - Command Line Interface for genre-reel
//!
//! The host invokes the plugin once per navigation event with three
//! positional arguments: the plugin base URL, the listing handle and the
//! `?`-prefixed parameter string. Host calls are printed to stdout, JSON
//! when stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Root genre list
//! genre-reel plugin://plugin.video.genre-reel/ 1 ""
//!
//! # Videos of the third genre
//! genre-reel plugin://plugin.video.genre-reel/ 1 "?action=listing&genre_index=2"
//! ```

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::host::{HostEvent, RecordingHost};
use crate::models::{Handle, ListEntry};
use crate::router::RouteError;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for plugin invocations (semantic for the host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments or configuration
    InvalidArgs = 2,
    /// Malformed or out-of-range parameter
    ValidationError = 3,
    /// Unknown or missing action
    InvalidAction = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<&RouteError> for ExitCode {
    fn from(err: &RouteError) -> ExitCode {
        match err {
            RouteError::Validation { .. } => ExitCode::ValidationError,
            RouteError::InvalidAction { .. } => ExitCode::InvalidAction,
        }
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// genre-reel - Genre-organized video catalog plugin
#[derive(Parser, Debug)]
#[command(
    name = "genre-reel",
    version,
    author = "Gorka & Hermes",
    about = "Genre-organized video catalog plugin for media-center virtual folders",
    long_about = "Browse a fixed catalog of videos by genre.\n\n\
                  The host calls the plugin once per navigation event with its base URL,\n\
                  a listing handle and the requested action as a query string.",
    after_help = "EXAMPLES:\n\
                  genre-reel plugin://plugin.video.genre-reel/ 1 \"\"\n\
                  genre-reel plugin://plugin.video.genre-reel/ 1 \"?action=listing&genre_index=0\"",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Plugin base URL used to build navigation URLs
    #[arg(required = true)]
    pub base_url: String,

    /// Listing handle assigned by the host
    #[arg(required = true)]
    pub handle: Handle,

    /// Query string of the requested action (e.g. "?action=listing&genre_index=0")
    #[arg(default_value = "")]
    pub paramstring: String,

    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Catalog TOML to use instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Addon installation directory (artwork lives under resources/images)
    #[arg(long)]
    pub addon_path: Option<PathBuf>,
}

impl Cli {
    /// Parameter string without its leading '?'
    pub fn query(&self) -> &str {
        self.paramstring
            .strip_prefix('?')
            .unwrap_or(&self.paramstring)
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }

    /// Default tracing filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print the host calls of one invocation
    pub fn print_host(&self, host: &RecordingHost) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(host.events());
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print!("{}", render_text(host));
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

/// Human-readable preview of what the host would show
pub fn render_text(host: &RecordingHost) -> String {
    if let Some((success, item)) = host.resolved() {
        let status = if success { "Playing" } else { "Failed" };
        return format!("{}: {}\n", status, item.path);
    }

    let mut out = String::new();
    if let Some(category) = host.category() {
        out.push_str(&format!("== {} ==\n", category));
    }
    for rendered in host.rendered() {
        out.push_str(&format!(
            "{} {}\n",
            entry_marker(&rendered.entry, rendered.is_folder),
            rendered.entry
        ));
        out.push_str(&format!("    {}\n", rendered.url));
    }
    out
}

fn entry_marker(entry: &ListEntry, is_folder: bool) -> &'static str {
    if is_folder {
        "[+]"
    } else if entry.playable {
        "[>]"
    } else {
        "[ ]"
    }
}

/// Count entries among recorded events
pub fn entry_count(events: &[HostEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, HostEvent::AddEntry { .. }))
        .count()
}

// =============================================================================
// Tests
// =============================================================================
