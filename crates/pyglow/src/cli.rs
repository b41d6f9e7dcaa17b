#![forbid(unsafe_code)]

//! Command-line argument parsing for the `pyglow` binary.
//!
//! Flags are parsed by hand. `PYGLOW_*` environment values are applied
//! first and explicit flags override them.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use pyglow_editor::DEFAULT_PLACEHOLDER;
use pyglow_style::{THEME_ENV, ThemeKind, ThemeParseError};

use crate::output::OutputFormat;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_FORMAT: &str = "PYGLOW_FORMAT";
pub const ENV_LINE_NUMBERS: &str = "PYGLOW_LINE_NUMBERS";
pub const ENV_INLINE_STYLES: &str = "PYGLOW_INLINE_STYLES";
pub const ENV_PLACEHOLDER: &str = "PYGLOW_PLACEHOLDER";
pub const ENV_EXTRACT_CODE: &str = "PYGLOW_EXTRACT_CODE";

const HELP_TEXT: &str = "\
pyglow - syntax highlighting for Python and C++ snippets

USAGE:
    pyglow [OPTIONS] [FILE]

Reads FILE (or stdin when FILE is absent or '-') and writes the
highlighted result to stdout.

OPTIONS:
    --theme=NAME         Color theme: 'dark' or 'light' (default: detected)
    --format=FORMAT      Output format (default: html)
    --line-numbers       Show a line-number gutter
    --inline-styles      Style spans inline instead of with CSS classes
    --placeholder=TEXT   Placeholder for an empty editor (editor format)
    --read-only          Mark the editor input read-only (editor format)
    --extract-code       Treat input as a model response; use its first
                         fenced code block
    --help, -h           Show this help message
    --version, -V        Show version

FORMATS:
    html       Standalone HTML page
    fragment   A single <pre> block
    editor     Transparent input layer stacked over the highlighted layer
    json       Rendered lines as [{\"class\", \"html\"}] arrays
    tokens     One line per source line listing kind(\"value\") tokens

ENVIRONMENT VARIABLES:
    PYGLOW_THEME            Override theme detection (dark|light)
    PYGLOW_FORMAT           Default for --format
    PYGLOW_LINE_NUMBERS     Default for --line-numbers (true|false)
    PYGLOW_INLINE_STYLES    Default for --inline-styles (true|false)
    PYGLOW_PLACEHOLDER      Default for --placeholder
    PYGLOW_EXTRACT_CODE     Default for --extract-code (true|false)
    COLORFGBG               Terminal colors; a light background selects
                            the light theme
    RUST_LOG, PYGLOW_LOG    Log filter (logs go to stderr)";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Invalid command-line flag or environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTheme(ThemeParseError),
    InvalidFormat(String),
    InvalidBool { name: &'static str, value: String },
    UnknownArgument(String),
    /// A second positional input was given.
    ExtraInput(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTheme(err) => write!(f, "{err}"),
            Self::InvalidFormat(value) => write!(
                f,
                "unknown format '{value}': expected html, fragment, editor, json or tokens"
            ),
            Self::InvalidBool { name, value } => {
                write!(f, "invalid boolean for {name}: '{value}'")
            }
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::ExtraInput(arg) => write!(f, "only one input file is accepted, got extra '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTheme(err) => Some(err),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub theme: ThemeKind,
    pub format: OutputFormat,
    /// Show the line-number gutter.
    pub line_numbers: bool,
    /// Inline `style` attributes instead of classes plus a stylesheet.
    pub inline_styles: bool,
    pub placeholder: String,
    /// Mark the editor input layer read-only.
    pub read_only: bool,
    /// Pull the first fenced code block out of the input.
    pub extract_code: bool,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Dark,
            format: OutputFormat::Html,
            line_numbers: false,
            inline_styles: false,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            read_only: false,
            extract_code: false,
            input: None,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Prints help/version and exits when
    /// asked to; prints the error and exits with status 2 on bad input.
    pub fn parse() -> Self {
        match Self::from_sources(env::args().skip(1), |name| env::var(name).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("pyglow {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("pyglow: {err}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    /// Parse from explicit argument and environment sources.
    pub fn from_sources<I, S, E>(args: I, env: E) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut opts = Self {
            theme: match env(THEME_ENV) {
                Some(val) => val.parse().map_err(ConfigError::InvalidTheme)?,
                None => ThemeKind::detect_from(None, env("COLORFGBG").as_deref()),
            },
            ..Self::default()
        };

        // Apply environment variable defaults first
        if let Some(val) = env(ENV_FORMAT) {
            opts.format = val.parse()?;
        }
        if let Some(val) = env(ENV_LINE_NUMBERS) {
            opts.line_numbers = parse_bool(ENV_LINE_NUMBERS, &val)?;
        }
        if let Some(val) = env(ENV_INLINE_STYLES) {
            opts.inline_styles = parse_bool(ENV_INLINE_STYLES, &val)?;
        }
        if let Some(val) = env(ENV_PLACEHOLDER) {
            opts.placeholder = val;
        }
        if let Some(val) = env(ENV_EXTRACT_CODE) {
            opts.extract_code = parse_bool(ENV_EXTRACT_CODE, &val)?;
        }

        // Parse command-line args (override env vars)
        let mut input_seen = false;
        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--line-numbers" => opts.line_numbers = true,
                "--inline-styles" => opts.inline_styles = true,
                "--read-only" => opts.read_only = true,
                "--extract-code" => opts.extract_code = true,
                "-" => set_input(&mut opts, &mut input_seen, None, &arg)?,
                other => {
                    if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = val.parse().map_err(ConfigError::InvalidTheme)?;
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = val.parse()?;
                    } else if let Some(val) = other.strip_prefix("--placeholder=") {
                        opts.placeholder = val.to_string();
                    } else if other.starts_with('-') {
                        return Err(ConfigError::UnknownArgument(other.to_string()));
                    } else {
                        set_input(&mut opts, &mut input_seen, Some(PathBuf::from(other)), other)?;
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

/// Record the positional input, rejecting a second one. `-` (stdin) counts
/// as an input even though it leaves `opts.input` empty.
fn set_input(
    opts: &mut Opts,
    seen: &mut bool,
    path: Option<PathBuf>,
    raw: &str,
) -> Result<(), ConfigError> {
    if *seen {
        return Err(ConfigError::ExtraInput(raw.to_string()));
    }
    *seen = true;
    opts.input = path;
    Ok(())
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
