//! Command-line interface for the gridspec utility
//!
//! Parses, validates and normalizes grid row/column specifications.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::colorizer::{format_diagnostic, format_summary};
use gridspec::core::logging::init_logging;
use gridspec::{
    format_definitions, render_table, DefinitionParser, Grid, GridAxis, GridHost, SizingDefinition,
    TrackDefinition,
};

/// Gridspec - Compact grid row and column definitions
#[derive(Parser)]
#[command(name = "gridspec")]
#[command(about = "Parse and validate compact grid row/column sizing specifications")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Where the spec comes from
#[derive(clap::Args, Debug, Clone)]
pub struct SpecSource {
    /// Grid spec, e.g. "Auto,*(min=100),200"
    #[arg(conflicts_with = "input")]
    pub spec: Option<String>,

    /// File containing the grid spec (use - for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a grid spec and print its definitions
    Parse {
        #[command(flatten)]
        source: SpecSource,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Report every entry and option that would be skipped
    Validate {
        #[command(flatten)]
        source: SpecSource,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Print the spec in canonical form, without invalid parts
    Format {
        #[command(flatten)]
        source: SpecSource,
    },

    /// Show the tracks a grid would get from the spec
    Apply {
        #[command(flatten)]
        source: SpecSource,

        /// Which grid axis the spec describes
        #[arg(long, default_value = "rows")]
        axis: GridAxis,
    },
}

/// Output formats for the parse command
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One canonical entry per line
    #[default]
    Text,
    /// JSON array of definitions
    Json,
    /// Aligned table
    Table,
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Serialize)]
struct TrackView<'a> {
    size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shared_size_group: Option<&'a str>,
}

impl<'a> From<&'a TrackDefinition> for TrackView<'a> {
    fn from(track: &'a TrackDefinition) -> Self {
        Self {
            size: track.size.to_string(),
            min: track.min,
            max: track.max,
            shared_size_group: track.shared_size_group.as_deref(),
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct GridspecApp {
    parser: DefinitionParser,
}

impl GridspecApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("GRIDSPEC_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("GRIDSPEC_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Gridspec v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Parse { source, format } => {
                let spec = self.read_spec(source, cli.verbose)?;
                let output = self.parse_command(&spec, format)?;
                self.write_stdout(&output)
            }
            Commands::Validate { source, color } => {
                let spec = self.read_spec(source, cli.verbose)?;
                let colorize = should_colorize(color);
                let (output, result) = self.validate_command(&spec, colorize);
                self.write_stdout(&output)?;
                result
            }
            Commands::Format { source } => {
                let spec = self.read_spec(source, cli.verbose)?;
                let output = self.format_command(&spec);
                self.write_stdout(&output)
            }
            Commands::Apply { source, axis } => {
                let spec = self.read_spec(source, cli.verbose)?;
                let output = self.apply_command(&spec, axis)?;
                self.write_stdout(&output)
            }
        }
    }

    /// Handle the parse command
    pub fn parse_command(&self, spec: &str, format: OutputFormat) -> Result<String> {
        let definitions = self.parser.parse(spec);
        debug!(definition_count = definitions.len(), ?format, "Parsed spec");

        Ok(match format {
            OutputFormat::Text => definitions
                .iter()
                .map(SizingDefinition::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&definitions)?,
            OutputFormat::Table => render_table(&definitions),
        })
    }

    /// Handle the validate command
    ///
    /// Returns the report text and an error if anything was skipped.
    pub fn validate_command(&self, spec: &str, colorize: bool) -> (String, Result<()>) {
        let report = self.parser.parse_with_diagnostics(spec);

        let mut lines: Vec<String> = report
            .diagnostics
            .iter()
            .map(|diagnostic| format_diagnostic(diagnostic, colorize))
            .collect();
        lines.push(format_summary(
            report.definitions.len(),
            report.diagnostics.len(),
            colorize,
        ));

        let result = report
            .into_result()
            .map(|_| ())
            .map_err(anyhow::Error::from);
        (lines.join("\n"), result)
    }

    /// Handle the format command
    pub fn format_command(&self, spec: &str) -> String {
        format_definitions(&self.parser.parse(spec))
    }

    /// Handle the apply command
    pub fn apply_command(&self, spec: &str, axis: GridAxis) -> Result<String> {
        let mut grid = Grid::new();
        let applied = match axis {
            GridAxis::Rows => grid.set_rows(spec),
            GridAxis::Columns => grid.set_columns(spec),
        };

        if !applied {
            return Err(anyhow!(
                "No valid definitions, the grid's {} would be left untouched",
                axis
            ));
        }

        let tracks: Vec<TrackView<'_>> = grid.tracks(axis).iter().map(TrackView::from).collect();
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "axis": axis.to_string(),
            "tracks": tracks,
        }))?)
    }

    fn read_spec(&self, source: SpecSource, verbose: bool) -> Result<String> {
        let content = match (source.spec, source.input) {
            (Some(spec), _) => spec,
            (None, input) => self.read_input(input)?,
        };

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        // Files and stdin usually end in a newline that is not part of the spec
        Ok(content.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    fn write_stdout(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout();
        if content.is_empty() || content.ends_with('\n') {
            write!(stdout, "{}", content)?;
        } else {
            writeln!(stdout, "{}", content)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// Determine if validation output should be colorized
fn should_colorize(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            crossterm::tty::IsTty::is_tty(&std::io::stdout())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_parse_command_text() {
        let app = GridspecApp::new();
        let output = app
            .parse_command("auto,*(MIN=10),foo,2*", OutputFormat::Text)
            .unwrap();
        assert_eq!(output, "Auto\n*(min=10)\n2*");
    }

    #[test]
    fn test_parse_command_json() {
        let app = GridspecApp::new();
        let output = app.parse_command("200(max=300)", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["kind"], "pixel");
        assert_eq!(value[0]["value"], 200.0);
        assert_eq!(value[0]["max_value"], 300.0);
    }

    #[test]
    fn test_parse_command_empty() {
        let app = GridspecApp::new();
        assert_eq!(app.parse_command("", OutputFormat::Text).unwrap(), "");
        assert_eq!(app.parse_command("", OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_validate_command_clean() {
        let app = GridspecApp::new();
        let (output, result) = app.validate_command("Auto,*", false);
        assert!(result.is_ok());
        assert_eq!(output, "✓ Valid grid spec (2 definition(s))");
    }

    #[test]
    fn test_validate_command_reports_problems() {
        let app = GridspecApp::new();
        let (output, result) = app.validate_command("Auto,foo,*(mn=1)", false);
        assert!(result.is_err());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "✗ entry 1: unrecognized size `foo`");
        assert_eq!(lines[1], "! entry 2: unknown option `mn`");
        assert_eq!(lines[2], "✗ 2 problem(s), 2 definition(s) kept");
    }

    #[test]
    fn test_format_command() {
        let app = GridspecApp::new();
        assert_eq!(app.format_command("AUTO,,3*(max=9)"), "Auto,3*(max=9)");
    }

    #[test]
    fn test_apply_command() {
        let app = GridspecApp::new();
        let output = app
            .apply_command("Auto(SharedSizeGroup=a),*", GridAxis::Columns)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["axis"], "columns");
        assert_eq!(value["tracks"][0]["size"], "Auto");
        assert_eq!(value["tracks"][0]["shared_size_group"], "a");
        assert_eq!(value["tracks"][1]["size"], "*");

        assert!(app.apply_command("nothing valid", GridAxis::Rows).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let app = GridspecApp::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Auto,*").unwrap();

        let content = app.read_input(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(content, "Auto,*\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = GridspecApp::new();
        let result = app.read_input(Some(PathBuf::from("/nonexistent/spec.txt")));
        assert!(result.unwrap_err().to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_read_spec_strips_trailing_newline() {
        let app = GridspecApp::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2*,Auto").unwrap();

        let source = SpecSource {
            spec: None,
            input: Some(file.path().to_path_buf()),
        };
        assert_eq!(app.read_spec(source, false).unwrap(), "2*,Auto");
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from(["gridspec", "parse", "Auto,*", "--format", "table"]).unwrap();
        match cli.command {
            Commands::Parse { source, format } => {
                assert_eq!(source.spec.as_deref(), Some("Auto,*"));
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("expected parse command"),
        }

        let cli = Cli::try_parse_from(["gridspec", "apply", "*", "--axis", "columns"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Apply {
                axis: GridAxis::Columns,
                ..
            }
        ));

        assert!(Cli::try_parse_from(["gridspec", "apply", "*", "--axis", "diagonal"]).is_err());
    }
}
