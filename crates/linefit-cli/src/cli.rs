//! Command-line interface for the linefit utility
//!
//! Wraps label text read from a file or stdin, and exposes the segmenters
//! for inspection.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::styler::render_lines;
use linefit::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use linefit::text::TextWrapper;
use linefit::{Line, Measure, Segmenter, SegmenterKind, WrapConfig};

/// Linefit - Wrap label text to a width
#[derive(Parser)]
#[command(name = "linefit")]
#[command(about = "Wrap styled label text into lines that fit a width")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
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

#[derive(Subcommand)]
pub enum Commands {
    /// Wrap text so every line fits the given width
    Wrap {
        /// Input file containing label text (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for wrapped text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum line width (0 disables wrapping)
        #[arg(short, long, default_value_t = 80)]
        width: usize,

        /// Unit the width is measured in
        #[arg(long, value_enum, default_value_t = MeasureChoice::Columns)]
        measure: MeasureChoice,

        /// Segmentation rules for words and graphemes
        #[arg(long, value_enum, default_value_t = SegmenterChoice::Unicode)]
        segmenter: SegmenterChoice,

        /// Treat input as plain text instead of markdown
        #[arg(long)]
        plain: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// When to style bold/italic words in text output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Print the graphemes of the input, one per line
    Graphemes {
        /// Input file to segment (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Segmentation rules to apply
        #[arg(long, value_enum, default_value_t = SegmenterChoice::Unicode)]
        segmenter: SegmenterChoice,

        /// Print a JSON array instead
        #[arg(long)]
        json: bool,
    },

    /// Print the words of the input, one per line
    Words {
        /// Input file to segment (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Segmentation rules to apply
        #[arg(long, value_enum, default_value_t = SegmenterChoice::Unicode)]
        segmenter: SegmenterChoice,

        /// Print a JSON array instead
        #[arg(long)]
        json: bool,
    },
}

/// Width units
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum MeasureChoice {
    /// Terminal display columns
    #[default]
    Columns,
    /// User-perceived characters
    Graphemes,
}

impl From<MeasureChoice> for Measure {
    fn from(value: MeasureChoice) -> Self {
        match value {
            MeasureChoice::Columns => Measure::Columns,
            MeasureChoice::Graphemes => Measure::Graphemes,
        }
    }
}

/// Segmentation strategies
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum SegmenterChoice {
    /// Unicode grapheme clusters and word boundaries
    #[default]
    Unicode,
    /// Code points and literal spaces
    Fallback,
}

impl From<SegmenterChoice> for SegmenterKind {
    fn from(value: SegmenterChoice) -> Self {
        match value {
            SegmenterChoice::Unicode => SegmenterKind::Unicode,
            SegmenterChoice::Fallback => SegmenterKind::Fallback,
        }
    }
}

/// Output formats for wrapped text
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One wrapped line per row
    #[default]
    Text,
    /// Lines of styled tokens as JSON
    Json,
}

/// When to style output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always style
    Always,
    /// Never style
    Never,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    content: &'a str,
    #[serde(rename = "type")]
    word_type: String,
}

#[derive(Serialize)]
struct JsonLines<'a> {
    lines: Vec<Vec<JsonToken<'a>>>,
}

/// Serialize packed lines as `{"lines": [[{"content", "type"}, ...], ...]}`
pub fn lines_to_json(lines: &[Line]) -> Result<String> {
    let output = JsonLines {
        lines: lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|token| JsonToken {
                        content: &token.content,
                        word_type: token.word_type.to_string(),
                    })
                    .collect()
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Main CLI application
#[derive(Default)]
pub struct LinefitApp;

impl LinefitApp {
    pub fn new() -> Self {
        Self
    }

    /// Build the wrapping config from command-line choices
    pub fn build_config(
        width: usize,
        measure: MeasureChoice,
        segmenter: SegmenterChoice,
        plain: bool,
    ) -> WrapConfig {
        WrapConfig::new(width)
            .with_measure(measure.into())
            .with_segmenter(segmenter.into())
            .with_markdown(!plain)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Linefit v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Wrap {
                input,
                output,
                width,
                measure,
                segmenter,
                plain,
                format,
                color,
            } => {
                let config = Self::build_config(width, measure, segmenter, plain);
                self.wrap_command(input, output, config, format, color, cli.verbose)
            }
            Commands::Graphemes {
                input,
                segmenter,
                json,
            } => {
                let content = self.read_input(input)?;
                let kind = SegmenterKind::from(segmenter);
                self.print_segments(&kind.graphemes(content.trim_end_matches('\n')), json)
            }
            Commands::Words {
                input,
                segmenter,
                json,
            } => {
                let content = self.read_input(input)?;
                let kind = SegmenterKind::from(segmenter);
                self.print_segments(&kind.words(content.trim_end_matches('\n')), json)
            }
        }
    }

    /// Handle the wrap command
    fn wrap_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config: WrapConfig,
        format: OutputFormat,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let lines = TextWrapper::new(config).wrap(&content)?;
        debug!(lines = lines.len(), "Wrapped input");

        if verbose {
            eprintln!(
                "Wrapped into {} lines of at most {} {}",
                lines.len(),
                config.max_width,
                config.measure
            );
        }

        let rendered = match format {
            OutputFormat::Json => lines_to_json(&lines)?,
            OutputFormat::Text => {
                render_lines(&lines, self.should_colorize(&output, color))
            }
        };
        self.write_output(output, &rendered)
    }

    /// Print segments one per line, with visible markers for whitespace
    fn print_segments(&self, segments: &[&str], json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(segments)?);
        } else {
            for segment in segments {
                println!("{:?}", segment);
            }
        }
        Ok(())
    }

    /// Determine if we should style the output based on color choice and destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
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

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                if content.is_empty() || content.ends_with('\n') {
                    print!("{}", content);
                } else {
                    println!("{}", content);
                }
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
