//! Output formatting for the astdelta CLI.
//!
//! Provides unified output formatting with support for a human-readable
//! table format and machine-readable JSON, with TTY detection to adjust
//! color behavior.

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;

mod json;

pub use self::json::JsonOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Compact mode (minified JSON)
    pub compact: bool,
}

impl OutputConfig {
    /// Create an OutputConfig with automatic TTY detection.
    ///
    /// When stdout is not a TTY (piped or redirected), colors are
    /// disabled unless `color_override` forces them on.
    pub fn auto_detect(format: OutputFormat, color_override: Option<bool>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let use_color = color_override.unwrap_or(is_tty);
        Self {
            format,
            no_color: !use_color,
            compact: false,
        }
    }

    pub fn use_colors(&self) -> bool {
        !self.no_color
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::auto_detect(OutputFormat::Table, None)
    }
}

/// Trait for types that can be rendered in any supported format.
pub trait Outputter: Serialize + Sized {
    /// Render as human-readable format
    fn to_table(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
        }
    }
}
