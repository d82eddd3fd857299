//! Console output: glyph-prefixed status lines, JSON and spinners.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const SUCCESS: char = '\u{2713}'; // ✓
const FAILURE: char = '\u{2717}'; // ✗
const WARNING: char = '\u{26a0}'; // ⚠
const INFO: char = '\u{2139}'; // ℹ

/// Writes to stdout according to the resolved format and the quiet flag.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` resolves to `Human` on a terminal and `Plain` otherwise.
    /// Colour is only used for `Human`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto => detect_format(),
            other => other,
        };
        Self::build(
            resolved_format,
            args.quiet,
            args.no_color || config.output.no_color,
        )
    }

    /// Output for `archgen-impl`, which has no format or quiet flags.
    pub fn for_impl(no_color: bool, config: &AppConfig) -> Self {
        Self::build(detect_format(), false, no_color || config.output.no_color)
    }

    fn build(resolved_format: OutputFormat, quiet: bool, no_color: bool) -> Self {
        Self {
            resolved_format,
            quiet,
            no_color: no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(SUCCESS, msg, Style::new().green())
    }

    /// Written even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.paint(FAILURE, msg, Style::new().red()))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(WARNING, msg, Style::new().yellow())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(INFO, msg, Style::new().blue())
    }

    /// Bold cyan section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document. Not suppressed in quiet mode.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner for a long step; hidden in quiet or non-human output.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn status(&self, glyph: char, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(glyph, msg, style))
    }

    fn paint(&self, glyph: char, msg: &str, style: Style) -> String {
        if self.no_color {
            format!("{glyph} {msg}")
        } else {
            format!("{} {}", glyph.style(style.bold()), msg.style(style))
        }
    }
}

fn detect_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Human
    } else {
        OutputFormat::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_mode_still_reports_errors() {
        let out = manager(OutputFormat::Plain, true, true);
        assert!(out.is_quiet());
        assert!(out.print("hidden").is_ok());
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn only_human_format_colors() {
        assert!(!manager(OutputFormat::Plain, false, false).supports_color());
        assert!(!manager(OutputFormat::Json, false, false).supports_color());
        assert!(!manager(OutputFormat::Human, false, true).supports_color());
        assert!(manager(OutputFormat::Human, false, false).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let out = manager(OutputFormat::Plain, false, false);
        assert_eq!(out.paint(WARNING, "careful", Style::new().yellow()), "⚠ careful");
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn hidden_spinner_outside_human_format() {
        let out = manager(OutputFormat::Plain, false, true);
        assert!(out.spinner("working").is_hidden());
    }
}
