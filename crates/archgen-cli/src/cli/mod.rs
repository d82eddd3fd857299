//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub mod implement;

pub use global::{GlobalArgs, OutputFormat};
pub use implement::ImplCli;

use archgen_core::domain::{DatabaseKind, ServerKind};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archgen",
    bin_name = "archgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean architecture generator for Go services",
    long_about = "archgen turns a project description (cta.json) into a Go service \
                  laid out in clean-architecture layers.",
    after_help = "EXAMPLES:\n\
        \x20 archgen init\n\
        \x20 archgen generate\n\
        \x20 archgen gen my-project.json ./output --backup\n\
        \x20 archgen completions bash > /usr/share/bash-completion/completions/archgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a project description file.
    #[command(
        about = "Create a project description (cta.json)",
        after_help = "EXAMPLES:\n\
            \x20 archgen init\n\
            \x20 archgen init --yes --name shop --module github.com/acme/shop\n\
            \x20 archgen init --yes --database both --events --domains 3"
    )]
    Init(InitArgs),

    /// Generate a project from a description file.
    #[command(
        visible_alias = "gen",
        about = "Generate code from a project description",
        after_help = "EXAMPLES:\n\
            \x20 archgen generate                     # cta.json into .\n\
            \x20 archgen generate my-config.json\n\
            \x20 archgen gen my-project.json ./output\n\
            \x20 archgen generate --backup --no-skip-existing\n\
            \x20 archgen generate --force --no-skip-existing"
    )]
    Generate(GenerateArgs),

    /// List built-in templates.
    #[command(visible_alias = "ls", about = "List built-in templates")]
    Templates(TemplatesArgs),

    /// Manage the archgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 archgen config get generate.skip_existing\n\
            \x20 archgen config list\n\
            \x20 archgen config init --global"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archgen completions bash > ~/.local/share/bash-completion/completions/archgen\n\
            \x20 archgen completions zsh  > ~/.zfunc/_archgen\n\
            \x20 archgen completions fish > ~/.config/fish/completions/archgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Accept defaults instead of prompting.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and use defaults/flags")]
    pub yes: bool,

    #[arg(long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        long = "module",
        value_name = "MODULE",
        help = "Go module path (e.g. github.com/user/project)"
    )]
    pub module: Option<String>,

    #[arg(long = "framework", value_enum, help = "HTTP framework")]
    pub framework: Option<Framework>,

    #[arg(long = "database", value_enum, help = "Database")]
    pub database: Option<Database>,

    #[arg(long = "events", help = "Enable the RabbitMQ event bus")]
    pub events: bool,

    #[arg(
        long = "domains",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=5),
        help = "Number of default domains (1-5)"
    )]
    pub domains: Option<u8>,

    /// Where to write the description.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "cta.json",
        help = "Description file to write"
    )]
    pub output: PathBuf,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing description")]
    pub force: bool,
}

/// HTTP framework choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Framework {
    Gin,
    Fiber,
}

impl From<Framework> for ServerKind {
    fn from(value: Framework) -> Self {
        match value {
            Framework::Gin => ServerKind::Gin,
            Framework::Fiber => ServerKind::Fiber,
        }
    }
}

/// Database choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Database {
    Postgres,
    Mongodb,
    Both,
}

impl From<Database> for DatabaseKind {
    fn from(value: Database) -> Self {
        match value {
            Database::Postgres => DatabaseKind::Postgres,
            Database::Mongodb => DatabaseKind::MongoDb,
            Database::Both => DatabaseKind::Both,
        }
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project description file [default: cta.json]
    #[arg(value_name = "CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Directory to generate into [default: .]
    #[arg(value_name = "OUTPUT")]
    pub output_dir: Option<PathBuf>,

    /// Skip files that already exist (the default).
    #[arg(long = "skip-existing", overrides_with = "no_skip_existing")]
    pub skip_existing: bool,

    /// Do not skip existing files.
    #[arg(long = "no-skip-existing", overrides_with = "skip_existing")]
    pub no_skip_existing: bool,

    /// Copy existing files to `<name>.backup` before overwriting.
    #[arg(long = "backup")]
    pub backup: bool,

    /// Overwrite existing files even when skipping is on.
    #[arg(long = "force")]
    pub force: bool,

    /// Show the output plan without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// `Some` when either skip flag was given.
    pub fn skip_existing(&self) -> Option<bool> {
        if self.no_skip_existing {
            Some(false)
        } else if self.skip_existing {
            Some(true)
        } else {
            None
        }
    }
}

// ── templates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print template names only.
    #[arg(long = "names", help = "Print one template name per line")]
    pub names: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.force`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the default configuration to disk.
    Init {
        /// Write to the platform config directory instead of `.archgen.toml`.
        #[arg(long = "global")]
        global: bool,
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}
