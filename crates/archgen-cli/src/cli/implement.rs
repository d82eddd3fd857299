//! Arguments for the `archgen-impl` binary.
//!
//! Flag-only: the binary always analyzes the current working directory.

use std::path::PathBuf;

use clap::Parser;

/// Generate stub implementations, a factory and a Wire provider set from the
/// interfaces declared in the Go module in the current directory.
#[derive(Debug, Parser)]
#[command(
    name = "archgen-impl",
    bin_name = "archgen-impl",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    after_help = "EXAMPLES:\n\
        \x20 archgen-impl --dry-run\n\
        \x20 archgen-impl --verbose --output ./internal/impl\n\
        \x20 archgen-impl --tags integration,linux --force"
)]
pub struct ImplCli {
    /// Report every analyzed file and interface.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// List the files that would be generated without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Overwrite existing generated files.
    #[arg(long = "force")]
    pub force: bool,

    /// Build tags considered set when evaluating build constraints.
    #[arg(long = "tags", value_name = "TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory the generated files are written to [default: .]
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
