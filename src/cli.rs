use clap::Parser;
use pom_resolve::application::dto::OutputFormat;
use std::path::PathBuf;

/// Resolve declared dependencies against a locally installed Maven repository
#[derive(Parser, Debug)]
#[command(name = "pom-resolve")]
#[command(version)]
#[command(
    about = "Resolve declared dependencies against a locally installed Maven repository",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory holding pom-resolve.toml (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Directory scanned for installed POM files
    #[arg(short = 'r', long, value_name = "DIR")]
    pub pom_root: Option<PathBuf>,

    /// Directory searched for artifact binaries (defaults to the POM root)
    #[arg(short, long, value_name = "DIR")]
    pub artifact_root: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude dependencies matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "org.junit*:*" -e "*-test"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to pom-resolve.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not require artifact binaries to exist on disk
    #[arg(long)]
    pub no_verify: bool,

    /// Exit with status 1 when any dependency or plugin stays unresolved
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
