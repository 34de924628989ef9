use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use permgen::{load_permissions, Config, ReportFormat, Reporter};

/// permgen - Document the permissions declared in an AndroidManifest.xml
#[derive(Parser, Debug)]
#[command(name = "permgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AndroidManifest.xml to read permission declarations from
    #[arg(short, long, value_name = "FILE")]
    manifest: PathBuf,

    /// Resource folder holding the string files (e.g. res/values)
    #[arg(short, long, value_name = "DIR")]
    resources: PathBuf,

    /// Tag name printed in the section header row
    #[arg(short, long, default_value = "")]
    tag: String,

    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// HTML-escape the tag and cell contents
    #[arg(long)]
    escape_html: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Html,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = parse_cli();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("permgen v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    let permissions = load_permissions(&cli.manifest, &cli.resources, &config)?;
    info!(
        "Found {} permissions in {}",
        permissions.len(),
        cli.manifest.display()
    );

    Reporter::new(&config.report).report(&cli.tag, &permissions)
}

/// Parse arguments; usage errors exit with status 1, help and version with 0
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // stdout carries the report
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Override with CLI arguments
    if let Some(format) = cli.format {
        config.report.format = format.into();
    }
    if cli.escape_html {
        config.report.escape_html = true;
    }

    Ok(config)
}
