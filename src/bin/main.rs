//! Signer Key Identifier CLI
//!
//! Prints either the signer name or the raw Subject Key Identifier of a DER
//! certificate, with no trailing newline, for consumption by a signing step.

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use signer_keyid::{
    config::{ConfigManager, ExtractorConfiguration},
    IdentityExtractor, OutputMode,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "signer-keyid")]
#[command(about = "Extract the signer name or key identifier from a DER certificate")]
#[command(long_about = "
Signer Key Identifier - certificate identity extraction for signature blocks

EXAMPLES:
    # Raw Subject Key Identifier bytes
    signer-keyid keyid signing_key.x509

    # Signer name derived from the subject
    signer-keyid signer-name signing_key.x509

    # Hex-encoded key identifier
    signer-keyid --hex keyid signing_key.x509

OUTPUT:
    Values are written to stdout exactly as extracted, without a newline.
    Nothing is written to stdout when extraction fails.

ENVIRONMENT VARIABLES:
    RUST_LOG        Logging level (debug, info, warn, error)
")]
#[command(version)]
struct Cli {
    /// Value to print: keyid or signer-name
    #[arg(value_name = "MODE")]
    mode: String,

    /// DER-encoded X.509 certificate
    #[arg(value_name = "CERTIFICATE")]
    certificate: PathBuf,

    /// Configuration file (defaults to the user configuration if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print output as lowercase hex
    #[arg(long)]
    hex: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_configuration(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    if cli.hex {
        config.output_encoding = "hex".to_string();
    }

    let mode: OutputMode = cli.mode.parse()?;
    log::debug!("Extracting {} from {}", mode, cli.certificate.display());

    let extractor = IdentityExtractor::new(config);
    let identity = extractor.extract_from_file(&cli.certificate)?;
    let output = extractor.render(&identity, mode);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&output)
        .into_diagnostic()
        .wrap_err("Failed to write output")?;
    stdout.flush().into_diagnostic()?;

    Ok(())
}

fn load_configuration(path: Option<&Path>) -> Result<ExtractorConfiguration> {
    let config = match path {
        Some(path) => ConfigManager::with_path(path).load()?,
        None => ConfigManager::new()?.load_or_default()?,
    };
    Ok(config)
}

fn init_logging(config: &ExtractorConfiguration, verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    );
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
