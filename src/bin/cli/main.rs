//! CLI tool for enabling advanced telemetry in SWF files.

mod commands;
mod exit_codes;
mod password;

use clap::Parser;
use std::path::PathBuf;

/// Enable advanced telemetry in a SWF file
#[derive(Parser)]
#[command(name = "swf-telemetry")]
#[command(author, version, long_about = None)]
#[command(
    about = "Enable advanced telemetry in a SWF file",
    after_help = "If PASSWORD is provided, then a password will be required to view advanced telemetry."
)]
pub struct Cli {
    /// SWF file to patch in place
    swf_file: PathBuf,

    /// Password required to view advanced telemetry
    password: Option<String>,

    /// Prompt for the password instead of passing it as an argument
    #[arg(long, conflicts_with = "password")]
    prompt_password: bool,

    /// Leave files without a FileAttributes tag unchanged instead of failing
    #[arg(long)]
    allow_missing_file_attributes: bool,

    /// zlib compression level for CWS files (0-9)
    #[arg(short = 'l', long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..=9))]
    level: u32,

    /// Build the patched file without writing it
    #[arg(long)]
    dry_run: bool,

    /// Suppress output
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log decisions made while patching
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let exit_code = commands::patch(&commands::PatchConfig {
        swf_path: &cli.swf_file,
        password: cli.password,
        prompt_password: cli.prompt_password,
        allow_missing_file_attributes: cli.allow_missing_file_attributes,
        level: cli.level,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    });

    std::process::exit(exit_code.code());
}
