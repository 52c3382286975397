//! Command implementation for the CLI tool.

use std::path::Path;

use swf_telemetry::{PatchOptions, TelemetryPatcher};

use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::password::get_password;

/// Configuration for the patch command.
pub struct PatchConfig<'a> {
    pub swf_path: &'a Path,
    pub password: Option<String>,
    pub prompt_password: bool,
    pub allow_missing_file_attributes: bool,
    pub level: u32,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Patch command implementation
pub fn patch(config: &PatchConfig<'_>) -> ExitCode {
    let password = match get_password(config.password.clone(), config.prompt_password) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return ExitCode::BadArgs;
        }
    };

    let options = match PatchOptions::new().level(config.level) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };
    let options = options
        .password_opt(password)
        .require_file_attributes(!config.allow_missing_file_attributes)
        .dry_run(config.dry_run);

    let report = match TelemetryPatcher::new(options).patch_path(config.swf_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}: {}", config.swf_path.display(), e);
            return error_to_exit_code(&e);
        }
    };

    if !report.inserted {
        if !config.quiet {
            eprintln!(
                "{}: no FileAttributes tag found, file left unchanged",
                config.swf_path.display()
            );
        }
        return ExitCode::Warning;
    }

    if !config.quiet {
        let protection = if report.password_protected {
            "with password"
        } else {
            "with no password"
        };
        if report.written {
            println!("Added opt-in flag {}", protection);
        } else {
            println!(
                "Would add opt-in flag {} (dry run, {} -> {} bytes)",
                protection, report.original_length, report.new_length
            );
        }
    }

    ExitCode::Success
}
