//! Password handling for CLI operations.

use rpassword::prompt_password;
use swf_telemetry::Password;

/// Returns the password from the command line, or prompts for one with
/// confirmation when `prompt` is set.
///
/// An empty answer to the prompt means no password.
pub fn get_password(provided: Option<String>, prompt: bool) -> Result<Option<Password>, String> {
    if let Some(pwd) = provided {
        return Ok(Some(Password::new(pwd)));
    }

    if !prompt {
        return Ok(None);
    }

    let pwd1 = prompt_password("Enter password (empty for none): ")
        .map_err(|e| format!("cannot read password: {}", e))?;
    if pwd1.is_empty() {
        return Ok(None);
    }

    let pwd2 = prompt_password("Confirm password: ")
        .map_err(|e| format!("cannot read password: {}", e))?;
    if pwd1 != pwd2 {
        return Err("Passwords do not match".to_string());
    }

    Ok(Some(Password::new(pwd1)))
}
