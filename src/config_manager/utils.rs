use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("valid env var pattern"))
}

/// Replace `${VAR_NAME}` with the value returned by `lookup`.
/// Variables the lookup doesn't know are left untouched.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_var_pattern()
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// True for values that can't be a real secret: blank, or a placeholder
/// that was never substituted.
pub fn is_unset_secret(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || env_var_pattern().is_match(trimmed)
}

/// Read a configuration file and substitute environment variables into it
pub fn read_config_text<F>(config_path: &Path, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path.display());
    }

    debug!("Read {} bytes from {}", content.len(), config_path.display());
    Ok(substitute_env_vars(&content, lookup))
}

/// Load text file with encoding detection
pub fn load_text_file_with_guess_encoding(file_path: &Path) -> Result<String> {
    let mut bytes = fs::read(file_path)?;

    // utf-8-sig
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            // Windows editors still save GBK/cp936 files
            let bytes = e.into_bytes();
            let (cow, _, had_errors) = encoding_rs::GBK.decode(&bytes);
            if had_errors {
                let (cow, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
                return Ok(cow.into_owned());
            }
            Ok(cow.into_owned())
        }
    }
}
