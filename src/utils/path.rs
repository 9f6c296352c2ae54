//! Path utilities: expand ~, resolve the output directory.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--out` when given, the configured output directory otherwise.
pub fn output_dir(cli_value: Option<&str>, configured: &str) -> PathBuf {
    match cli_value {
        Some(p) => expand_tilde(p),
        None if configured.trim().is_empty() => PathBuf::from("."),
        None => expand_tilde(configured),
    }
}

/// Optional directory setting; empty means unset.
pub fn optional_dir(value: &str) -> Option<PathBuf> {
    let v = value.trim();
    (!v.is_empty()).then(|| expand_tilde(v))
}
