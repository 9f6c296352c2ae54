use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "existing file not overwritten: {}",
            path.display()
        )))
    }
}

/// Write fully encoded bytes to `path`, creating the parent directory.
pub(crate) fn write_file(path: &Path, bytes: &[u8], force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
