use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of a saved search output file: 256MB
const MAX_INPUT_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// Opens a saved search output file and checks its size
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is larger than 256MB.
pub fn open_input(path: &Path) -> Result<File> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open search output: {}", path.display()))?;
    validate_file_size(&file, path)?;
    Ok(file)
}

/// Validates that a file's size is within acceptable limits (256MB)
///
/// Takes an open file handle so the size checked is the size of the file
/// that is actually read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 256MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_INPUT_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_INPUT_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// Only whole leading components are replaced, so `/home/al` does not
/// abbreviate `/home/alice`. Relative paths are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use rg_matches::format_path_with_tilde;
///
/// // Returns "~/src/app" if HOME=/home/alice
/// let formatted = format_path_with_tilde(Path::new("/home/alice/src/app"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
