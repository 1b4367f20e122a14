use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum configuration file size (1 MB)
///
/// The configuration holds two short strings; anything larger is not a
/// configuration file.
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the link itself is
/// inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a report output directory exists and is a real directory
///
/// # Errors
/// Returns an error if:
/// - The directory doesn't exist
/// - The path is a symbolic link
/// - The path is not a directory
pub fn validate_output_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(
            "Output directory does not exist: {}\n\n💡 Hint: Create the directory first or pass an existing one with --output-dir",
            path.display()
        );
    }

    validate_not_symlink(path, "write")?;

    if !path.is_dir() {
        anyhow::bail!("Output path is not a directory: {}", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.toml");
        fs::write(&file_path, "test").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/file.txt");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        fs::write(&target, "{}").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is a symbolic link"));
    }

    #[test]
    fn test_validate_output_directory_success() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_output_directory(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_output_directory_missing() {
        let result = validate_output_directory(Path::new("/nonexistent/reports"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Output directory does not exist"));
    }

    #[test]
    fn test_validate_output_directory_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "x").unwrap();

        let result = validate_output_directory(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/config.toml");
        assert!(validate_file_size(1000, &path, MAX_CONFIG_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/config.toml");
        let result = validate_file_size(MAX_CONFIG_FILE_SIZE + 1, &path, MAX_CONFIG_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
