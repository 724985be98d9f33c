//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes the generated letter to `path` atomically via a temp file and
/// rename, so an interrupted run never leaves a half-written letter behind.
/// The temp file lives in the target directory to keep the rename on one
/// filesystem.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("letter.txt");

        atomic_write(&path, "Dear Sir/Madam,").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dear Sir/Madam,");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("letter.txt");

        fs::write(&path, "old draft").unwrap();
        atomic_write(&path, "final letter").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "final letter");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("letter.txt");

        atomic_write(&path, "content").unwrap();

        assert!(!temp_dir.path().join(".letter.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_swahili_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("barua.txt");

        let content = "Ndugu Meneja,\n\nWako katika Ujenzi wa Taifa";
        atomic_write(&path, content).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}
