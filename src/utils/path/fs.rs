//! Filesystem path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```
/// use std::path::Path;
/// use typed_routes::utils::path::normalize_path;
///
/// let abs = normalize_path(Path::new("./src/pages/about.astro"));
/// assert!(abs.is_absolute());
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render a path with forward slashes regardless of platform.
///
/// Backslashes are treated as separators too, so Windows-style paths
/// compare equal to their POSIX form.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.txt"));
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("src/pages/a.astro")), "src/pages/a.astro");
        assert_eq!(to_slash(Path::new(r"C:\app\src\pages\a.astro")), "C:/app/src/pages/a.astro");
    }
}
