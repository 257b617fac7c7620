use crate::error::XpdfError;
use crate::tool::ToolName;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit binary directory. Equivalent to
/// passing `bin_dir`; a tool missing from this directory is a hard failure.
pub const BIN_DIR_ENV: &str = "XPDFKIT_BIN_DIR";

/// Environment variable enabling the system-`PATH` tier ("1" to enable).
pub const USE_SYSTEM_ENV: &str = "XPDFKIT_USE_SYSTEM";

/// Binary-location overrides consulted by [`resolve_binary_path`].
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Explicit directory; a miss here fails without falling back.
    pub bin_dir: Option<PathBuf>,
    /// Client-configured directory, tried after the explicit tier.
    pub config_bin_dir: Option<PathBuf>,
    /// Search the system `PATH` before the bundled directory.
    pub prefer_system: Option<bool>,
    /// Override of the bundled directory location.
    pub bundled_dir: Option<PathBuf>,
}

/// Directory the binary acquisition step populates. Fixed at compile time
/// relative to this crate; override per call via `bundled_dir`.
pub fn default_bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("bin")
}

/// The tools this crate knows how to resolve.
pub fn list_tools() -> &'static [ToolName] {
    &ToolName::ALL
}

/// Locate the executable for `tool`, trying in order: explicit directory
/// (hard failure on miss), client-configured directory, system `PATH` when
/// preferred, bundled directory, system `PATH` as last resort.
///
/// No caching: every call reflects the filesystem as it is now, so installing
/// or removing binaries takes effect without a restart.
pub fn resolve_binary_path(
    tool: ToolName,
    options: &ResolveOptions,
) -> Result<PathBuf, XpdfError> {
    let explicit = options
        .bin_dir
        .clone()
        .or_else(|| env::var_os(BIN_DIR_ENV).map(PathBuf::from));
    if let Some(dir) = explicit {
        return match resolve_from_dir(&dir, tool) {
            Some(path) => Ok(path),
            None => Err(XpdfError::ToolNotInDir { tool, dir }),
        };
    }

    if let Some(dir) = &options.config_bin_dir {
        if let Some(path) = resolve_from_dir(dir, tool) {
            return Ok(path);
        }
    }

    let prefer_system = options
        .prefer_system
        .unwrap_or_else(|| env::var(USE_SYSTEM_ENV).map(|v| v == "1").unwrap_or(false));
    if prefer_system {
        if let Some(path) = find_on_path(tool) {
            return Ok(path);
        }
    }

    let bundled = options.bundled_dir.clone().unwrap_or_else(default_bundled_dir);
    if let Some(path) = resolve_from_dir(&bundled, tool) {
        return Ok(path);
    }

    if let Some(path) = find_on_path(tool) {
        return Ok(path);
    }

    Err(XpdfError::ToolNotFound(tool))
}

/// Search the `PATH` environment variable for `tool`.
pub fn find_on_path(tool: ToolName) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    let executable = tool.executable_name();
    for segment in env::split_paths(&path_var) {
        let candidate = segment.join(&executable);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn resolve_from_dir(dir: &Path, tool: ToolName) -> Option<PathBuf> {
    let candidate = dir.join(tool.executable_name());
    if is_executable(&candidate) {
        debug!(tool = %tool, path = %candidate.display(), "resolved binary");
        Some(candidate)
    } else {
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

// On Windows the `.exe` suffix is proof enough.
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn stub_tool(dir: &Path, tool: ToolName) -> PathBuf {
        let path = dir.join(tool.executable_name());
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_explicit_dir_wins_over_all_tiers() {
        let explicit = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();
        let expected = stub_tool(explicit.path(), ToolName::Pdfinfo);
        stub_tool(config.path(), ToolName::Pdfinfo);
        stub_tool(bundled.path(), ToolName::Pdfinfo);

        let options = ResolveOptions {
            bin_dir: Some(explicit.path().to_path_buf()),
            config_bin_dir: Some(config.path().to_path_buf()),
            bundled_dir: Some(bundled.path().to_path_buf()),
            ..Default::default()
        };
        let resolved = resolve_binary_path(ToolName::Pdfinfo, &options).unwrap();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_explicit_dir_miss_is_hard_failure() {
        let explicit = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        stub_tool(config.path(), ToolName::Pdfinfo);

        let options = ResolveOptions {
            bin_dir: Some(explicit.path().to_path_buf()),
            config_bin_dir: Some(config.path().to_path_buf()),
            ..Default::default()
        };
        let err = resolve_binary_path(ToolName::Pdfinfo, &options).unwrap_err();
        assert!(matches!(err, XpdfError::ToolNotInDir { .. }));
    }

    #[test]
    fn test_config_dir_falls_back_to_bundled() {
        let config = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();
        let expected = stub_tool(bundled.path(), ToolName::Pdffonts);

        let options = ResolveOptions {
            config_bin_dir: Some(config.path().to_path_buf()),
            bundled_dir: Some(bundled.path().to_path_buf()),
            prefer_system: Some(false),
            ..Default::default()
        };
        let resolved = resolve_binary_path(ToolName::Pdffonts, &options).unwrap();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_file_without_execute_bit_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdfinfo");
        fs::write(&path, "not a binary").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms).unwrap();

        let options = ResolveOptions {
            bin_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let err = resolve_binary_path(ToolName::Pdfinfo, &options).unwrap_err();
        assert!(matches!(err, XpdfError::ToolNotInDir { .. }));
    }

    #[test]
    fn test_no_caching_sees_newly_installed_tool() {
        let dir = tempfile::tempdir().unwrap();
        let options = ResolveOptions {
            bin_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(resolve_binary_path(ToolName::Pdfdetach, &options).is_err());

        stub_tool(dir.path(), ToolName::Pdfdetach);
        assert!(resolve_binary_path(ToolName::Pdfdetach, &options).is_ok());
    }
}
