//! Path derivations for files inside a tra tree.
//!
//! All functions here are pure; malformed input is a programmer error, not a
//! reported runtime failure.

use std::path::{Path, PathBuf};

/// Returns the directory component of a relative tra file path.
pub fn directory_of(rel_path: &Path) -> &Path {
    rel_path.parent().unwrap_or(Path::new(""))
}

/// First segment of a tra file's directory, which names the language the
/// file is translated into. Empty for files sitting directly at the root.
pub fn language(rel_dir: &Path) -> String {
    rel_dir
        .components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercased basename.
pub fn basename_lower(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Derives the OS-specific sibling of a console tra file path:
/// `tra/setup.tra` + `win32` -> `tra/setup-win32.tra`.
pub fn platform_variant(path: &Path, platform: &str) -> PathBuf {
    let filename = basename_lower(path);
    let (stem, ext) = match filename.rfind('.') {
        Some(idx) if idx > 0 => filename.split_at(idx),
        _ => (filename.as_str(), ""),
    };
    directory_of(path).join(format!("{stem}-{platform}{ext}"))
}
