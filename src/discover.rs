//! Recursive discovery of translation files under a tra root.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::Error;

/// Collects every regular file under `root` whose name ends with `ext`,
/// compared case-insensitively, in sorted order. Symbolic links are
/// followed; hidden entries are not skipped.
pub fn find_files(root: &Path, ext: &str) -> Result<Vec<PathBuf>, Error> {
    let ext = ext.to_lowercase();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ftype| ftype.is_file()) {
            continue;
        }
        if entry.file_name().to_string_lossy().to_lowercase().ends_with(&ext) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
