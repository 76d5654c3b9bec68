//! Submitted file discovery.
//!
//! Both engines work on bare file names, so discovery returns names only,
//! never paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for listing submitted files.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DiscoveryOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Include dot-files such as `.DS_Store`.
    pub include_hidden: bool,
}

/// Lists file names in a directory.
///
/// Returns names sorted by full path so the order is stable across platforms.
pub fn list_submitted_files(dir: &Path, options: &DiscoveryOptions) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    collect_files(dir, options, &mut files)?;
    files.sort();
    let names = extract_filenames(&files);
    debug!(dir = %dir.display(), count = names.len(), "listed submitted files");
    Ok(names)
}

fn collect_files(dir: &Path, options: &DiscoveryOptions, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !options.include_hidden && is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            if options.recursive {
                collect_files(&path, options, files)?;
            }
            continue;
        }
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// File name component of each path. Paths without one are skipped.
pub fn extract_filenames<P: AsRef<Path>>(paths: &[P]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.as_ref().file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
