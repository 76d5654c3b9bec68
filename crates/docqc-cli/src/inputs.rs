//! Resolution of the submitted file set from command line inputs.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use docqc_ingest::{DiscoveryOptions, extract_filenames, list_submitted_files};

/// Collects submitted filenames from a directory listing and explicit paths.
///
/// Directory entries come first, followed by the file arguments in the order
/// given. Only the final path component of each entry is kept.
pub fn resolve_submitted(
    dir: Option<&Path>,
    files: &[String],
    options: &DiscoveryOptions,
) -> Result<Vec<String>> {
    if dir.is_none() && files.is_empty() {
        bail!("no submitted files: pass --dir <DIR> or one or more FILE arguments");
    }
    let mut names = match dir {
        Some(dir) => list_submitted_files(dir, options)
            .with_context(|| format!("list submitted files in {}", dir.display()))?,
        None => Vec::new(),
    };
    names.extend(extract_filenames(files));
    debug!(count = names.len(), "submitted files resolved");
    Ok(names)
}
