/// Expand asset arguments into a flat list of regular files.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::ClientError;

/// Resolve user-supplied asset paths into concrete files.
///
/// Regular files pass through unchanged. Directories are expanded depth-first,
/// children in file-name order, so everything found under `inputs[i]` comes
/// before anything from `inputs[i + 1]`. Symlinks and other special entries are
/// skipped. The walk uses an explicit stack, so directory depth is bounded only
/// by memory.
///
/// # Errors
///
/// Returns `ClientError::AssetUnreadable` when an entry cannot be stat-ed and
/// `ClientError::AssetListing` when a directory cannot be listed. No partial
/// result is returned.
pub fn resolve_assets(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ClientError> {
    let mut files = Vec::new();
    // Popped from the back, so entries are pushed in reverse.
    let mut pending: Vec<PathBuf> = inputs.iter().rev().cloned().collect();

    while let Some(path) = pending.pop() {
        let meta = fs::symlink_metadata(&path).map_err(|source| ClientError::AssetUnreadable {
            path: path.clone(),
            source,
        })?;
        let kind = meta.file_type();

        if kind.is_dir() {
            let mut children = list_dir(&path)?;
            children.sort();
            pending.extend(children.into_iter().rev());
        } else if kind.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-regular asset entry");
        }
    }

    debug!(count = files.len(), assets = ?files, "resolved assets");
    Ok(files)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ClientError> {
    let listing_err = |source| ClientError::AssetListing {
        path: dir.to_path_buf(),
        source,
    };
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_err)? {
        children.push(entry.map_err(listing_err)?.path());
    }
    Ok(children)
}
