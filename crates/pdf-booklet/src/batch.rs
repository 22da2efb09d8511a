//! Directory sweeps

use crate::constants::{BOOK_MARKER, TEMP_PREFIX};
use crate::pipeline::Booklet;
use crate::tool::CommandRunner;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Every regular file below `root`, sorted.
///
/// Symlinked directories are not followed.
pub async fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        log::debug!("Scanning {}", dir.display());
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Files below `root` that still need a booklet: names without `marker`,
/// excluding leftover pipeline intermediates.
pub async fn collect_candidates(root: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    let files = walk_files(root).await?;
    Ok(files
        .into_iter()
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy())
                .is_some_and(|name| !name.contains(marker) && !name.starts_with(TEMP_PREFIX))
        })
        .collect())
}

/// Make a booklet of every unprocessed file below `root`.
///
/// Unlike [`Booklet::run`], a failing file never stops the sweep; only a
/// failed preflight does.
pub async fn run_batch<R: CommandRunner>(booklet: &Booklet<R>, root: &Path) -> Result<RunSummary> {
    booklet.preflight().await?;

    let candidates = collect_candidates(root, BOOK_MARKER).await?;
    log::info!(
        "Found {} file(s) to process in {}",
        candidates.len(),
        root.display()
    );

    let mut summary = RunSummary::default();
    for path in &candidates {
        match booklet.process_file(path).await {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
