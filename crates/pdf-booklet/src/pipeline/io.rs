//! Filesystem helpers for the pipeline

use crate::types::*;
use lopdf::Document;
use std::io::ErrorKind;
use std::path::Path;

/// Whether `path` exists and is a regular file (symlinks are followed)
pub async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Move a file, copying when a plain rename is not possible (e.g. across filesystems)
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Err(e) = tokio::fs::rename(from, to).await {
        log::debug!(
            "rename {} -> {} failed ({}), copying instead",
            from.display(),
            to.display(),
            e
        );
        tokio::fs::copy(from, to).await?;
        tokio::fs::remove_file(from).await?;
    }
    Ok(())
}

/// Remove a file, treating "already gone" as success
pub async fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Fail unless `path` is a non-empty file
pub async fn ensure_non_empty(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(BookletError::MissingOutput {
            path: path.to_path_buf(),
        }),
    }
}

/// Count the pages of a PDF
pub async fn count_pages(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc.get_pages().len())
}
