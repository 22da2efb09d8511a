use super::io::remove_if_exists;
use crate::constants::{BOOK_SUFFIX, TEMP_PREFIX};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Paths involved in turning one input into a booklet
#[derive(Debug, Clone, PartialEq)]
pub struct FileTask {
    pub input: PathBuf,
    /// Cropped intermediate, unique per task
    pub temp: PathBuf,
    /// Final booklet, next to the input
    pub output: PathBuf,
}

impl FileTask {
    pub fn new(input: impl Into<PathBuf>, workdir: &Path) -> Self {
        let input = input.into();
        let temp = workdir.join(format!("{}-{}.pdf", TEMP_PREFIX, Uuid::new_v4().simple()));
        let output = booklet_path(&input);
        Self {
            input,
            temp,
            output,
        }
    }

    /// Remove the intermediate and whatever pdfjam left next to it
    pub(crate) async fn cleanup(&self, imposed: &Path) {
        for path in [self.temp.as_path(), imposed] {
            if let Err(e) = remove_if_exists(path).await {
                log::warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }
}

/// `<stem>-book.pdf` in the input's directory, whatever the input's extension
pub fn booklet_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}-{}.pdf", stem, BOOK_SUFFIX))
}
