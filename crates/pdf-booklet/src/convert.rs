//! Word to PDF conversion with headless LibreOffice
//!
//! Converted originals are renamed to `<stem>_CONVERTED.<ext>` so a later
//! sweep leaves them alone.

use crate::batch::walk_files;
use crate::constants::{CONVERTED_MARKER, DEFAULT_SOFFICE, WORD_EXTENSIONS};
use crate::pipeline::io::is_regular_file;
use crate::tool::{CommandRunner, DocumentConversion, ProcessRunner, execute};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Whether `path` is a Word document that has not been converted yet
pub fn is_convertible(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    let is_word = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| WORD_EXTENSIONS.contains(&ext.as_str()));
    is_word && !name.contains(CONVERTED_MARKER)
}

/// `<stem>_CONVERTED.<ext>` next to `path`
pub fn converted_name(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, CONVERTED_MARKER, ext.to_string_lossy()),
        None => format!("{}_{}", stem, CONVERTED_MARKER),
    };
    path.with_file_name(name)
}

/// Converts office documents through a `soffice` binary
#[derive(Debug)]
pub struct Converter<R = ProcessRunner> {
    program: PathBuf,
    runner: R,
}

impl Converter<ProcessRunner> {
    /// Use the platform's default LibreOffice location
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_SOFFICE, ProcessRunner)
    }
}

impl Default for Converter<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Converter<R> {
    pub fn with_runner(program: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Convert `input` to a PDF in the same directory and return its path
    pub async fn convert_file(&self, input: &Path) -> Result<PathBuf> {
        if !is_regular_file(input).await {
            return Err(BookletError::MissingFile(input.to_path_buf()));
        }

        let outdir = match input.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let conversion = DocumentConversion {
            program: &self.program,
            input,
            outdir,
        };
        let output = execute(&conversion, &self.runner).await?;
        log::info!("Converted: {} -> {}", input.display(), output.display());
        Ok(output)
    }

    /// Rename a converted original so later sweeps skip it
    pub async fn mark_converted(&self, input: &Path) -> Result<PathBuf> {
        let renamed = converted_name(input);
        tokio::fs::rename(input, &renamed).await?;
        log::info!("Renamed: {} -> {}", input.display(), renamed.display());
        Ok(renamed)
    }

    /// Convert every unconverted Word document below `root`.
    ///
    /// Failures are logged and the sweep continues. A file whose original
    /// could not be renamed still counts as converted.
    pub async fn convert_directory(&self, root: &Path) -> Result<ConversionSummary> {
        let mut summary = ConversionSummary::default();

        for path in walk_files(root).await? {
            if !is_convertible(&path) {
                continue;
            }
            summary.total += 1;

            match self.convert_file(&path).await {
                Ok(_) => {
                    if let Err(e) = self.mark_converted(&path).await {
                        log::error!("Error renaming {}: {}", path.display(), e);
                    }
                    summary.converted += 1;
                }
                Err(e) => log::error!("{}", e),
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_convertible() {
        assert!(is_convertible(Path::new("a/report.docx")));
        assert!(is_convertible(Path::new("LETTER.DOC")));
        assert!(!is_convertible(Path::new("report_CONVERTED.docx")));
        assert!(!is_convertible(Path::new("report.pdf")));
        assert!(!is_convertible(Path::new("docx")));
    }

    #[test]
    fn test_converted_name() {
        assert_eq!(
            converted_name(Path::new("dir/report.docx")),
            PathBuf::from("dir/report_CONVERTED.docx")
        );
        assert_eq!(
            converted_name(Path::new("plain")),
            PathBuf::from("plain_CONVERTED")
        );
    }
}
