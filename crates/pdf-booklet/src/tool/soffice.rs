use super::{ExternalTool, Invocation, ToolOutput};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Converts an office document to PDF with headless LibreOffice
#[derive(Debug, Clone, Copy)]
pub struct DocumentConversion<'a> {
    /// Path to the `soffice` binary
    pub program: &'a Path,
    pub input: &'a Path,
    pub outdir: &'a Path,
}

impl DocumentConversion<'_> {
    /// `<outdir>/<stem>.pdf`, the name LibreOffice gives its output
    pub fn output_path(&self) -> PathBuf {
        let stem = self.input.file_stem().unwrap_or_default();
        let mut path = self.outdir.join(stem);
        path.set_extension("pdf");
        path
    }
}

impl ExternalTool for DocumentConversion<'_> {
    /// Path of the written PDF
    type Output = PathBuf;

    const NAME: &'static str = "soffice";

    fn invocation(&self) -> Invocation {
        Invocation::new(self.program)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(self.outdir)
            .arg(self.input)
    }

    fn interpret(&self, output: ToolOutput) -> Result<PathBuf> {
        if !output.success() {
            let stderr = output.stderr_text();
            let message = if stderr.is_empty() {
                output.exit_description()
            } else {
                format!("{}: {}", output.exit_description(), stderr)
            };
            return Err(BookletError::Conversion {
                input: self.input.to_path_buf(),
                message,
            });
        }
        Ok(self.output_path())
    }
}
