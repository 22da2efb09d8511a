use super::{ExternalTool, Invocation, ToolOutput};
use crate::constants::{BOOK_SUFFIX, PDFJAM, SHORT_EDGE_PREAMBLE};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Imposes a PDF into a landscape booklet with pdfjam.
///
/// pdfjam writes `<stem>-book.pdf` into its working directory, so the
/// invocation runs in `workdir`.
#[derive(Debug, Clone, Copy)]
pub struct Imposition<'a> {
    pub input: &'a Path,
    pub workdir: &'a Path,
    pub paper: Option<&'a str>,
    /// 0 selects booklet mode
    pub signature: u32,
    pub short_edge: bool,
}

impl Imposition<'_> {
    /// Where pdfjam puts its result
    pub fn output_path(&self) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.workdir.join(format!("{}-{}.pdf", stem, BOOK_SUFFIX))
    }
}

impl ExternalTool for Imposition<'_> {
    type Output = ();

    const NAME: &'static str = "pdfjam";

    fn invocation(&self) -> Invocation {
        let mut invocation = Invocation::new(PDFJAM)
            .current_dir(self.workdir)
            .arg("--landscape")
            .arg("--suffix")
            .arg(BOOK_SUFFIX)
            .arg(self.input);

        invocation = if self.signature != 0 {
            invocation
                .arg("--signature")
                .arg(self.signature.to_string())
        } else {
            invocation.arg("--booklet").arg("true")
        };

        if let Some(paper) = self.paper {
            invocation = invocation.arg("--paper").arg(paper);
        }

        if self.short_edge {
            invocation = invocation.arg("--preamble").arg(SHORT_EDGE_PREAMBLE);
        }

        invocation
    }

    /// pdfjam reports progress on stderr, so neither stderr nor the exit
    /// status decide success here; the caller checks the output file instead.
    fn interpret(&self, output: ToolOutput) -> Result<()> {
        if !output.success() {
            log::warn!(
                "pdfjam finished with {}: {}",
                output.exit_description(),
                output.stderr_text()
            );
        } else if !output.stderr.is_empty() {
            log::debug!("pdfjam: {}", output.stderr_text());
        }
        Ok(())
    }
}
