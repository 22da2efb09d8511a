use super::{ExternalTool, Invocation, ToolOutput};
use crate::constants::KPSEWHICH;
use crate::types::*;

/// Asks kpsewhich whether a LaTeX package is installed
#[derive(Debug, Clone, Copy)]
pub struct FontProbe {
    pub package: &'static str,
}

impl ExternalTool for FontProbe {
    /// `true` when kpsewhich printed a path for the package
    type Output = bool;

    const NAME: &'static str = "kpsewhich";

    fn invocation(&self) -> Invocation {
        Invocation::new(KPSEWHICH).arg(self.package)
    }

    fn interpret(&self, output: ToolOutput) -> Result<bool> {
        Ok(!output.stdout_text().trim().is_empty())
    }
}
