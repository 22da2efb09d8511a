use super::{ExternalTool, Invocation, ToolOutput};
use crate::constants::{BBOX_MARKER, PDFCROP};
use crate::types::*;
use std::path::Path;

/// Runs pdfcrop verbosely to learn the content bounding box of every page.
///
/// pdfcrop still writes a cropped file to `scratch`; it is overwritten later.
#[derive(Debug, Clone, Copy)]
pub struct BoundsProbe<'a> {
    pub input: &'a Path,
    pub scratch: &'a Path,
    pub resolution: u32,
}

impl ExternalTool for BoundsProbe<'_> {
    type Output = Vec<BoundingBox>;

    const NAME: &'static str = "pdfcrop (bounds)";

    fn invocation(&self) -> Invocation {
        Invocation::new(PDFCROP)
            .arg("--verbose")
            .arg("--resolution")
            .arg(self.resolution.to_string())
            .arg(self.input)
            .arg(self.scratch)
    }

    fn interpret(&self, output: ToolOutput) -> Result<Self::Output> {
        if !output.stderr.is_empty() {
            return Err(BookletError::Tool {
                tool: Self::NAME,
                stderr: output.stderr_text(),
            });
        }
        parse_bounding_boxes(&output.stdout_text())
    }
}

/// Crops odd and even pages to their own rectangles
#[derive(Debug, Clone, Copy)]
pub struct CropExecution<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub geometry: &'a CropGeometry,
    pub resolution: u32,
}

impl ExternalTool for CropExecution<'_> {
    type Output = ();

    const NAME: &'static str = "pdfcrop";

    fn invocation(&self) -> Invocation {
        Invocation::new(PDFCROP)
            .arg("--bbox-odd")
            .arg(self.geometry.odd.to_string())
            .arg("--bbox-even")
            .arg(self.geometry.even.to_string())
            .arg("--resolution")
            .arg(self.resolution.to_string())
            .arg(self.input)
            .arg(self.output)
    }

    fn interpret(&self, output: ToolOutput) -> Result<()> {
        if !output.stderr.is_empty() {
            return Err(BookletError::Tool {
                tool: Self::NAME,
                stderr: output.stderr_text(),
            });
        }
        Ok(())
    }
}

/// Extract the `%%HiResBoundingBox:` lines of pdfcrop's verbose output, in page order
pub fn parse_bounding_boxes(stdout: &str) -> Result<Vec<BoundingBox>> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix(BBOX_MARKER))
        .map(|rest| {
            let values = rest
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| BookletError::MalformedBounds(rest.trim().to_string()))?;
            match values[..] {
                [left, top, right, bottom] => Ok(BoundingBox::new(left, top, right, bottom)),
                _ => Err(BookletError::MalformedBounds(rest.trim().to_string())),
            }
        })
        .collect()
}
