use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("No bounding boxes reported for {}", .0.display())]
    MissingBounds(PathBuf),
    #[error("Malformed bounding box line: {0:?}")]
    MalformedBounds(String),
    #[error("{tool} reported an error: {stderr}")]
    Tool { tool: &'static str, stderr: String },
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("The {package} latex package is needed for short-edge printing; install it with your TeX distribution")]
    MissingDependency { package: &'static str },
    #[error("Expected output was not produced: {}", .path.display())]
    MissingOutput { path: PathBuf },
    #[error("Failed to convert {}: {message}", .input.display())]
    Conversion { input: PathBuf, message: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

impl BookletError {
    /// Whether the error must stop the whole run rather than just the current file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BookletError::Tool { .. }
                | BookletError::Spawn { .. }
                | BookletError::MissingDependency { .. }
                | BookletError::MissingOutput { .. }
                | BookletError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Content bounding box of one page, in PostScript points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Rectangle handed to pdfcrop for one page parity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Formats as `"L T R B"`, the rectangle syntax pdfcrop expects
impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.left, self.top, self.right, self.bottom)
    }
}

/// Crop rectangles for front (odd) and back (even) pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    pub odd: CropRect,
    pub even: CropRect,
}

/// Result of running the pipeline on one input
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Input was not a regular file; nothing was run
    Skipped { input: PathBuf },
    /// Booklet written to `output`
    Completed { input: PathBuf, output: PathBuf },
}

/// Per-run tally
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Booklets written, in processing order
    pub outputs: Vec<PathBuf>,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.outputs.len()
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Completed { output, .. } => self.outputs.push(output),
        }
    }
}

/// Result of a Word-to-PDF sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    /// Word files found that had not been converted before
    pub total: usize,
    /// Files converted successfully
    pub converted: usize,
}

/// Statistics about an imposed booklet
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Pages in the cropped source
    pub source_pages: usize,
    /// Physical sheets once printed double-sided
    pub output_sheets: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Pages per signature
    pub pages_per_signature: usize,
    /// Output page count (front and back of each sheet)
    pub output_pages: usize,
    /// Blank pages added to fill the last signature
    pub blank_pages_added: usize,
}
