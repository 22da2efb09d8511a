//! Names and fixed arguments shared with the external tools
//!
//! Everything that has to match another program's command line or output
//! format lives here.

// =============================================================================
// pdfcrop
// =============================================================================

/// PDF cropping tool (ships with TeX Live)
pub const PDFCROP: &str = "pdfcrop";

/// Prefix of the per-page bounding box lines in `pdfcrop --verbose` output
pub const BBOX_MARKER: &str = "%%HiResBoundingBox:";

// =============================================================================
// pdfjam
// =============================================================================

/// PDF imposition tool
pub const PDFJAM: &str = "pdfjam";

/// Suffix pdfjam appends to the file stem of its output
pub const BOOK_SUFFIX: &str = "book";

/// Marker contained in the names of files that are already booklets
pub const BOOK_MARKER: &str = "-book";

/// Preamble rotating every other output page for short-edge duplex printing
pub const SHORT_EDGE_PREAMBLE: &str = r"\usepackage{everyshi}\makeatletter\EveryShipout{\ifodd\c@page\pdfpageattr{/Rotate 180}\fi}\makeatother";

// =============================================================================
// kpsewhich
// =============================================================================

/// TeX path resolver used to check for LaTeX packages
pub const KPSEWHICH: &str = "kpsewhich";

/// Package the short-edge preamble depends on
pub const EVERYSHI_PACKAGE: &str = "everyshi.sty";

// =============================================================================
// LibreOffice
// =============================================================================

/// Default location of the headless office binary
#[cfg(target_os = "macos")]
pub const DEFAULT_SOFFICE: &str = "/Applications/LibreOffice.app/Contents/MacOS/soffice";

/// Default location of the headless office binary
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_SOFFICE: &str = "soffice";

/// Marker inserted before the extension of converted originals
pub const CONVERTED_MARKER: &str = "CONVERTED";

/// Extensions picked up by the Word-to-PDF sweep (compared case-insensitively)
pub const WORD_EXTENSIONS: &[&str] = &["doc", "docx"];

// =============================================================================
// Temp files
// =============================================================================

/// Prefix of per-task cropped intermediates
pub const TEMP_PREFIX: &str = ".crop-tmp";
