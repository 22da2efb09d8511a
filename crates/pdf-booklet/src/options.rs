use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Crop margins, in the same units pdfcrop reports bounding boxes in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    /// Fore edge, also used below the content
    pub outer: i64,
    /// Gutter between facing pages, split evenly between them
    pub inner: i64,
    /// Above the content
    pub top: i64,
    /// Accepted for compatibility; the bottom edge uses `outer`
    pub bottom: i64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            outer: 40,
            inner: 150,
            top: 30,
            bottom: 30,
        }
    }
}

/// Booklet configuration, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// LaTeX paper keyword (`a4paper`, `letterpaper`, ...); pdfjam's default when absent
    pub paper: Option<String>,
    /// Rotate alternate pages for short-edge duplex printing
    pub short_edge: bool,
    /// Crop pages to their content before imposing
    pub crop: bool,
    pub margins: Margins,
    /// Pages per signature; 0 selects pdfjam's booklet mode
    pub signature: u32,
    /// Resolution handed to ghostscript through pdfcrop
    pub resolution: u32,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            paper: None,
            short_edge: false,
            crop: true,
            margins: Margins::default(),
            signature: 0,
            resolution: 72,
        }
    }
}

impl BookletOptions {
    /// Defaults used when sweeping a directory
    pub fn batch_defaults() -> Self {
        Self {
            paper: Some("a4paper".to_string()),
            short_edge: true,
            crop: false,
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.signature % 4 != 0 {
            return Err(BookletError::Config(format!(
                "Signature size must be a multiple of 4, got {}",
                self.signature
            )));
        }

        if self.resolution == 0 {
            return Err(BookletError::Config(
                "Resolution must be greater than 0".to_string(),
            ));
        }

        if self.paper.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(BookletError::Config(
                "Paper keyword must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
