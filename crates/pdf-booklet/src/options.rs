use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the imposed sheets are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputMode {
    /// One document holding every sheet in stacking order
    #[default]
    Combined,
    /// Sheets split by side into `<stem>_part1.pdf` and `<stem>_part2.pdf`,
    /// in [`SheetSide::SPLIT_ORDER`](crate::plan::SheetSide::SPLIT_ORDER)
    Split,
}

/// Viewer hint stored in the output catalog (`/PageLayout`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageLayout {
    #[default]
    SinglePage,
    OneColumn,
    TwoColumnLeft,
}

impl PageLayout {
    pub fn pdf_name(self) -> &'static [u8] {
        match self {
            PageLayout::SinglePage => b"SinglePage",
            PageLayout::OneColumn => b"OneColumn",
            PageLayout::TwoColumnLeft => b"TwoColumnLeft",
        }
    }
}

/// Booklet configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Output sheet (always landscape)
    pub paper_size: PaperSize,
    pub scaling_mode: ScalingMode,

    // Output documents
    pub output_mode: OutputMode,
    pub page_layout: PageLayout,
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Whether averse and reverse sheets go to separate documents
    pub fn is_split(&self) -> bool {
        self.output_mode == OutputMode::Split
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.paper_size.dimensions_mm();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(ImposeError::Config(format!(
                "Paper size must have positive dimensions, got {}mm x {}mm",
                w, h
            )));
        }
        Ok(())
    }
}
