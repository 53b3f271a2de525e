use std::path::PathBuf;
use thiserror::Error;

/// Low-level faults raised by the PDF collaborators
#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Page {page} is out of range (document has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Run-level failure of a booklet job.
///
/// Every fault from the collaborators is mapped onto one of these at the
/// load, render or save boundary.
#[derive(Error, Debug)]
pub enum BookletError {
    #[error("There was a problem during open input file {}: {source}", .path.display())]
    InputLoad {
        path: PathBuf,
        #[source]
        source: ImposeError,
    },
    #[error("There was a problem during saving output to the file {}: {source}", .path.display())]
    OutputSave {
        path: PathBuf,
        #[source]
        source: ImposeError,
    },
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl BookletError {
    pub(crate) fn input(path: impl Into<PathBuf>) -> impl FnOnce(ImposeError) -> Self {
        let path = path.into();
        move |source| BookletError::InputLoad { path, source }
    }

    pub(crate) fn output(path: impl Into<PathBuf>) -> impl FnOnce(ImposeError) -> Self {
        let path = path.into();
        move |source| BookletError::OutputSave { path, source }
    }

    /// The file the failed step was working on, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            BookletError::InputLoad { path, .. } | BookletError::OutputSave { path, .. } => {
                Some(path.as_path())
            }
            BookletError::InvalidOptions(_) => None,
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    Portrait,
    /// Landscape: width > height (the orientation of every booklet sheet)
    #[default]
    Landscape,
}

/// Standard paper sizes for the output sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// How a source page is scaled into its half of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingMode {
    /// Stretch to fill the half exactly (ignore aspect ratio)
    #[default]
    Stretch,
    /// Fit page to available space (preserve aspect ratio)
    Fit,
    /// Fill available space (may crop)
    Fill,
    /// Center without scaling
    None,
}

/// Statistics about a booklet run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Page count after padding
    pub padded_pages: usize,
    /// Total number of output sheets
    pub sheets: usize,
    /// Sheets that land in the averse (front) part
    pub averse_sheets: usize,
    /// Sheets that land in the reverse (back) part
    pub reverse_sheets: usize,
    /// Sheet halves left without a page
    pub blank_halves: usize,
}
