//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers used throughout
//! planning and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default source page width in points (A4: 210mm × 297mm)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 595.0;

/// Default source page height in points (A4)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 842.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Imposition
// =============================================================================

/// Source pages carried by one folded sheet (two per side)
pub const PAGES_PER_FOLD: usize = 4;

/// Pages placed on one side of an output sheet
pub const PAGES_PER_SHEET: usize = 2;

// =============================================================================
// Split Output
// =============================================================================

/// File name suffix of the first printed part
pub const FIRST_PART_SUFFIX: &str = "_part1";

/// File name suffix of the second printed part
pub const SECOND_PART_SUFFIX: &str = "_part2";

/// Extension of every written document
pub const PDF_EXTENSION: &str = "pdf";

/// PDF version of the generated documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";
