//! Geometry for booklet sheets
//!
//! - Sheet halves (left and right rectangles of a landscape sheet)
//! - Placement of a source page box inside a half

mod placement;
mod types;

pub use placement::*;
pub use types::*;
