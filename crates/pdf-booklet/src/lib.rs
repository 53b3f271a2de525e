//! Booklet imposition for manual duplex printing.
//!
//! Two source pages go side by side on each landscape sheet, ordered so that
//! the stacked and folded sheets read in sequence. Sheets can be split into
//! averse (front) and reverse (back) documents for printers without duplex.

mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod plan;
pub mod render;
mod stats;
mod types;

pub use constants::{FIRST_PART_SUFFIX, SECOND_PART_SUFFIX, mm_to_pt, pt_to_mm};
pub use impose::{
    BookletReport, SheetSelection, impose, impose_sync, load_pdf, run_booklet, save_pdf,
    split_output_paths,
};
pub use options::*;
pub use plan::{Half, SheetPlan, SheetRecord, SheetSide, padded_page_count, plan};
pub use stats::{calculate_statistics, statistics_for_pages};
pub use types::*;
