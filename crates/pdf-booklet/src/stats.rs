use crate::constants::PAGES_PER_SHEET;
use crate::plan::{SheetPlan, plan};
use crate::types::*;

/// Calculate statistics for a planned booklet
pub fn calculate_statistics(plan: &SheetPlan) -> BookletStatistics {
    let sheets = plan.len();
    let averse_sheets = plan.averse().count();

    let filled_halves: usize = plan.iter().map(|sheet| sheet.placements().count()).sum();

    BookletStatistics {
        source_pages: plan.source_pages(),
        padded_pages: plan.padded_pages(),
        sheets,
        averse_sheets,
        reverse_sheets: sheets - averse_sheets,
        blank_halves: sheets * PAGES_PER_SHEET - filled_halves,
    }
}

/// Statistics for a document of `source_pages` pages, without rendering
pub fn statistics_for_pages(source_pages: usize) -> BookletStatistics {
    calculate_statistics(&plan(source_pages))
}
