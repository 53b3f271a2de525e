//! Booklet rendering
//!
//! Drives a [`SheetPlan`] through two collaborators:
//! - an [`OutputDocument`] that hands out new landscape sheets
//! - a [`SourceDocument`] that draws a page into a region of such a sheet
//!
//! The lopdf-backed implementations live in [`pdf`].

mod pdf;
mod xobject;

pub use pdf::{PdfOutput, PdfSource};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_box, get_page_rotation};

use crate::layout::{Rect, Sheet};
use crate::plan::{SheetPlan, SheetRecord, SheetSide};
use crate::types::{Orientation, Result};

/// Append-only destination of imposed sheets
pub trait OutputDocument {
    /// Append a blank sheet and return its geometry
    fn new_sheet(&mut self, orientation: Orientation) -> Sheet;

    /// Number of sheets appended so far
    fn sheet_count(&self) -> usize;
}

/// Read-only source of pages to impose
pub trait SourceDocument<O: OutputDocument + ?Sized> {
    fn page_count(&self) -> usize;

    /// Draw 1-based `page_number` into `region` of `sheet`.
    fn draw_page(
        &self,
        page_number: usize,
        region: Rect,
        sheet: &Sheet,
        output: &mut O,
    ) -> Result<()>;
}

/// Render every planned sheet, in stacking order, into `output`.
pub fn render_plan<S, O>(plan: &SheetPlan, source: &S, output: O) -> Result<O>
where
    S: SourceDocument<O> + ?Sized,
    O: OutputDocument,
{
    render_sheets(plan, source, output)
}

/// Render only the sheets of one side, keeping their relative order.
pub fn render_side<S, O>(plan: &SheetPlan, side: SheetSide, source: &S, output: O) -> Result<O>
where
    S: SourceDocument<O> + ?Sized,
    O: OutputDocument,
{
    render_sheets(plan.side(side), source, output)
}

/// Render a sequence of sheet records into `output` and hand it back.
///
/// Blank records still produce a sheet so that stacking positions line up
/// when the parts are fed through the printer by hand.
pub fn render_sheets<'a, S, O>(
    sheets: impl IntoIterator<Item = &'a SheetRecord>,
    source: &S,
    mut output: O,
) -> Result<O>
where
    S: SourceDocument<O> + ?Sized,
    O: OutputDocument,
{
    for record in sheets {
        render_sheet(record, source, &mut output)?;
    }
    Ok(output)
}

fn render_sheet<S, O>(record: &SheetRecord, source: &S, output: &mut O) -> Result<Sheet>
where
    S: SourceDocument<O> + ?Sized,
    O: OutputDocument,
{
    let sheet = output.new_sheet(Orientation::Landscape);

    for (page_number, half) in record.placements() {
        log::debug!(
            "Sheet {} ({:?}): page {} -> {:?} half",
            record.index,
            record.side,
            page_number,
            half
        );
        source.draw_page(page_number, sheet.half(half), &sheet, output)?;
    }

    Ok(sheet)
}
