//! Booklet jobs - loading, imposing and saving
//!
//! This module orchestrates one run:
//! 1. Load the source document
//! 2. Plan the sheets
//! 3. Render all sheets, or each side into its own part
//! 4. Save each output document
//!
//! Every fault is mapped onto a [`BookletError`] at the step it happened in.
//! In split mode `_part1` is saved before `_part2` is rendered, so a failed
//! first save leaves no second file behind.

mod io;

pub use io::{load_pdf, save_pdf, split_output_paths};

use crate::options::{BookletOptions, OutputMode};
use crate::plan::{SheetPlan, SheetSide, plan};
use crate::render::{PdfOutput, PdfSource, SourceDocument, render_plan, render_side};
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which planned sheets go into an output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSelection {
    /// Every sheet, in stacking order
    All,
    /// Only the sheets of one side, in stacking order
    Only(SheetSide),
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletReport {
    pub statistics: BookletStatistics,
    /// Files written, in the order they were saved
    pub written: Vec<PathBuf>,
}

/// Render the selected sheets of `plan` into a new output document.
pub fn impose_sync(
    source: &PdfSource,
    plan: &SheetPlan,
    selection: SheetSelection,
    options: &BookletOptions,
) -> Result<Document> {
    let output = PdfOutput::from_options(options);
    let output = match selection {
        SheetSelection::All => render_plan(plan, source, output)?,
        SheetSelection::Only(side) => render_side(plan, side, source, output)?,
    };
    Ok(output.finish())
}

/// Async wrapper around [`impose_sync`] that renders on the blocking pool
pub async fn impose(
    source: Arc<PdfSource>,
    plan: Arc<SheetPlan>,
    selection: SheetSelection,
    options: &BookletOptions,
) -> Result<Document> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || impose_sync(&source, &plan, selection, &options)).await?
}

/// Load `input`, impose it and write the result to `output`.
///
/// In [`OutputMode::Split`] the files are the `_part1` / `_part2` siblings
/// of `output` (see [`split_output_paths`]).
pub async fn run_booklet(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &BookletOptions,
) -> std::result::Result<BookletReport, BookletError> {
    let input = input.as_ref();
    let output = output.as_ref();

    options
        .validate()
        .map_err(|e| BookletError::InvalidOptions(e.to_string()))?;

    let doc = load_pdf(input).await.map_err(BookletError::input(input))?;
    let source = Arc::new(PdfSource::new(doc, options.scaling_mode));
    log::info!(
        "Loaded {} ({} pages)",
        input.display(),
        source.page_count()
    );

    let sheet_plan = Arc::new(plan(source.page_count()));
    let statistics = calculate_statistics(&sheet_plan);

    let targets: Vec<(SheetSelection, PathBuf)> = match options.output_mode {
        OutputMode::Combined => vec![(SheetSelection::All, output.to_path_buf())],
        OutputMode::Split => {
            let (first, second) = split_output_paths(output);
            SheetSide::SPLIT_ORDER
                .into_iter()
                .map(SheetSelection::Only)
                .zip([first, second])
                .collect()
        }
    };

    let mut written = Vec::with_capacity(targets.len());
    for (selection, path) in targets {
        let imposed = impose(source.clone(), sheet_plan.clone(), selection, options)
            .await
            .map_err(BookletError::input(input))?;
        log::info!(
            "Rendered {} sheets for {}",
            imposed.get_pages().len(),
            path.display()
        );

        save_pdf(imposed, &path)
            .await
            .map_err(BookletError::output(&path))?;
        log::info!("Saved {}", path.display());
        written.push(path);
    }

    Ok(BookletReport {
        statistics,
        written,
    })
}
