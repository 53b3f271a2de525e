//! Document I/O operations for booklet jobs

use crate::constants::{FIRST_PART_SUFFIX, PDF_EXTENSION, SECOND_PART_SUFFIX};
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save an imposed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Sibling paths for the first and second parts of a split run.
///
/// `out/booklet.pdf` becomes `out/booklet_part1.pdf` and `out/booklet_part2.pdf`.
/// The parts are always written as `.pdf`, whatever extension the output had.
pub fn split_output_paths(output: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    let output = output.as_ref();
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = output.parent().unwrap_or_else(|| Path::new(""));

    let part = |suffix: &str| dir.join(format!("{}{}.{}", stem, suffix, PDF_EXTENSION));
    (part(FIRST_PART_SUFFIX), part(SECOND_PART_SUFFIX))
}
