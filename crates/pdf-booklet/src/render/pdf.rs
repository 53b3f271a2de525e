//! lopdf-backed source and output documents

use super::xobject::{create_page_xobject, get_page_box, get_page_rotation};
use super::{OutputDocument, SourceDocument};
use crate::constants::{OUTPUT_PDF_VERSION, mm_to_pt};
use crate::layout::{PagePlacement, Rect, Sheet, place_page};
use crate::options::{BookletOptions, PageLayout};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// A loaded PDF whose pages are drawn as Form XObjects
#[derive(Debug, Clone)]
pub struct PdfSource {
    doc: Document,
    page_ids: Vec<ObjectId>,
    scaling_mode: ScalingMode,
}

impl PdfSource {
    pub fn new(doc: Document, scaling_mode: ScalingMode) -> Self {
        let page_ids = doc.get_pages().values().copied().collect();
        Self {
            doc,
            page_ids,
            scaling_mode,
        }
    }

    fn page_id(&self, page_number: usize) -> Result<ObjectId> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.page_ids.get(idx))
            .copied()
            .ok_or(ImposeError::PageOutOfRange {
                page: page_number,
                count: self.page_ids.len(),
            })
    }
}

impl SourceDocument<PdfOutput> for PdfSource {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn draw_page(
        &self,
        page_number: usize,
        region: Rect,
        sheet: &Sheet,
        output: &mut PdfOutput,
    ) -> Result<()> {
        let page_id = self.page_id(page_number)?;
        let source_box = get_page_box(&self.doc, page_id)?;
        let rotation = get_page_rotation(&self.doc, page_id);
        let placement = place_page(&source_box, rotation, &region, self.scaling_mode);
        let xobject_id = output.import_page(&self.doc, page_id)?;
        output.place_form(sheet, xobject_id, &placement)
    }
}

/// Content collected for one sheet until the document is finished
#[derive(Debug, Default)]
struct SheetContent {
    width: f32,
    height: f32,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

/// Output PDF under construction.
///
/// Sheets are appended with [`OutputDocument::new_sheet`]; [`PdfOutput::finish`]
/// builds the page tree and catalog and hands back the document.
#[derive(Debug)]
pub struct PdfOutput {
    doc: Document,
    paper_size: PaperSize,
    page_layout: PageLayout,
    sheets: Vec<SheetContent>,
    xobject_cache: HashMap<ObjectId, ObjectId>,
}

impl PdfOutput {
    pub fn new(paper_size: PaperSize, page_layout: PageLayout) -> Self {
        Self {
            doc: Document::with_version(OUTPUT_PDF_VERSION),
            paper_size,
            page_layout,
            sheets: Vec::new(),
            xobject_cache: HashMap::new(),
        }
    }

    pub fn from_options(options: &BookletOptions) -> Self {
        Self::new(options.paper_size, options.page_layout)
    }

    /// Copy a source page into this document as a Form XObject
    pub(crate) fn import_page(&mut self, source: &Document, page_id: ObjectId) -> Result<ObjectId> {
        create_page_xobject(&mut self.doc, source, page_id, &mut self.xobject_cache)
    }

    /// Paint a Form XObject onto `sheet`, clipped to the placement region
    pub(crate) fn place_form(
        &mut self,
        sheet: &Sheet,
        xobject_id: ObjectId,
        placement: &PagePlacement,
    ) -> Result<()> {
        let content = self.sheets.get_mut(sheet.index).ok_or_else(|| {
            ImposeError::Config(format!("Sheet {} does not belong to this document", sheet.index))
        })?;

        let xobject_name = format!("P{}", content.xobjects.len());
        content
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        let clip = &placement.clip;
        let [a, b, c, d, e, f] = placement.matrix;
        content.content_ops.push(format!(
            "q {} {} {} {} re W n {} {} {} {} {} {} cm /{} Do Q\n",
            clip.x, clip.y, clip.width, clip.height, a, b, c, d, e, f, xobject_name
        ));
        Ok(())
    }

    /// Build the page tree and catalog and return the finished document
    pub fn finish(self) -> Document {
        let PdfOutput {
            mut doc,
            page_layout,
            sheets,
            ..
        } = self;

        let pages_tree_id = doc.new_object_id();
        let mut page_refs = Vec::with_capacity(sheets.len());

        for sheet in sheets {
            let content_id = doc.add_object(Stream::new(
                Dictionary::new(),
                sheet.content_ops.join("").into_bytes(),
            ));

            let mut resources = Dictionary::new();
            if !sheet.xobjects.is_empty() {
                resources.set("XObject", Object::Dictionary(sheet.xobjects));
            }

            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_tree_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(sheet.width),
                        Object::Real(sheet.height),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
                ("Resources", Object::Dictionary(resources)),
            ]));
            page_refs.push(Object::Reference(page_id));
        }

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        doc.objects
            .insert(pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
            ("PageLayout", Object::Name(page_layout.pdf_name().to_vec())),
        ]));

        doc.trailer.set("Root", catalog_id);

        doc
    }
}

impl OutputDocument for PdfOutput {
    fn new_sheet(&mut self, orientation: Orientation) -> Sheet {
        let (width_mm, height_mm) = self.paper_size.dimensions_with_orientation(orientation);
        let content = SheetContent {
            width: mm_to_pt(width_mm),
            height: mm_to_pt(height_mm),
            ..Default::default()
        };
        let sheet = Sheet::new(self.sheets.len(), content.width, content.height);
        self.sheets.push(content);
        sheet
    }

    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageRotation;

    #[test]
    fn test_new_sheet_is_landscape_a4() {
        let mut output = PdfOutput::new(PaperSize::A4, PageLayout::SinglePage);
        let sheet = output.new_sheet(Orientation::Landscape);

        assert_eq!(sheet.index, 0);
        assert!(sheet.width > sheet.height);
        assert!((sheet.left_half().width - sheet.width / 2.0).abs() < f32::EPSILON);
        assert_eq!(output.sheet_count(), 1);
    }

    #[test]
    fn test_finish_writes_page_layout() {
        let mut output = PdfOutput::new(PaperSize::A5, PageLayout::SinglePage);
        output.new_sheet(Orientation::Landscape);
        output.new_sheet(Orientation::Landscape);

        let doc = output.finish();
        assert_eq!(doc.get_pages().len(), 2);

        let catalog = doc.catalog().unwrap();
        assert_eq!(
            catalog.get(b"PageLayout").unwrap().as_name().unwrap(),
            b"SinglePage"
        );
    }

    #[test]
    fn test_place_form_rejects_foreign_sheet() {
        let mut output = PdfOutput::new(PaperSize::A4, PageLayout::SinglePage);
        let foreign = Sheet::new(3, 842.0, 595.0);
        let placement = place_page(
            &Rect::new(0.0, 0.0, 595.0, 842.0),
            PageRotation::Upright,
            &foreign.left_half(),
            ScalingMode::Stretch,
        );
        let result = output.place_form(&foreign, (1, 0), &placement);
        assert!(result.is_err());
    }
}
