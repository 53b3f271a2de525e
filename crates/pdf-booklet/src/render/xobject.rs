//! XObject creation for booklet sheets
//!
//! Each source page is turned into a Form XObject in the output
//! document, which is then placed into a sheet half with a transform.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::layout::{PageRotation, Rect};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// Resources referenced by the page are deep-copied into `output`.
/// `cache` maps source object IDs to already-copied output IDs so shared
/// resources (fonts, images) are copied once per output document.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Cache to avoid copying the same object multiple times
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = inherited_attribute(source, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .cloned()
        .unwrap_or_else(default_media_box);

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// Default MediaBox for pages that declare none
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.1),
    ]
}

/// Look up a page attribute, following `/Parent` for inheritable keys.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    // Page trees are shallow; the bound guards against Parent cycles
    for _ in 0..32 {
        if let Ok(value) = current.get(key) {
            return match value {
                Object::Reference(id) => doc.get_object(*id).ok(),
                other => Some(other),
            };
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&get_single_content_stream(doc, *id)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID first so reference cycles resolve to it
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                // Parent links would drag the whole source page tree along
                if key.as_slice() == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Box
// =============================================================================

/// Get the source page's MediaBox as a rectangle in points.
///
/// Falls back to A4 portrait when the page (and its ancestors) declare none.
pub fn get_page_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    doc.get_dictionary(page_id)?;

    let numbers = inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .map(|arr| arr.iter().filter_map(extract_number).collect::<Vec<_>>());

    match numbers.as_deref() {
        Some([x0, y0, x1, y1]) => Ok(Rect::new(
            x0.min(*x1),
            y0.min(*y1),
            (x1 - x0).abs(),
            (y1 - y0).abs(),
        )),
        _ => {
            log::warn!(
                "Page {:?} has no usable MediaBox, assuming {}x{}pt",
                page_id,
                DEFAULT_PAGE_DIMENSIONS.0,
                DEFAULT_PAGE_DIMENSIONS.1
            );
            Ok(Rect::new(
                0.0,
                0.0,
                DEFAULT_PAGE_DIMENSIONS.0,
                DEFAULT_PAGE_DIMENSIONS.1,
            ))
        }
    }
}

/// Get the source page's display rotation, following `/Parent` like the MediaBox.
///
/// Angles that are not a multiple of 90 degrees are treated as upright.
pub fn get_page_rotation(doc: &Document, page_id: ObjectId) -> PageRotation {
    let degrees = match inherited_attribute(doc, page_id, b"Rotate").and_then(extract_number) {
        Some(degrees) => degrees.round() as i64,
        None => return PageRotation::Upright,
    };

    PageRotation::from_degrees(degrees).unwrap_or_else(|| {
        log::warn!(
            "Page {:?} has /Rotate {}, which is not a quarter turn; drawing it upright",
            page_id,
            degrees
        );
        PageRotation::Upright
    })
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
