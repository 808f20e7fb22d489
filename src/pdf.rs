//! PDF attachment embedding.
//!
//! Attaches the generated CII XML to an existing PDF as a named embedded
//! file (`ZUGFeRD-invoice.xml`) so that the visual document and the
//! machine-readable invoice travel together. The container format is
//! treated as a black box: the input bytes must already be a loadable PDF.

use chrono::Utc;
use lopdf::{Document, Object, Stream, dictionary};

use crate::core::ZugferdError;

/// Filename of the embedded invoice attachment.
pub const ATTACHMENT_FILENAME: &str = "ZUGFeRD-invoice.xml";

/// MIME type recorded for the attachment.
pub const ATTACHMENT_MIME_TYPE: &str = "application/xml";

/// Human-readable description recorded on the file specification.
pub const ATTACHMENT_DESCRIPTION: &str = "ZUGFeRD XML Invoice for electronic processing";

/// Embed a ZUGFeRD CII XML document into a PDF.
///
/// Takes existing PDF bytes and the XML string to embed; returns the
/// modified PDF bytes with the XML attached as [`ATTACHMENT_FILENAME`].
pub fn embed_in_pdf(pdf_bytes: &[u8], xml: &str) -> Result<Vec<u8>, ZugferdError> {
    let mut doc = Document::load_mem(pdf_bytes)
        .map_err(|e| ZugferdError::Pdf(format!("failed to load PDF: {e}")))?;

    embed_xml_into_document(&mut doc, xml.as_bytes())?;

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| ZugferdError::Pdf(format!("failed to save PDF: {e}")))?;

    Ok(output)
}

fn embed_xml_into_document(doc: &mut Document, xml_bytes: &[u8]) -> Result<(), ZugferdError> {
    // PDF date string, e.g. D:20240115120000Z
    let now = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();

    // 1. Create the EmbeddedFile stream
    // The MIME type becomes the stream Subtype, with "/" name-escaped.
    let subtype = ATTACHMENT_MIME_TYPE.replace('/', "#2F").into_bytes();
    let ef_stream = Stream::new(
        dictionary! {
            "Type" => "EmbeddedFile",
            "Subtype" => Object::Name(subtype),
            "Params" => dictionary! {
                "Size" => Object::Integer(xml_bytes.len() as i64),
                "CreationDate" => Object::string_literal(now.as_str()),
                "ModDate" => Object::string_literal(now.as_str()),
            },
        },
        xml_bytes.to_vec(),
    );
    let ef_stream_id = doc.add_object(ef_stream);

    // 2. Create the FileSpec dictionary
    let filespec = dictionary! {
        "Type" => "Filespec",
        "F" => Object::string_literal(ATTACHMENT_FILENAME),
        "UF" => Object::string_literal(ATTACHMENT_FILENAME),
        "Desc" => Object::string_literal(ATTACHMENT_DESCRIPTION),
        "AFRelationship" => Object::Name(b"Alternative".to_vec()),
        "EF" => dictionary! {
            "F" => Object::Reference(ef_stream_id),
            "UF" => Object::Reference(ef_stream_id),
        },
    };
    let filespec_id = doc.add_object(filespec);

    // 3. Create the EmbeddedFiles name tree
    let ef_name_tree = dictionary! {
        "Names" => Object::Array(vec![
            Object::string_literal(ATTACHMENT_FILENAME),
            Object::Reference(filespec_id),
        ]),
    };
    let ef_name_tree_id = doc.add_object(ef_name_tree);

    // 4. Create the Names dictionary
    let names_dict = dictionary! {
        "EmbeddedFiles" => Object::Reference(ef_name_tree_id),
    };
    let names_id = doc.add_object(names_dict);

    // 5. Update the Catalog
    let catalog = doc
        .catalog_mut()
        .map_err(|e| ZugferdError::Pdf(format!("failed to get catalog: {e}")))?;

    catalog.set("AF", Object::Array(vec![Object::Reference(filespec_id)]));
    catalog.set("Names", Object::Reference(names_id));

    Ok(())
}
