use crate::cii;
use crate::core::{InvoiceRecord, ZugferdError, validate};

/// Validates an invoice record and holds the generated CII XML.
///
/// Construction runs the full validate-then-serialize pipeline once; the
/// resulting XML is immutable and can be read back as a string or byte
/// buffer, or embedded into a PDF (feature `pdf`).
///
/// ```rust
/// # use zugferd_generator::{ZugferdGenerator, core::*};
/// let generator = ZugferdGenerator::new(&InvoiceRecord::default());
/// assert!(generator.is_err()); // empty record fails validation
/// ```
#[derive(Debug, Clone)]
pub struct ZugferdGenerator {
    xml: String,
}

impl ZugferdGenerator {
    /// Validate the record and serialize it to CII XML.
    ///
    /// Fails with [`ZugferdError::Validation`] listing every missing
    /// mandatory field before any XML is produced.
    pub fn new(record: &InvoiceRecord) -> Result<Self, ZugferdError> {
        validate(record)?;
        let xml = cii::to_cii_xml(record)?;
        Ok(Self { xml })
    }

    /// The generated XML document.
    pub fn as_xml(&self) -> &str {
        &self.xml
    }

    /// The generated XML as an owned string.
    pub fn to_xml_string(&self) -> String {
        self.xml.clone()
    }

    /// The generated XML as UTF-8 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.xml.clone().into_bytes()
    }

    /// Attach the generated XML to an existing PDF.
    ///
    /// Returns the modified PDF bytes, or [`ZugferdError::Pdf`] if the
    /// input is not a loadable PDF.
    #[cfg(feature = "pdf")]
    pub fn embed_in_pdf(&self, pdf_bytes: &[u8]) -> Result<Vec<u8>, ZugferdError> {
        crate::pdf::embed_in_pdf(pdf_bytes, &self.xml)
    }
}
