use crate::error::SeloError;
use lopdf::content::Content;
use lopdf::dictionary;
use selo_render_lopdf::{StreamingPdfWriter, BOLD_FONT_RESOURCE, REGULAR_FONT_RESOURCE};
use selo_types::Size;
use std::io::{Cursor, Seek, Write};

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = concat!("selo ", env!("CARGO_PKG_VERSION"));

/// What was drawn on a label page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    pub instruction_icons: usize,
    pub has_instruction_box: bool,
    /// Some text did not fit above the footer and was cut short.
    pub truncated: bool,
}

/// The recorded drawing operations of one page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub content: Content,
    pub stats: PageStats,
}

/// A rendered label document, held in memory until it is serialized.
#[derive(Debug, Clone)]
pub struct SealDocument {
    title: String,
    page_size: Size,
    pages: Vec<RenderedPage>,
}

impl SealDocument {
    pub fn new(title: String, page_size: Size, pages: Vec<RenderedPage>) -> Self {
        Self { title, page_size, pages }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[RenderedPage] {
        &self.pages
    }

    /// Writes the document as a PDF file and hands the writer back.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W, SeloError> {
        let fonts = dictionary! {
            REGULAR_FONT_RESOURCE => dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => "Helvetica", "Encoding" => "WinAnsiEncoding",
            },
            BOLD_FONT_RESOURCE => dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => "Helvetica-Bold", "Encoding" => "WinAnsiEncoding",
            },
        };

        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, fonts)?;
        for page in &self.pages {
            pdf.add_page(&page.content, self.page_size.width, self.page_size.height)?;
        }
        pdf.set_info(&[("Title", self.title.as_str()), ("Producer", PRODUCER)]);
        log::debug!("Serializing '{}' with {} pages", self.title, pdf.page_count());
        Ok(pdf.finish()?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SeloError> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }
}
