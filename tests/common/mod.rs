#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use selo::{SealData, SeloConfig, SeloError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn on page `page_num` (1-based), one entry per text operation.
    pub fn page_texts(&self, page_num: u32) -> Vec<String> {
        pdf_assertions::page_texts(&self.doc, page_num)
    }

    pub fn all_text(&self) -> String {
        (1..=self.page_count() as u32)
            .flat_map(|page| self.page_texts(page))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generates the vector document for `seal` with the default configuration.
pub fn generate_pdf(seal: &SealData) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let document = selo::generate(seal, &SeloConfig::default())?;
    GeneratedPdf::from_bytes(document.to_bytes()?)
}

/// Renders the print markup for `seal` with the default configuration.
pub fn render_markup(seal: &SealData) -> Result<String, SeloError> {
    selo::MarkupRenderer::new(&SeloConfig::default())?.render(seal)
}
