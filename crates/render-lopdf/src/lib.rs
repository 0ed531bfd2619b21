//! PDF drawing backend using lopdf.
//!
//! `LopdfCanvas` records the drawing calls of one page as lopdf content operations;
//! `StreamingPdfWriter` assembles recorded pages into a complete PDF file. Text is set
//! in the standard Helvetica faces, measured with their built-in metrics.

mod canvas;
pub mod metrics;
mod writer;

pub use canvas::{LopdfCanvas, BOLD_FONT_RESOURCE, REGULAR_FONT_RESOURCE};
pub use writer::StreamingPdfWriter;
