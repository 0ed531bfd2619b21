//! Shipping label ("selo") generation.
//!
//! A [`SealData`] describes one shipment campaign: a sender, handling
//! instructions and the companies receiving a package. Two renderers turn it into
//! labels:
//!
//! * [`MarkupRenderer`] builds a print-ready HTML document with two labels per
//!   landscape A4 page.
//! * [`VectorRenderer`] draws one label per portrait A4 page into a PDF
//!   [`SealDocument`].
//!
//! The [`generate`], [`open_print_view`] and [`download`] functions are the entry
//! points hosts normally call.

pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod label;
pub mod markup;
pub mod text;
pub mod vector;

pub use config::{Palette, SeloConfig, VectorLayout};
pub use dispatch::{
    download, download_filename, generate, open_print_view, DirectorySink, FilePrintOpener, FileSink, PrintOpener,
    PrintSurface,
};
pub use document::{PageStats, RenderedPage, SealDocument};
pub use error::SeloError;
pub use label::LabelContent;
pub use markup::MarkupRenderer;
pub use vector::VectorRenderer;

pub use selo_types::{CompanyLabelInfo, Instruction, InstructionSet, SealData};
