//! Core rendering abstractions for label generation.
//!
//! This crate provides the fundamental traits and types used by drawing backends:
//! - `DrawingContext`, an immediate-mode canvas with shape and text primitives
//! - Error types for rendering operations
//! - Text wrapping and coordinate utilities shared by backends

mod error;
mod traits;
mod types;
pub mod utils;
pub mod wrap;

pub use error::RenderError;
pub use traits::DrawingContext;
pub use types::{FontWeight, PaintMode, TextAlign};
pub use wrap::{ellipsize, wrap_text, ELLIPSIS};
