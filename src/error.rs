// src/error.rs
use selo_render_core::RenderError;
use thiserror::Error;

/// Errors surfaced by the label generation entry points.
#[derive(Error, Debug)]
pub enum SeloError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Markup template failed to compile: {0}")]
    TemplateCompile(#[from] Box<handlebars::TemplateError>),

    #[error("Markup template failed to render: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl From<handlebars::TemplateError> for SeloError {
    fn from(e: handlebars::TemplateError) -> Self {
        SeloError::TemplateCompile(Box::new(e))
    }
}
