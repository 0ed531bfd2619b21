//! Entry points used by the host application.
//!
//! `generate` is pure. `open_print_view` and `download` reach the outside world
//! through the [`PrintOpener`] and [`FileSink`] seams so hosts can plug in a
//! browser window, a webview or the filesystem.

use crate::config::SeloConfig;
use crate::document::SealDocument;
use crate::error::SeloError;
use crate::markup::MarkupRenderer;
use crate::text::collapse_whitespace;
use crate::vector::VectorRenderer;
use selo_types::SealData;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

/// A surface the print markup is written into, such as a freshly opened window.
pub trait PrintSurface {
    fn write(&mut self, markup: &str) -> Result<(), SeloError>;

    /// Ends the write stream, letting the surface finish loading.
    fn close(self: Box<Self>) -> Result<(), SeloError>;
}

/// Opens print surfaces. Returns `None` when the host refuses, e.g. a popup blocker.
pub trait PrintOpener {
    fn open(&mut self) -> Option<Box<dyn PrintSurface>>;
}

/// Receives finished downloads.
pub trait FileSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), SeloError>;
}

/// Builds the vector document for `seal`.
pub fn generate(seal: &SealData, config: &SeloConfig) -> Result<SealDocument, SeloError> {
    Ok(VectorRenderer::new(config)?.render(seal))
}

/// Renders the print markup into a surface from `opener`.
///
/// A refused surface is not an error: nothing is written and `Ok(())` is returned.
pub fn open_print_view<O: PrintOpener + ?Sized>(
    seal: &SealData,
    config: &SeloConfig,
    opener: &mut O,
) -> Result<(), SeloError> {
    let markup = MarkupRenderer::new(config)?.render(seal)?;
    let Some(mut surface) = opener.open() else {
        log::warn!("Print view for '{}' was blocked by the host", seal.campaign_name);
        return Ok(());
    };
    surface.write(&markup)?;
    surface.close()
}

/// Generates the vector document and hands it to `sink`. Returns the file name used.
pub fn download<S: FileSink + ?Sized>(
    seal: &SealData,
    config: &SeloConfig,
    sink: &mut S,
) -> Result<String, SeloError> {
    let document = generate(seal, config)?;
    let filename = download_filename(&seal.campaign_name);
    sink.save(&filename, &document.to_bytes()?)?;
    log::info!("Saved {} label pages as {}", document.page_count(), filename);
    Ok(filename)
}

static LAST_SUFFIX: AtomicI64 = AtomicI64::new(0);

/// A strictly increasing number, based on the current time in milliseconds.
fn next_suffix() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_SUFFIX.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_SUFFIX.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(current) => last = current,
        }
    }
}

/// `selos_<campaign>_<suffix>.pdf`, with whitespace runs in the campaign name
/// replaced by underscores.
pub fn download_filename(campaign_name: &str) -> String {
    format!("selos_{}_{}.pdf", collapse_whitespace(campaign_name), next_suffix())
}

/// Saves downloads into a directory, creating it on first use.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &SeloConfig) -> Self {
        Self::new(config.output_dir.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), SeloError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(filename), bytes)?;
        Ok(())
    }
}

/// Opens the print view as an HTML file, for hosts without a browser window.
///
/// A file that cannot be created counts as a refused surface.
pub struct FilePrintOpener {
    path: PathBuf,
}

impl FilePrintOpener {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

struct FileSurface {
    file: File,
}

impl PrintSurface for FileSurface {
    fn write(&mut self, markup: &str) -> Result<(), SeloError> {
        self.file.write_all(markup.as_bytes())?;
        Ok(())
    }

    fn close(mut self: Box<Self>) -> Result<(), SeloError> {
        self.file.flush()?;
        Ok(())
    }
}

impl PrintOpener for FilePrintOpener {
    fn open(&mut self) -> Option<Box<dyn PrintSurface>> {
        match File::create(&self.path) {
            Ok(file) => Some(Box::new(FileSurface { file })),
            Err(e) => {
                log::warn!("Cannot open print view at {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
