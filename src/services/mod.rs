//! Services module - the OCR and filesystem logic behind a batch run.
//!
//! The services are framework-agnostic: nothing in here knows about the
//! console or the folder dialogs, so they can be driven from tests with fake
//! engines and temporary directories.
//!
//! # Components
//!
//! - [`OcrEngine`]: Capability that turns an image file into text.
//!   [`TesseractEngine`] implements it by running the Tesseract executable.
//! - [`classify_text`]: Blank vs. has-text decision on the extracted text
//! - [`enumerate_files`], [`move_file`]: Shallow listing and no-overwrite moves
//! - [`run_batch`]: The per-file loop, reporting progress as [`BatchEvent`]s
//!
//! # Error tiers
//!
//! [`BatchError`] means the run could not start (the source folder could not
//! be read). [`ProcessError`] belongs to a single file and is only counted.
//!
//! # Usage Example
//!
//! ```ignore
//! use ocrmover::services::{run_batch, TesseractEngine};
//!
//! let engine = TesseractEngine::new(settings, Some(tessdata_dir))?;
//! let stats = run_batch(&engine, source, destination, |event| {
//!     println!("{:?}", event);
//! })?;
//! println!("{}", stats.summary().message());
//! ```

pub mod batch;
pub mod files;
pub mod ocr;

pub use batch::{BatchError, BatchEvent, ProcessError, run_batch};
pub use files::{FileError, destination_for, enumerate_files, move_file};
pub use ocr::{OcrEngine, OcrError, TesseractEngine, TextClass, classify_image, classify_text, is_blank_text};
