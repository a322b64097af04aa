// OcrMover - Move images that contain text out of a folder using Tesseract OCR
//
// This is the library crate containing the batch logic and data structures.
// The binary crate (main.rs) provides the interactive console entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{ConfigManager, resolve_tessdata_dir};
pub use models::{BatchStats, FileOutcome, MoverSettings, OcrSettings, RunSummary, UserConfig};
pub use services::{OcrEngine, TesseractEngine, run_batch};
pub use ui::{MoverController, RunOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
