//! Data models for the OcrMover application.
//!
//! - [`UserConfig`]: OCR and console settings loaded from `OcrMover Config.yaml`
//! - [`OcrSettings`]: The explicit configuration handed to the OCR engine
//! - [`BatchStats`]: Counters for one pass over the source folder
//! - [`FileOutcome`]: Moved, blank or failed
//! - [`RunSummary`]: The closing report derived from [`BatchStats`]
//!
//! Nothing here outlives a run except the settings, which are serialized to YAML.

pub mod batch;
pub mod config;

pub use batch::{BatchStats, FileOutcome, RunSummary};
pub use config::{MoverSettings, OcrSettings, UserConfig};
