//! OcrMover - move images that contain text to another folder.
//!
//! Main entry point for the interactive console application.
//!
//! # Execution Flow
//!
//! 1. Load settings from `OcrMover Data/OcrMover Config.yaml` (defaults are
//!    written on first run)
//! 2. Initialize logging → logs/ocrmover.<date>
//! 3. Resolve the Tesseract language-data directory
//! 4. Build one [`TesseractEngine`] for the whole run
//! 5. Hand engine, native folder picker and terminal console to the
//!    [`MoverController`] and run it once
//!
//! Failures inside the run are reported on the console by the controller.
//! Only initialization failures make the process exit with an error.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use ocrmover::ui::{NativeFolderPicker, TerminalConsole};
use ocrmover::{
    APP_NAME, ConfigManager, MoverController, OcrSettings, TesseractEngine, VERSION,
    resolve_tessdata_dir,
};

fn main() -> Result<()> {
    let config_manager = ConfigManager::new("OcrMover Data")?;
    let user_config = config_manager.ensure_user_config()?;
    let debug_mode = user_config.mover_settings.debug_mode;

    let _log_guard = ocrmover::logging::setup_logging("logs", APP_NAME, debug_mode, debug_mode)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!("Using configuration directory {}", config_manager.config_dir());
    tracing::info!(
        "Loaded configuration - languages: {}, tesseract: {}",
        user_config.ocr_settings.language_arg(),
        user_config.ocr_settings.tesseract_exe
    );

    let engine = build_engine(user_config.ocr_settings)?;

    let mut controller = MoverController::new(
        NativeFolderPicker::new().context("Failed to initialize the folder dialog")?,
        engine,
        TerminalConsole::new(),
        user_config.mover_settings,
    );

    let outcome = controller.run();
    tracing::info!("Run finished: {:?}", outcome);

    Ok(())
}

/// Build the engine, falling back to Tesseract's own data lookup when the
/// resolved tessdata directory is missing.
fn build_engine(settings: OcrSettings) -> Result<TesseractEngine> {
    let tessdata_dir = resolve_tessdata_dir(&settings)?;

    let tessdata_dir: Option<Utf8PathBuf> = if tessdata_dir.is_dir() {
        tracing::info!("Using tessdata directory {}", tessdata_dir);
        Some(tessdata_dir)
    } else {
        tracing::warn!(
            "Tessdata directory {} not found, using Tesseract's default",
            tessdata_dir
        );
        None
    };

    TesseractEngine::new(settings, tessdata_dir).context("Failed to initialize the OCR engine")
}
