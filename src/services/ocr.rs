use crate::models::OcrSettings;
use camino::{Utf8Path, Utf8PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::process::Command;
use tokio::runtime::Runtime;
use tokio::time::timeout;

/// Errors raised while turning an image into text
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: Utf8PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to run OCR engine '{exe}': {source}")]
    Launch {
        exe: String,
        source: std::io::Error,
    },

    #[error("OCR engine timed out after {0:?}")]
    Timeout(Duration),

    #[error("OCR engine exited with code {code}: {stderr}")]
    EngineFailed { code: i32, stderr: String },

    #[error("OCR engine produced text that is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    #[error("Failed to start OCR runtime: {0}")]
    Runtime(std::io::Error),
}

/// Anything that can read the text out of an image file.
///
/// The batch loop only ever talks to this trait, so tests can hand it
/// canned text instead of running Tesseract.
#[cfg_attr(test, mockall::automock)]
pub trait OcrEngine {
    fn extract_text(&self, image_path: &Utf8Path) -> Result<String, OcrError>;
}

/// Result of classifying an image's extracted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClass {
    Blank,
    HasText,
}

/// True when the text holds nothing but spaces and newlines.
///
/// `\r` is treated as part of a newline. Tabs and every other character
/// count as text.
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\n' | '\r'))
}

pub fn classify_text(text: &str) -> TextClass {
    if is_blank_text(text) {
        TextClass::Blank
    } else {
        TextClass::HasText
    }
}

/// Run OCR on one image and classify what came back
pub fn classify_image<E: OcrEngine + ?Sized>(
    engine: &E,
    image_path: &Utf8Path,
) -> Result<TextClass, OcrError> {
    let text = engine.extract_text(image_path)?;
    let class = classify_text(&text);

    tracing::debug!(
        "OCR on {} returned {} chars -> {:?}",
        image_path,
        text.chars().count(),
        class
    );

    Ok(class)
}

/// Tesseract OCR through its command-line executable.
///
/// One engine is built per run and reused for every file. Each call spawns
/// `tesseract <image> stdout -l <langs>` on a private current-thread runtime
/// and blocks until it exits or the configured timeout kills it.
pub struct TesseractEngine {
    settings: OcrSettings,
    tessdata_dir: Option<Utf8PathBuf>,
    runtime: Runtime,
}

impl TesseractEngine {
    /// Create an engine from explicit settings.
    ///
    /// # Arguments
    /// * `settings` - Languages, executable, page segmentation mode, timeout
    /// * `tessdata_dir` - Language data directory, or None for Tesseract's default
    pub fn new(settings: OcrSettings, tessdata_dir: Option<Utf8PathBuf>) -> Result<Self, OcrError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .thread_name("ocrmover-ocr")
            .build()
            .map_err(OcrError::Runtime)?;

        tracing::info!(
            "Tesseract engine ready: exe={}, languages={}, tessdata={:?}",
            settings.tesseract_exe,
            settings.language_arg(),
            tessdata_dir
        );

        Ok(Self {
            settings,
            tessdata_dir,
            runtime,
        })
    }

    /// Arguments passed to the Tesseract executable for one image.
    ///
    /// The page separator is emptied so the output matches the library's
    /// plain-text result instead of ending in a form feed.
    pub fn build_args(&self, image_path: &Utf8Path) -> Vec<String> {
        let mut args = vec![
            image_path.to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            self.settings.language_arg(),
        ];

        if let Some(dir) = &self.tessdata_dir {
            args.push("--tessdata-dir".to_string());
            args.push(dir.to_string());
        }

        if let Some(psm) = self.settings.page_segmentation_mode {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }

        args.push("-c".to_string());
        args.push("page_separator=".to_string());

        args
    }

    fn timeout_duration(&self) -> Option<Duration> {
        match self.settings.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    async fn run_tesseract(&self, image_path: &Utf8Path) -> Result<String, OcrError> {
        let exe = &self.settings.tesseract_exe;
        let start = Instant::now();

        let mut cmd = Command::new(exe);
        cmd.args(self.build_args(image_path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let launch_error = |source: std::io::Error| OcrError::Launch {
            exe: exe.clone(),
            source,
        };

        let child = cmd.spawn().map_err(launch_error)?;

        // Dropping the wait future on timeout kills the child
        let output = match self.timeout_duration() {
            Some(limit) => timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    tracing::warn!("Tesseract timed out after {:?} on {}", limit, image_path);
                    OcrError::Timeout(limit)
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(launch_error)?;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(
            "Tesseract finished {} in {:.2}s with exit code {}",
            image_path,
            start.elapsed().as_secs_f32(),
            exit_code
        );

        if !output.status.success() {
            return Err(OcrError::EngineFailed {
                code: exit_code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

impl OcrEngine for TesseractEngine {
    fn extract_text(&self, image_path: &Utf8Path) -> Result<String, OcrError> {
        // Header decode only; enough to reject files that are not images
        let (width, height) =
            image::image_dimensions(image_path.as_std_path()).map_err(|source| {
                OcrError::ImageLoad {
                    path: image_path.to_path_buf(),
                    source,
                }
            })?;
        tracing::debug!("Loaded {} ({}x{})", image_path, width, height);

        self.runtime.block_on(self.run_tesseract(image_path))
    }
}
