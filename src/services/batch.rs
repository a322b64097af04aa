use crate::models::{BatchStats, FileOutcome};
use crate::services::files::{FileError, destination_for, enumerate_files, move_file};
use crate::services::ocr::{OcrEngine, OcrError, TextClass, classify_image};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;
use thiserror::Error;

/// Why a single file could not be handled. Never aborts the batch.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error(transparent)]
    File(#[from] FileError),
}

/// Setup failures that stop the run before any file is touched
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Enumeration(#[from] FileError),
}

/// Progress notifications emitted by [`run_batch`]
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Started { total: usize },
    FileStarted { path: &'a Utf8Path },
    FileMoved { path: &'a Utf8Path, destination: &'a Utf8Path },
    FileBlank { path: &'a Utf8Path },
    FileFailed { path: &'a Utf8Path, error: &'a ProcessError },
    Finished { stats: BatchStats },
}

enum Processed {
    Moved(Utf8PathBuf),
    Blank,
}

/// Classify one file and move it when it holds text
fn process_file<E: OcrEngine + ?Sized>(
    engine: &E,
    file: &Path,
    destination_dir: &Utf8Path,
) -> Result<Processed, ProcessError> {
    let file = Utf8Path::from_path(file).ok_or_else(|| FileError::NonUtf8Name(file.to_path_buf()))?;
    let destination = destination_for(destination_dir, file)?;

    match classify_image(engine, file)? {
        TextClass::Blank => Ok(Processed::Blank),
        TextClass::HasText => {
            move_file(file, &destination)?;
            Ok(Processed::Moved(destination))
        }
    }
}

/// Run OCR over every file directly inside `source` and move the ones with
/// text into `destination`.
///
/// The file list is snapshotted once up front. Each file is processed
/// exactly once, in order; a failure is reported through `on_event`, counted,
/// and the loop moves on.
///
/// # Errors
/// Only enumeration of `source` can fail the batch as a whole.
pub fn run_batch<E, F>(
    engine: &E,
    source: &Utf8Path,
    destination: &Utf8Path,
    mut on_event: F,
) -> Result<BatchStats, BatchError>
where
    E: OcrEngine + ?Sized,
    F: FnMut(BatchEvent<'_>),
{
    let files = enumerate_files(source)?;
    let mut stats = BatchStats::new(files.len());

    tracing::info!(
        "Starting batch: {} files from {} to {}",
        stats.total,
        source,
        destination
    );
    on_event(BatchEvent::Started { total: stats.total });

    for path in &files {
        // Lossy form for reporting; processing still gets the real path
        let lossy = path.to_string_lossy();
        let file = Utf8Path::new(lossy.as_ref());
        on_event(BatchEvent::FileStarted { path: file });

        let outcome = match process_file(engine, path, destination) {
            Ok(Processed::Moved(target)) => {
                tracing::info!("Moved {} -> {}", file, target);
                on_event(BatchEvent::FileMoved {
                    path: file,
                    destination: &target,
                });
                FileOutcome::Moved
            }
            Ok(Processed::Blank) => {
                tracing::info!("No text in {}, leaving it in place", file);
                on_event(BatchEvent::FileBlank { path: file });
                FileOutcome::Blank
            }
            Err(error) => {
                tracing::warn!("Failed to process {}: {}", file, error);
                on_event(BatchEvent::FileFailed { path: file, error: &error });
                FileOutcome::Failed
            }
        };

        stats.record(outcome);
    }

    tracing::info!(
        "Batch finished: moved={}, blank={}, errors={}, total={}",
        stats.moved,
        stats.blank,
        stats.errors,
        stats.total
    );
    on_event(BatchEvent::Finished { stats });

    Ok(stats)
}
