// Console controller - the interactive flow around a batch run
//
// This module contains the MoverController which coordinates between:
// - FolderPicker (source and destination selection)
// - OcrEngine (text extraction, through services::run_batch)
// - Console (colored status lines and key presses)
//
// It handles:
// - The intro prompt and folder selection
// - The "no folders selected" guard
// - Turning batch events into console lines
// - The run summary and the top-level failure message

use crate::models::{BatchStats, MoverSettings};
use crate::services::{BatchEvent, OcrEngine, run_batch};
use crate::ui::console::{Console, Tone};
use crate::ui::picker::FolderPicker;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

pub const INTRO_MESSAGE: &str =
    " \u{25A0} To detect text within an image and move it to a destination folder, press any key. \u{25A0}";
pub const SOURCE_TITLE: &str = "Select Source Folder";
pub const DESTINATION_TITLE: &str = "Select Destination Folder";
pub const NO_FOLDERS_MESSAGE: &str = "None of the folders selected.";
pub const PROCESSING_STARTED_MESSAGE: &str = " \u{25A0} Processing of files has been started... \u{25A0}";
pub const PROCESSING_MESSAGE: &str = "Processing...";
pub const PROBLEM_MESSAGE: &str = "Houston, we have a problem. Try re-launching!";

/// The two folders chosen at the start of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSelection {
    pub source: Option<Utf8PathBuf>,
    pub destination: Option<Utf8PathBuf>,
}

impl FolderSelection {
    /// The run is only abandoned when *both* pickers were cancelled.
    ///
    /// A single missing folder still proceeds: a missing source fails at
    /// enumeration, a missing destination moves files relative to the
    /// working directory.
    pub fn should_abort(&self) -> bool {
        self.source.is_none() && self.destination.is_none()
    }

    /// Both folders, with a cancelled pick as an empty path
    pub fn into_paths(self) -> (Utf8PathBuf, Utf8PathBuf) {
        (
            self.source.unwrap_or_default(),
            self.destination.unwrap_or_default(),
        )
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No folder was selected; nothing was touched
    Aborted,
    /// The batch ran to the end (individual files may still have failed)
    Completed(BatchStats),
    /// Setup failed before or while starting the batch
    Failed,
}

/// Drives one interactive run.
///
/// Generic over its three capabilities so the flow can be exercised with
/// fakes; the binary plugs in [`NativeFolderPicker`](crate::ui::NativeFolderPicker),
/// [`TesseractEngine`](crate::services::TesseractEngine) and
/// [`TerminalConsole`](crate::ui::TerminalConsole).
pub struct MoverController<P, E, C> {
    picker: P,
    engine: E,
    console: C,
    settings: MoverSettings,
}

impl<P, E, C> MoverController<P, E, C>
where
    P: FolderPicker,
    E: OcrEngine,
    C: Console,
{
    pub fn new(picker: P, engine: E, console: C, settings: MoverSettings) -> Self {
        Self {
            picker,
            engine,
            console,
            settings,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the whole interaction once.
    ///
    /// 1. Intro message, wait for a key
    /// 2. Pick source and destination folders
    /// 3. Abort if neither was picked
    /// 4. Process the batch and print the summary
    /// 5. Wait for a final key
    ///
    /// Setup failures are reported with [`PROBLEM_MESSAGE`] and never escape.
    pub fn run(&mut self) -> RunOutcome {
        self.intro();

        let outcome = match self.select_folders_and_process() {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Run failed: {:#}", e);
                self.console.write_line(PROBLEM_MESSAGE, Tone::Error);
                RunOutcome::Failed
            }
        };

        self.console.wait_for_key();
        outcome
    }

    fn intro(&mut self) {
        self.console.blank_line();
        self.console.write_line(INTRO_MESSAGE, Tone::Info);
        self.console.wait_for_key();
        self.console.blank_line();
        self.console.blank_line();
    }

    fn select_folder(&mut self, title: &str) -> Option<Utf8PathBuf> {
        self.console.write_line(title, Tone::Info);
        let selected = self.picker.pick_folder(title);

        let shown = selected.as_deref().map(Utf8Path::as_str).unwrap_or_default();
        self.console
            .write_line(&format!(" \u{25A0} {}", shown), Tone::Info);
        tracing::info!("{}: {:?}", title, selected);

        selected
    }

    /// Ask for the source folder, then the destination folder
    pub fn select_folders(&mut self) -> FolderSelection {
        let source = self.select_folder(SOURCE_TITLE);
        self.console.blank_line();
        let destination = self.select_folder(DESTINATION_TITLE);

        FolderSelection {
            source,
            destination,
        }
    }

    fn select_folders_and_process(&mut self) -> Result<RunOutcome> {
        let selection = self.select_folders();

        if selection.should_abort() {
            tracing::warn!("No folders selected, nothing to do");
            self.console.write_line(NO_FOLDERS_MESSAGE, Tone::Warning);
            return Ok(RunOutcome::Aborted);
        }

        let (source, destination) = selection.into_paths();
        let stats = self.process_files(&source, &destination)?;

        Ok(RunOutcome::Completed(stats))
    }

    fn process_files(&mut self, source: &Utf8Path, destination: &Utf8Path) -> Result<BatchStats> {
        self.console.clear();
        self.console.blank_line();
        self.console.blank_line();
        self.console
            .write_line(PROCESSING_STARTED_MESSAGE, Tone::Success);

        let console = &mut self.console;
        let clear_after_each_file = self.settings.clear_after_each_file;

        let stats = run_batch(&self.engine, source, destination, |event| {
            report_event(&mut *console, clear_after_each_file, event)
        })
        .with_context(|| format!("Failed to process files in '{}'", source))?;

        let summary = stats.summary();
        let tone = if summary.is_success() {
            Tone::Success
        } else {
            Tone::Warning
        };

        self.console.blank_line();
        self.console.blank_line();
        self.console.write_line(&summary.message(), tone);

        Ok(stats)
    }
}

fn report_event<C: Console + ?Sized>(console: &mut C, clear_after_each_file: bool, event: BatchEvent<'_>) {
    let finished = match event {
        BatchEvent::FileStarted { path } => {
            console.blank_line();
            console.blank_line();
            console.write_line(path.as_str(), Tone::Info);
            console.write_line(PROCESSING_MESSAGE, Tone::Success);
            false
        }
        BatchEvent::FileMoved { destination, .. } => {
            console.write_line(&format!("Text found, moved to {}", destination), Tone::Success);
            true
        }
        BatchEvent::FileBlank { .. } => {
            console.write_line("No text found, left in place.", Tone::Info);
            true
        }
        BatchEvent::FileFailed { error, .. } => {
            console.write_line(&error.to_string(), Tone::Error);
            true
        }
        BatchEvent::Started { .. } | BatchEvent::Finished { .. } => false,
    };

    if finished && clear_after_each_file {
        console.clear();
    }
}
