// UI module - console interaction and folder dialogs
//
// This module contains:
// - Console: Colored status lines, screen clearing, key presses (crossterm)
// - FolderPicker: Native folder selection dialogs (rfd)
// - MoverController: The interactive flow wrapped around a batch run

pub mod console;
pub mod controller;
pub mod picker;

pub use console::{Console, TerminalConsole, Tone};
pub use controller::{FolderSelection, MoverController, RunOutcome};
pub use picker::{FolderPicker, NativeFolderPicker};
