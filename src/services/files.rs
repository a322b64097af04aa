//! Filesystem operations for the batch loop.
//!
//! - Shallow enumeration of the source folder
//! - Destination path construction by base file name
//! - Moving a file without ever overwriting the destination

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by enumeration and moves.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to enumerate directory '{path}': {source}")]
    EnumerationFailed { path: Utf8PathBuf, source: io::Error },

    #[error("File name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),

    #[error("Path has no file name: {0}")]
    NoFileName(Utf8PathBuf),

    #[error("File already exists in the destination folder: {0}")]
    DestinationExists(Utf8PathBuf),

    #[error("Failed to move '{from}' to '{to}': {source}")]
    MoveFailed {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        source: io::Error,
    },
}

/// List the files directly inside `source`, sorted by name.
///
/// Subdirectories are neither descended into nor returned. Names that are not
/// valid UTF-8 are still listed so the batch can count them as failures.
///
/// # Errors
/// Returns [`FileError::EnumerationFailed`] if the directory cannot be read.
pub fn enumerate_files(source: &Utf8Path) -> Result<Vec<PathBuf>, FileError> {
    let enumeration_error = |e: io::Error| FileError::EnumerationFailed {
        path: source.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();

    for entry in fs::read_dir(source).map_err(enumeration_error)? {
        let path = entry.map_err(enumeration_error)?.path();

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!("Enumerated {} files in {}", files.len(), source);
    Ok(files)
}

/// Destination folder joined with the source file's base name.
///
/// An empty destination folder yields the bare file name, which resolves
/// against the working directory.
pub fn destination_for(destination_dir: &Utf8Path, file: &Utf8Path) -> Result<Utf8PathBuf, FileError> {
    let name = file
        .file_name()
        .ok_or_else(|| FileError::NoFileName(file.to_path_buf()))?;

    Ok(destination_dir.join(name))
}

/// Move `from` to `to`, failing if `to` already exists.
///
/// The destination is only ever created atomically: a hard link where the
/// filesystem allows one, otherwise a `create_new` copy. The source is
/// removed once the destination holds the file.
pub fn move_file(from: &Utf8Path, to: &Utf8Path) -> Result<(), FileError> {
    link_then_remove(from, to)
}

fn link_then_remove(from: &Utf8Path, to: &Utf8Path) -> Result<(), FileError> {
    let move_error = |e: io::Error| FileError::MoveFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    match fs::hard_link(from, to) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FileError::DestinationExists(to.to_path_buf()));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(move_error(e)),
        Err(e) => {
            tracing::debug!("Hard link unavailable ({}), copying {} to {}", e, from, to);
            return copy_then_remove(from, to);
        }
    }

    if let Err(e) = fs::remove_file(from) {
        let _ = fs::remove_file(to);
        return Err(move_error(e));
    }

    Ok(())
}

fn copy_then_remove(from: &Utf8Path, to: &Utf8Path) -> Result<(), FileError> {
    let move_error = |e: io::Error| FileError::MoveFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    let mut src_file = fs::File::open(from).map_err(move_error)?;

    let mut dst_file = match fs::OpenOptions::new().write(true).create_new(true).open(to) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FileError::DestinationExists(to.to_path_buf()));
        }
        Err(e) => return Err(move_error(e)),
    };

    if let Err(e) = io::copy(&mut src_file, &mut dst_file) {
        drop(dst_file);
        let _ = fs::remove_file(to);
        return Err(move_error(e));
    }

    drop(src_file);
    fs::remove_file(from).map_err(move_error)
}
