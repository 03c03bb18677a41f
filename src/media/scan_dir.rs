//! Scan directory selection for mediasort
//!
//! This module decides which folder gets organized, either from the
//! configuration or by asking the user through a native folder dialog.

use crate::{
    config::{SELECT_FOLDER_DIALOG_TITLE, SELECT_FOLDER_PROMPT},
    error::{Error, Result},
};
use log::debug;
use rfd::FileDialog;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Asks the user to pick a folder with a native dialog
///
/// # Arguments
/// * `default_dir` - Folder the dialog opens in, if any
///
/// # Returns
/// Returns the normalized folder path, or None if the dialog was cancelled
pub fn select_folder(default_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title(SELECT_FOLDER_DIALOG_TITLE);
    if let Some(dir) = default_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_folder().map(|path| normalize_path(&path))
}

/// Resolves the folder to organize
///
/// A configured folder wins when it exists. Without one, the user is asked
/// through [`select_folder`].
///
/// # Arguments
/// * `configured` - Folder from the command line or settings, if any
///
/// # Returns
/// Returns the folder to scan. A configured path that is not a directory
/// yields [`Error::InvalidDirectory`]; the caller may then fall back to
/// [`select_folder`].
pub fn get_scan_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(Error::InvalidDirectory {
            path: dir.display().to_string(),
            context: "path does not exist or is not a directory".to_string(),
        }),
        None => prompt_for_scan_dir(),
    }
}

/// Prompts on the console and opens the folder dialog
pub fn prompt_for_scan_dir() -> Result<PathBuf> {
    print!("{SELECT_FOLDER_PROMPT}");
    let _ = std::io::stdout().flush();

    match select_folder(None) {
        Some(dir) => {
            println!("{}", dir.display());
            Ok(dir)
        }
        None => {
            println!();
            debug!("Folder dialog closed without a selection");
            Err(Error::DirectorySelectionCancelled)
        }
    }
}

/// Drops redundant separators and `.` components
fn normalize_path(path: &Path) -> PathBuf {
    path.components().collect()
}
