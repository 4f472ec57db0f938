//! ClipboardPort - interface for clipboard queries and writes

use std::path::Path;

use thiserror::Error;

/// How clipboard contents would be pasted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteMode {
    /// Copy or move the items themselves
    Normal,
    /// Create shortcuts to the items
    Shortcut,
}

/// Clipboard operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard could not be opened or read
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard holds no usable data
    #[error("Clipboard holds no file data")]
    NoFileData,
    /// Writing to the clipboard failed
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Port interface for the clipboard
pub trait ClipboardPort {
    /// Whether a data object can be read from the clipboard at all
    fn has_data(&self) -> bool;

    /// Whether the shell's drop target for `directory` accepts the clipboard
    /// data in `mode`. Independent of whether the data carries file paths.
    fn can_paste(&self, directory: &Path, mode: PasteMode) -> bool;

    /// Replace the clipboard contents with text
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Copy the files on the clipboard into `destination`.
    /// Fails with `NoFileData` when the clipboard lists no files.
    fn copy_files_into(&mut self, destination: &Path) -> Result<(), ClipboardError>;
}
