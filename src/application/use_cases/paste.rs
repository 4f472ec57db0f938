//! PasteUseCase - Paste clipboard contents into the current directory

use tracing::{debug, warn};

use crate::application::ports::{ClipboardError, ClipboardPort, ListingPort, PasteMode, ShellPort};

/// What a paste ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Nothing on the clipboard that can be pasted here
    Nothing,
    /// The shell's paste verb ran on the directory
    ShellVerb,
    /// Files were copied into the directory directly
    Copied,
    /// The attempt failed (already logged)
    Failed,
}

/// Use case for pasting into the listing's directory
pub struct PasteUseCase<'a, L, C, S>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
    S: ShellPort + ?Sized,
{
    listing: &'a L,
    clipboard: &'a mut C,
    shell: &'a mut S,
}

impl<'a, L, C, S> PasteUseCase<'a, L, C, S>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
    S: ShellPort + ?Sized,
{
    pub fn new(listing: &'a L, clipboard: &'a mut C, shell: &'a mut S) -> Self {
        Self {
            listing,
            clipboard,
            shell,
        }
    }

    pub fn execute(&mut self) -> PasteOutcome {
        if !self.clipboard.has_data() {
            return PasteOutcome::Nothing;
        }

        // Captured now; the listing may navigate before the copy finishes.
        let directory = self.listing.directory();

        if self.clipboard.can_paste(&directory, PasteMode::Normal) {
            return match self.shell.execute_verb(&directory, &[], "paste") {
                Ok(()) => {
                    debug!(directory = %directory.display(), "pasted via shell verb");
                    PasteOutcome::ShellVerb
                }
                Err(e) => {
                    warn!(directory = %directory.display(), "paste verb failed: {}", e);
                    PasteOutcome::Failed
                }
            };
        }

        match self.clipboard.copy_files_into(&directory) {
            Ok(()) => {
                debug!(directory = %directory.display(), "pasted by copying files");
                PasteOutcome::Copied
            }
            Err(ClipboardError::NoFileData) => {
                debug!(directory = %directory.display(), "clipboard data not pasteable here");
                PasteOutcome::Nothing
            }
            Err(e) => {
                warn!(directory = %directory.display(), "paste copy failed: {}", e);
                PasteOutcome::Failed
            }
        }
    }
}
