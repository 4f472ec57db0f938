//! CopyPathsUseCase - Put the selection's paths on the clipboard as text

use std::path::Path;

use tracing::warn;

use crate::application::ports::{ClipboardError, ClipboardPort, ListingPort, ShellPort};

/// Separator between paths in the copied text
pub const PATH_SEPARATOR: &str = "\r\n";

/// Use case for copying selected paths
pub struct CopyPathsUseCase<'a, L, C>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
{
    listing: &'a L,
    clipboard: &'a mut C,
}

impl<'a, L, C> CopyPathsUseCase<'a, L, C>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
{
    pub fn new(listing: &'a L, clipboard: &'a mut C) -> Self {
        Self { listing, clipboard }
    }

    /// Copy full paths. Returns the number of paths written.
    pub fn copy_item_paths(&mut self) -> Result<usize, ClipboardError> {
        self.copy_with(|path| path.to_string_lossy().into_owned())
    }

    /// Copy UNC paths, falling back to the full path per item
    pub fn copy_universal_paths<S: ShellPort + ?Sized>(
        &mut self,
        shell: &S,
    ) -> Result<usize, ClipboardError> {
        self.copy_with(|path| {
            shell
                .universal_name(path)
                .unwrap_or_else(|| path.to_string_lossy().into_owned())
        })
    }

    fn copy_with(&mut self, mut render: impl FnMut(&Path) -> String) -> Result<usize, ClipboardError> {
        let selection = self.listing.selection();
        if selection.is_empty() {
            return Ok(0);
        }

        let text = selection
            .items()
            .iter()
            .map(|item| render(&item.full_path))
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR);

        self.clipboard.write_text(&text).map_err(|e| {
            warn!("copying paths failed: {}", e);
            e
        })?;
        Ok(selection.len())
    }
}
