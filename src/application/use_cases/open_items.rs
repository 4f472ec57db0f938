//! OpenItemsUseCase - Open the selection or a single item

use tracing::debug;

use crate::application::ports::{HostPort, ListingPort};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::OpenDisposition;

/// Use case for opening listing items
pub struct OpenItemsUseCase<'a, L: ListingPort + ?Sized, H: HostPort + ?Sized> {
    listing: &'a L,
    host: &'a mut H,
}

impl<'a, L, H> OpenItemsUseCase<'a, L, H>
where
    L: ListingPort + ?Sized,
    H: HostPort + ?Sized,
{
    pub fn new(listing: &'a L, host: &'a mut H) -> Self {
        Self { listing, host }
    }

    /// Open every selected file in place, then the last selected folder
    /// with `disposition`. Earlier folders in the selection are skipped.
    ///
    /// Returns the number of items opened.
    pub fn open_all_selected(&mut self, disposition: OpenDisposition) -> usize {
        let selection = self.listing.selection();
        let mut opened = 0;

        for file in selection.files() {
            self.host.open_item(&file.full_path, OpenDisposition::SameTab);
            opened += 1;
        }

        if let Some(folder) = selection.directories().last() {
            self.host.open_item(&folder.full_path, disposition);
            opened += 1;
        }

        debug!(opened, ?disposition, "opened selection");
        opened
    }

    /// Open the item at `index`
    pub fn open_item(
        &mut self,
        index: usize,
        disposition: OpenDisposition,
    ) -> Result<(), DomainError> {
        let item = self
            .listing
            .item(index)
            .ok_or(DomainError::ItemNotFound(index))?;
        self.host.open_item(&item.full_path, disposition);
        Ok(())
    }
}
