//! SelectSimilarUseCase - Select every item of the same type as the first
//! selected one

use tracing::debug;

use crate::application::ports::ListingPort;
use crate::domain::services::same_file_type;

pub struct SelectSimilarUseCase<'a, L: ListingPort + ?Sized> {
    listing: &'a mut L,
}

impl<'a, L: ListingPort + ?Sized> SelectSimilarUseCase<'a, L> {
    pub fn new(listing: &'a mut L) -> Self {
        Self { listing }
    }

    /// Returns how many items ended up selected, or `None` with no selection
    pub fn execute(&mut self) -> Option<usize> {
        let sample = self.listing.selection().first()?.clone();

        let mut selected = 0;
        for index in 0..self.listing.item_count() {
            let Some(item) = self.listing.item(index) else {
                continue;
            };
            let similar = same_file_type(&sample, &item);
            self.listing.set_selected(index, similar);
            if similar {
                selected += 1;
            }
        }

        debug!(sample = %sample.name, selected, "selected similar files");
        Some(selected)
    }
}
