//! ReorderColumnsUseCase - Move a column after a header drag
//!
//! Positions come from the header control and count visible columns only.

use tracing::debug;

use crate::application::ports::ListingPort;
use crate::domain::errors::ColumnError;

/// Use case for reordering listing columns
pub struct ReorderColumnsUseCase<'a, L: ListingPort + ?Sized> {
    listing: &'a mut L,
}

impl<'a, L: ListingPort + ?Sized> ReorderColumnsUseCase<'a, L> {
    pub fn new(listing: &'a mut L) -> Self {
        Self { listing }
    }

    /// Move the visible column at `source` so it ends up at `target`.
    ///
    /// The listing only sees a new column set (and a refresh) when the move
    /// actually changed something.
    pub fn execute(&mut self, source: usize, target: usize) -> Result<(), ColumnError> {
        let mut columns = self.listing.columns();
        columns.move_visible(source, target)?;

        if source == target {
            return Ok(());
        }

        debug!(source, target, order = ?columns.visible_ids(), "columns reordered");
        self.listing.set_columns(columns);
        self.listing.refresh();
        Ok(())
    }
}
