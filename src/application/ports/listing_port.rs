//! ListingPort - interface to the listing widget and its shell browser
//!
//! The listing owns the items, the selection state and the column set of
//! the currently browsed directory. Everything here is read fresh on each
//! call; callers never cache what they get back.

use std::path::PathBuf;

use crate::domain::entities::{ColumnSet, ListItem, Selection};
use crate::domain::value_objects::{Point, Rect, ViewMode};

/// Port interface for one listing surface
pub trait ListingPort {
    /// Full ordered column set, hidden columns included
    fn columns(&self) -> ColumnSet;

    /// Replace the column set
    fn set_columns(&mut self, columns: ColumnSet);

    /// Re-read the current location and rebuild the view
    fn refresh(&mut self);

    /// Directory currently being browsed
    fn directory(&self) -> PathBuf;

    /// Number of items in the listing
    fn item_count(&self) -> usize;

    /// Item attributes at `index`
    fn item(&self, index: usize) -> Option<ListItem>;

    /// Selected item indices, in listing order
    fn selected_indices(&self) -> Vec<usize>;

    /// Index of the item that is both focused and selected
    fn focused_selected_index(&self) -> Option<usize>;

    /// Select or deselect one item
    fn set_selected(&mut self, index: usize, selected: bool);

    /// Icon rectangle of an item, in client coordinates
    fn item_icon_rect(&self, index: usize) -> Rect;

    /// Convert a client point of the listing to screen coordinates
    fn client_to_screen(&self, point: Point) -> Point;

    /// Whether the selection can be copied to the clipboard
    fn can_copy_selection(&self) -> bool;

    /// Whether the selection can be cut to the clipboard
    fn can_cut_selection(&self) -> bool;

    /// Current presentation mode
    fn view_mode(&self) -> ViewMode;

    /// Build the current selection from the widget state
    fn selection(&self) -> Selection {
        Selection::new(
            self.selected_indices()
                .into_iter()
                .filter_map(|index| self.item(index))
                .collect(),
        )
    }
}
