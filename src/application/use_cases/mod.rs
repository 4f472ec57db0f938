//! Use Cases - Single-purpose listing operations
//!
//! Each use case borrows the ports it needs for one invocation.

pub mod context_menu;
pub mod copy_paths;
pub mod open_items;
pub mod paste;
pub mod reorder_columns;
pub mod select_similar;

pub use context_menu::{ContextMenuOutcome, ContextMenuUseCase, MenuAnchor};
pub use copy_paths::{CopyPathsUseCase, PATH_SEPARATOR};
pub use open_items::OpenItemsUseCase;
pub use paste::{PasteOutcome, PasteUseCase};
pub use reorder_columns::ReorderColumnsUseCase;
pub use select_similar::SelectSimilarUseCase;
