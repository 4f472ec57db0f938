//! Selection entity - the highlighted entries of a listing
//!
//! A selection is never stored. It is rebuilt from the listing every time a
//! menu or an open operation needs it.

use std::path::{Path, PathBuf};

/// One entry of a listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    /// Position in the listing
    pub index: usize,
    /// Display name
    pub name: String,
    /// Full filesystem path
    pub full_path: PathBuf,
    /// Whether the entry is a directory
    pub is_directory: bool,
}

impl ListItem {
    pub fn file(index: usize, full_path: impl Into<PathBuf>) -> Self {
        Self::new(index, full_path, false)
    }

    pub fn directory(index: usize, full_path: impl Into<PathBuf>) -> Self {
        Self::new(index, full_path, true)
    }

    fn new(index: usize, full_path: impl Into<PathBuf>, is_directory: bool) -> Self {
        let full_path = full_path.into();
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            index,
            name,
            full_path,
            is_directory,
        }
    }

    pub fn path(&self) -> &Path {
        &self.full_path
    }

    /// Lower-cased extension, if the entry has one
    pub fn extension(&self) -> Option<String> {
        self.full_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Currently selected entries, in listing order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<ListItem>,
}

impl Selection {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn indices(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.index).collect()
    }

    pub fn first(&self) -> Option<&ListItem> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&ListItem> {
        self.items.last()
    }

    pub fn has_directory(&self) -> bool {
        self.items.iter().any(|i| i.is_directory)
    }

    pub fn directories(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter().filter(|i| i.is_directory)
    }

    pub fn files(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter().filter(|i| !i.is_directory)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.items.iter().map(|i| i.full_path.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_name_and_extension() {
        let item = ListItem::file(3, "/docs/Report.PDF");
        assert_eq!(item.name, "Report.PDF");
        assert_eq!(item.index, 3);
        assert_eq!(item.extension().as_deref(), Some("pdf"));
        assert!(!item.is_directory);
    }

    #[test]
    fn test_selection_partitions_files_and_directories() {
        let selection = Selection::new(vec![
            ListItem::file(0, "/a/one.txt"),
            ListItem::directory(2, "/a/sub"),
            ListItem::file(5, "/a/two.txt"),
        ]);

        assert!(selection.has_directory());
        assert_eq!(selection.indices(), vec![0, 2, 5]);
        assert_eq!(selection.files().count(), 2);
        assert_eq!(selection.directories().map(|d| d.index).collect::<Vec<_>>(), vec![2]);
        assert_eq!(selection.last().map(|i| i.index), Some(5));
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert!(!selection.has_directory());
        assert!(selection.first().is_none());
    }
}
