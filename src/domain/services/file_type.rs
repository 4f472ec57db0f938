//! File type comparison used by "select similar files"

use crate::domain::entities::ListItem;

/// Whether two listing entries are of the same type.
///
/// Directories only match directories. Files match when their extensions
/// are equal ignoring case; a file without an extension only matches other
/// files without one.
pub fn same_file_type(a: &ListItem, b: &ListItem) -> bool {
    match (a.is_directory, b.is_directory) {
        (true, true) => true,
        (false, false) => a.extension() == b.extension(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_comparison_ignores_case() {
        let a = ListItem::file(0, "/x/photo.JPG");
        let b = ListItem::file(1, "/y/other.jpg");
        let c = ListItem::file(2, "/y/other.png");
        assert!(same_file_type(&a, &b));
        assert!(!same_file_type(&a, &c));
    }

    #[test]
    fn test_directories_and_bare_files() {
        let dir = ListItem::directory(0, "/x/photos.jpg");
        let other_dir = ListItem::directory(1, "/x/music");
        let bare = ListItem::file(2, "/x/Makefile");
        let bare2 = ListItem::file(3, "/x/LICENSE");
        let jpg = ListItem::file(4, "/x/a.jpg");

        assert!(same_file_type(&dir, &other_dir));
        assert!(!same_file_type(&dir, &jpg));
        assert!(same_file_type(&bare, &bare2));
        assert!(!same_file_type(&bare, &jpg));
    }
}
