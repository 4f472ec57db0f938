//! Column entity - the attribute columns of a details listing
//!
//! A `ColumnSet` holds every known column exactly once. Checked columns are
//! visible, and their relative order is the on-screen left-to-right order.
//! Hidden columns keep their slot so toggling them back on restores them
//! where they were.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ColumnError;

/// Identifier of a listing column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Name,
    Type,
    Size,
    DateModified,
    DateCreated,
    DateAccessed,
    Attributes,
    RealSize,
    ShortName,
    Owner,
    ProductName,
    Company,
    Description,
    FileVersion,
    ProductVersion,
    ShortcutTo,
    HardLinks,
    Extension,
    Title,
    Subject,
    Authors,
    Keywords,
    Comment,
    CameraModel,
    DateTaken,
    Width,
    Height,
}

impl ColumnId {
    /// Every known column, in default order
    pub const ALL: [ColumnId; 27] = [
        ColumnId::Name,
        ColumnId::Type,
        ColumnId::Size,
        ColumnId::DateModified,
        ColumnId::DateCreated,
        ColumnId::DateAccessed,
        ColumnId::Attributes,
        ColumnId::RealSize,
        ColumnId::ShortName,
        ColumnId::Owner,
        ColumnId::ProductName,
        ColumnId::Company,
        ColumnId::Description,
        ColumnId::FileVersion,
        ColumnId::ProductVersion,
        ColumnId::ShortcutTo,
        ColumnId::HardLinks,
        ColumnId::Extension,
        ColumnId::Title,
        ColumnId::Subject,
        ColumnId::Authors,
        ColumnId::Keywords,
        ColumnId::Comment,
        ColumnId::CameraModel,
        ColumnId::DateTaken,
        ColumnId::Width,
        ColumnId::Height,
    ];

    /// Whether the column is shown on a fresh install
    pub fn visible_by_default(&self) -> bool {
        matches!(
            self,
            ColumnId::Name | ColumnId::Type | ColumnId::Size | ColumnId::DateModified
        )
    }

    /// Default header width in logical pixels
    pub fn default_width(&self) -> u32 {
        match self {
            ColumnId::Name => 150,
            ColumnId::Type | ColumnId::Description | ColumnId::ShortcutTo => 150,
            ColumnId::DateModified
            | ColumnId::DateCreated
            | ColumnId::DateAccessed
            | ColumnId::DateTaken => 150,
            ColumnId::Size | ColumnId::RealSize => 90,
            ColumnId::Width | ColumnId::Height | ColumnId::HardLinks => 60,
            _ => 100,
        }
    }
}

/// A single column: identity, visibility and width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub checked: bool,
    #[serde(default = "default_width")]
    pub width: u32,
}

fn default_width() -> u32 {
    100
}

impl Column {
    pub fn new(id: ColumnId, checked: bool) -> Self {
        Self {
            id,
            checked,
            width: id.default_width(),
        }
    }
}

/// Ordered sequence of all columns for one listing surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            columns: ColumnId::ALL
                .iter()
                .map(|&id| Column::new(id, id.visible_by_default()))
                .collect(),
        }
    }
}

impl ColumnSet {
    /// Rebuild a column set from persisted state.
    ///
    /// Duplicate ids keep their first occurrence; ids missing from `saved`
    /// are appended unchecked in default order.
    pub fn from_saved(saved: &[Column]) -> Self {
        let mut columns: Vec<Column> = Vec::with_capacity(ColumnId::ALL.len());

        for column in saved {
            if !columns.iter().any(|c| c.id == column.id) {
                columns.push(*column);
            }
        }

        for id in ColumnId::ALL {
            if !columns.iter().any(|c| c.id == id) {
                columns.push(Column::new(id, false));
            }
        }

        Self { columns }
    }

    /// All columns in full order (hidden ones included)
    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Visible columns in on-screen order
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.checked)
    }

    pub fn visible_ids(&self) -> Vec<ColumnId> {
        self.visible().map(|c| c.id).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn get(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Full-list index of the `position`-th visible column
    fn full_index_of_visible(&self, position: usize) -> Option<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.checked)
            .nth(position)
            .map(|(index, _)| index)
    }

    /// Move the visible column at `source` so it ends up at visible position
    /// `target`. Both positions count visible columns only.
    ///
    /// The column is removed, then inserted directly before the column that
    /// occupies `target` in the shortened list. Moving past the last visible
    /// column places it directly after that column.
    pub fn move_visible(&mut self, source: usize, target: usize) -> Result<(), ColumnError> {
        let visible = self.visible_count();
        for position in [source, target] {
            if position >= visible {
                return Err(ColumnError::VisiblePositionOutOfRange { position, visible });
            }
        }

        if source == target {
            return Ok(());
        }

        let from = self
            .full_index_of_visible(source)
            .ok_or(ColumnError::VisiblePositionOutOfRange {
                position: source,
                visible,
            })?;
        let column = self.columns.remove(from);

        let to = match self.full_index_of_visible(target) {
            Some(index) => index,
            None => self
                .columns
                .iter()
                .rposition(|c| c.checked)
                .map_or(0, |last| last + 1),
        };
        self.columns.insert(to, column);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(layout: &[(ColumnId, bool)]) -> ColumnSet {
        let saved: Vec<Column> = layout.iter().map(|&(id, c)| Column::new(id, c)).collect();
        ColumnSet::from_saved(&saved)
    }

    fn order(columns: &ColumnSet) -> Vec<ColumnId> {
        columns.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_default_contains_every_column_once() {
        let columns = ColumnSet::default();
        assert_eq!(columns.as_slice().len(), ColumnId::ALL.len());
        for id in ColumnId::ALL {
            assert_eq!(columns.iter().filter(|c| c.id == id).count(), 1);
        }
        assert_eq!(
            columns.visible_ids(),
            vec![
                ColumnId::Name,
                ColumnId::Type,
                ColumnId::Size,
                ColumnId::DateModified
            ]
        );
    }

    #[test]
    fn test_from_saved_drops_duplicates_and_appends_missing() {
        let saved = vec![
            Column::new(ColumnId::Size, true),
            Column::new(ColumnId::Name, true),
            Column::new(ColumnId::Size, false),
        ];
        let columns = ColumnSet::from_saved(&saved);

        assert_eq!(columns.as_slice().len(), ColumnId::ALL.len());
        assert_eq!(columns.as_slice()[0].id, ColumnId::Size);
        assert!(columns.as_slice()[0].checked);
        assert_eq!(columns.as_slice()[1].id, ColumnId::Name);
        assert_eq!(columns.as_slice()[2].id, ColumnId::Type);
        assert!(!columns.as_slice()[2].checked);
        assert_eq!(columns.visible_ids(), vec![ColumnId::Size, ColumnId::Name]);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut columns = set(&[
            (ColumnId::Name, true),
            (ColumnId::Type, false),
            (ColumnId::Size, true),
            (ColumnId::DateModified, true),
        ]);
        let before = columns.clone();

        for position in 0..3 {
            columns.move_visible(position, position).unwrap();
            assert_eq!(columns, before);
        }
    }

    #[test]
    fn test_move_left_to_head() {
        let mut columns = set(&[
            (ColumnId::Name, true),
            (ColumnId::Size, true),
            (ColumnId::DateModified, true),
        ]);

        columns.move_visible(2, 0).unwrap();

        assert_eq!(
            columns.visible_ids(),
            vec![ColumnId::DateModified, ColumnId::Name, ColumnId::Size]
        );
        assert_eq!(columns.as_slice()[0].id, ColumnId::DateModified);
    }

    #[test]
    fn test_move_to_head_keeps_leading_hidden_column_first() {
        let mut columns = set(&[
            (ColumnId::Type, false),
            (ColumnId::Name, true),
            (ColumnId::Size, true),
            (ColumnId::DateModified, true),
        ]);

        columns.move_visible(2, 0).unwrap();

        assert_eq!(
            &order(&columns)[..4],
            &[
                ColumnId::Type,
                ColumnId::DateModified,
                ColumnId::Name,
                ColumnId::Size
            ]
        );
    }

    #[test]
    fn test_move_right_by_one() {
        let mut columns = set(&[
            (ColumnId::Name, true),
            (ColumnId::Size, true),
            (ColumnId::DateModified, true),
        ]);

        columns.move_visible(0, 1).unwrap();

        assert_eq!(
            columns.visible_ids(),
            vec![ColumnId::Size, ColumnId::Name, ColumnId::DateModified]
        );
    }

    #[test]
    fn test_move_to_last_visible_position() {
        let mut columns = set(&[
            (ColumnId::Name, true),
            (ColumnId::Type, false),
            (ColumnId::Size, true),
            (ColumnId::DateModified, true),
            (ColumnId::Owner, false),
        ]);

        columns.move_visible(0, 2).unwrap();

        assert_eq!(
            columns.visible_ids(),
            vec![ColumnId::Size, ColumnId::DateModified, ColumnId::Name]
        );
        // Lands right after the last visible column, ahead of trailing hidden ones
        assert_eq!(
            &order(&columns)[..5],
            &[
                ColumnId::Type,
                ColumnId::Size,
                ColumnId::DateModified,
                ColumnId::Name,
                ColumnId::Owner
            ]
        );
    }

    #[test]
    fn test_move_preserves_relative_order_of_other_columns() {
        let base = ColumnSet::from_saved(
            &ColumnId::ALL
                .iter()
                .enumerate()
                .map(|(i, &id)| Column::new(id, i % 3 != 1))
                .collect::<Vec<_>>(),
        );
        let visible = base.visible_count();

        for source in 0..visible {
            for target in 0..visible {
                let mut columns = base.clone();
                columns.move_visible(source, target).unwrap();

                let moved = base.visible_ids()[source];
                assert_eq!(columns.visible_ids()[target], moved);

                let others_before: Vec<_> =
                    order(&base).into_iter().filter(|&id| id != moved).collect();
                let others_after: Vec<_> =
                    order(&columns).into_iter().filter(|&id| id != moved).collect();
                assert_eq!(others_before, others_after);
                assert_eq!(columns.as_slice().len(), base.as_slice().len());
            }
        }
    }

    #[test]
    fn test_move_out_of_range_is_rejected() {
        let mut columns = set(&[(ColumnId::Name, true), (ColumnId::Size, true)]);
        let before = columns.clone();

        let err = columns.move_visible(0, 5).unwrap_err();
        assert_eq!(
            err,
            ColumnError::VisiblePositionOutOfRange {
                position: 5,
                visible: 2
            }
        );
        assert!(columns.move_visible(2, 0).is_err());
        assert_eq!(columns, before);
    }
}
