//! ListingCommandHandler - Coordinates listing commands
//!
//! Owns the ports of one listing and routes each command to its use case.

use tracing::debug;

use crate::application::ports::{ClipboardPort, DpiContext, HostPort, ListingPort, MenuPort, ShellPort};
use crate::application::use_cases::{
    ContextMenuOutcome, ContextMenuUseCase, CopyPathsUseCase, MenuAnchor, OpenItemsUseCase,
    PasteOutcome, PasteUseCase, ReorderColumnsUseCase, SelectSimilarUseCase,
};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CommandId, DispositionTable, KeyState};

/// Listing command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingCommand {
    /// A header was dragged from one visible position to another
    ReorderColumns { source: usize, target: usize },
    /// Show the context menu
    ShowContextMenu { anchor: MenuAnchor, keys: KeyState },
    /// Open the whole selection
    OpenSelected { keys: KeyState },
    /// Open one item
    OpenItem { index: usize, keys: KeyState },
    /// Property sheet of the selection
    ShowSelectionProperties,
    /// Property sheet of one item
    ShowItemProperties(usize),
    /// Paste the clipboard into the current directory
    Paste,
    /// Copy full paths of the selection
    CopyItemPaths,
    /// Copy UNC paths of the selection
    CopyUniversalPaths,
    /// Select every item of the same type as the first selected one
    SelectSimilar,
    /// Re-read the directory
    Refresh,
}

impl ListingCommand {
    /// Commands from the main menu or toolbar that act on the listing
    pub fn from_menu_command(id: CommandId) -> Option<ListingCommand> {
        match id {
            CommandId::OPEN => Some(ListingCommand::OpenSelected {
                keys: KeyState::NONE,
            }),
            CommandId::PASTE => Some(ListingCommand::Paste),
            CommandId::COPY_ITEM_PATH => Some(ListingCommand::CopyItemPaths),
            CommandId::COPY_UNIVERSAL_PATH => Some(ListingCommand::CopyUniversalPaths),
            CommandId::SELECT_SIMILAR => Some(ListingCommand::SelectSimilar),
            CommandId::PROPERTIES => Some(ListingCommand::ShowSelectionProperties),
            CommandId::REFRESH => Some(ListingCommand::Refresh),
            _ => None,
        }
    }
}

/// Handler for listing commands
pub struct ListingCommandHandler<L, C, S, M, H>
where
    L: ListingPort,
    C: ClipboardPort,
    S: ShellPort,
    M: MenuPort,
    H: HostPort,
{
    listing: L,
    clipboard: C,
    shell: S,
    menus: M,
    host: H,
    dpi: Box<dyn DpiContext>,
    dispositions: DispositionTable,
    last_menu: Option<ContextMenuOutcome>,
}

impl<L, C, S, M, H> ListingCommandHandler<L, C, S, M, H>
where
    L: ListingPort,
    C: ClipboardPort,
    S: ShellPort,
    M: MenuPort,
    H: HostPort,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        listing: L,
        clipboard: C,
        shell: S,
        menus: M,
        host: H,
        dpi: Box<dyn DpiContext>,
        dispositions: DispositionTable,
    ) -> Self {
        Self {
            listing,
            clipboard,
            shell,
            menus,
            host,
            dpi,
            dispositions,
            last_menu: None,
        }
    }

    /// Handle a command
    pub fn handle(&mut self, command: ListingCommand) -> Result<(), DomainError> {
        debug!(?command, "listing command");
        match command {
            ListingCommand::ReorderColumns { source, target } => {
                ReorderColumnsUseCase::new(&mut self.listing).execute(source, target)?;
            }
            ListingCommand::ShowContextMenu { anchor, keys } => {
                let outcome = ContextMenuUseCase {
                    listing: &self.listing,
                    clipboard: &self.clipboard,
                    shell: &mut self.shell,
                    menus: &mut self.menus,
                    host: &mut self.host,
                    dpi: self.dpi.as_ref(),
                    dispositions: &self.dispositions,
                }
                .execute(anchor, keys);

                let follow_up = match &outcome {
                    ContextMenuOutcome::Listing(command) => Some(command.clone()),
                    _ => None,
                };
                self.last_menu = Some(outcome);
                if let Some(command) = follow_up {
                    self.handle(command)?;
                }
            }
            ListingCommand::OpenSelected { keys } => {
                let disposition = self.dispositions.resolve(keys);
                OpenItemsUseCase::new(&self.listing, &mut self.host).open_all_selected(disposition);
            }
            ListingCommand::OpenItem { index, keys } => {
                let disposition = self.dispositions.resolve(keys);
                OpenItemsUseCase::new(&self.listing, &mut self.host).open_item(index, disposition)?;
            }
            ListingCommand::ShowSelectionProperties => {
                let paths = self.listing.selection().paths();
                self.show_properties(&paths)?;
            }
            ListingCommand::ShowItemProperties(index) => {
                let item = self
                    .listing
                    .item(index)
                    .ok_or(DomainError::ItemNotFound(index))?;
                self.show_properties(&[item.full_path])?;
            }
            ListingCommand::Paste => {
                let outcome =
                    PasteUseCase::new(&self.listing, &mut self.clipboard, &mut self.shell).execute();
                if outcome == PasteOutcome::Failed {
                    return Err(DomainError::Platform("paste failed".to_string()));
                }
            }
            ListingCommand::CopyItemPaths => {
                CopyPathsUseCase::new(&self.listing, &mut self.clipboard)
                    .copy_item_paths()
                    .map_err(|e| DomainError::Platform(e.to_string()))?;
            }
            ListingCommand::CopyUniversalPaths => {
                CopyPathsUseCase::new(&self.listing, &mut self.clipboard)
                    .copy_universal_paths(&self.shell)
                    .map_err(|e| DomainError::Platform(e.to_string()))?;
            }
            ListingCommand::SelectSimilar => {
                SelectSimilarUseCase::new(&mut self.listing).execute();
            }
            ListingCommand::Refresh => self.listing.refresh(),
        }
        Ok(())
    }

    fn show_properties(&mut self, items: &[std::path::PathBuf]) -> Result<(), DomainError> {
        let directory = self.listing.directory();
        self.shell
            .show_properties(&directory, items)
            .map_err(|e| DomainError::Platform(e.to_string()))
    }

    /// Outcome of the most recent context menu
    pub fn last_menu(&self) -> Option<&ContextMenuOutcome> {
        self.last_menu.as_ref()
    }

    pub fn listing(&self) -> &L {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut L {
        &mut self.listing
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn dispositions(&self) -> &DispositionTable {
        &self.dispositions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FixedDpi;
    use crate::application::testing::{FakeClipboard, FakeHost, FakeListing, FakeMenu, FakeShell};
    use crate::domain::entities::ColumnId;
    use crate::domain::errors::ColumnError;
    use crate::domain::value_objects::{OpenDisposition, Point};

    type Handler = ListingCommandHandler<FakeListing, FakeClipboard, FakeShell, FakeMenu, FakeHost>;

    fn handler(listing: FakeListing) -> Handler {
        ListingCommandHandler::new(
            listing,
            FakeClipboard::default(),
            FakeShell::default(),
            FakeMenu::default(),
            FakeHost::default(),
            Box::new(FixedDpi::default()),
            DispositionTable::new(true),
        )
    }

    fn listing() -> FakeListing {
        FakeListing::new("/data")
            .with_file("a.txt")
            .with_dir("docs")
            .with_file("b.TXT")
    }

    #[test]
    fn test_reorder_command() {
        let mut handler = handler(listing());

        handler
            .handle(ListingCommand::ReorderColumns { source: 3, target: 0 })
            .unwrap();

        assert_eq!(handler.listing().columns.visible_ids()[0], ColumnId::DateModified);
        assert_eq!(handler.listing().refreshes, 1);
    }

    #[test]
    fn test_reorder_out_of_range_is_an_error() {
        let mut handler = handler(listing());

        let err = handler
            .handle(ListingCommand::ReorderColumns { source: 4, target: 0 })
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Column(ColumnError::VisiblePositionOutOfRange { position: 4, .. })
        ));
    }

    #[test]
    fn test_open_uses_configured_table() {
        let mut handler = handler(listing().select(&[1]));

        handler
            .handle(ListingCommand::OpenSelected {
                keys: KeyState::ctrl(),
            })
            .unwrap();

        let path = handler.listing().path_of(1);
        assert_eq!(handler.host.opened, vec![(path, OpenDisposition::ForegroundTab)]);
    }

    #[test]
    fn test_item_properties() {
        let mut handler = handler(listing());

        handler.handle(ListingCommand::ShowItemProperties(2)).unwrap();
        assert!(matches!(
            handler.handle(ListingCommand::ShowItemProperties(5)),
            Err(DomainError::ItemNotFound(5))
        ));

        let path = handler.listing().path_of(2);
        assert_eq!(handler.shell.properties, vec![(std::path::PathBuf::from("/data"), vec![path])]);
    }

    #[test]
    fn test_menu_commands_map_to_listing_commands() {
        assert_eq!(
            ListingCommand::from_menu_command(CommandId::COPY_ITEM_PATH),
            Some(ListingCommand::CopyItemPaths)
        );
        assert_eq!(
            ListingCommand::from_menu_command(CommandId::SELECT_SIMILAR),
            Some(ListingCommand::SelectSimilar)
        );
        assert_eq!(ListingCommand::from_menu_command(CommandId::DELETE), None);
    }

    #[test]
    fn test_select_similar_then_copy_paths() {
        let mut handler = handler(listing().select(&[0]));

        handler.handle(ListingCommand::SelectSimilar).unwrap();
        handler.handle(ListingCommand::CopyItemPaths).unwrap();

        assert_eq!(handler.listing().selected_indices(), vec![0, 2]);
        assert_eq!(handler.clipboard.texts.len(), 1);
    }

    #[test]
    fn test_context_menu_outcome_is_kept() {
        let mut handler = handler(listing());

        handler
            .handle(ListingCommand::ShowContextMenu {
                anchor: MenuAnchor::Cursor(Point::new(3, 4)),
                keys: KeyState::NONE,
            })
            .unwrap();

        assert_eq!(handler.last_menu(), Some(&ContextMenuOutcome::Dismissed));
    }

    #[test]
    fn test_menu_paste_runs_paste() {
        let mut handler = ListingCommandHandler::new(
            listing().select(&[0]),
            FakeClipboard {
                available: true,
                paste_normal: true,
                ..Default::default()
            },
            FakeShell::default(),
            FakeMenu::choosing(CommandId::PASTE),
            FakeHost::default(),
            Box::new(FixedDpi::default()),
            DispositionTable::default(),
        );

        handler
            .handle(ListingCommand::ShowContextMenu {
                anchor: MenuAnchor::Cursor(Point::new(0, 0)),
                keys: KeyState::NONE,
            })
            .unwrap();

        assert_eq!(
            handler.shell.verbs,
            vec![(std::path::PathBuf::from("/data"), Vec::new(), "paste".to_string())]
        );
        assert!(handler.host.commands.is_empty());
        assert_eq!(
            handler.last_menu(),
            Some(&ContextMenuOutcome::Listing(ListingCommand::Paste))
        );
    }

    #[test]
    fn test_menu_copy_item_path_writes_clipboard() {
        let mut handler = handler(listing().select(&[2]));
        handler.menus = FakeMenu::choosing(CommandId::COPY_ITEM_PATH);

        handler
            .handle(ListingCommand::ShowContextMenu {
                anchor: MenuAnchor::Keyboard,
                keys: KeyState::NONE,
            })
            .unwrap();

        let expected = handler.listing().path_of(2).to_string_lossy().into_owned();
        assert_eq!(handler.clipboard.texts, vec![expected]);
        assert!(handler.host.commands.is_empty());
    }
}
