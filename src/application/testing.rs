//! Recording port fakes shared by the application tests

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::application::ports::{
    ClipboardError, ClipboardPort, HostPort, ListingPort, MenuPort, PasteMode, ShellError,
    ShellMenuRequest, ShellPort,
};
use crate::domain::entities::{ColumnSet, ListItem, MenuModel};
use crate::domain::value_objects::{CommandId, OpenDisposition, Point, Rect, ViewMode};

/// In-memory listing
pub struct FakeListing {
    pub directory: PathBuf,
    pub items: Vec<ListItem>,
    pub selected: BTreeSet<usize>,
    pub focused: Option<usize>,
    pub columns: ColumnSet,
    pub refreshes: usize,
    pub can_copy: bool,
    pub can_cut: bool,
    pub view_mode: ViewMode,
    /// Added to client points to get screen points
    pub screen_offset: Point,
}

impl FakeListing {
    pub fn new(directory: &str) -> Self {
        Self {
            directory: PathBuf::from(directory),
            items: Vec::new(),
            selected: BTreeSet::new(),
            focused: None,
            columns: ColumnSet::default(),
            refreshes: 0,
            can_copy: true,
            can_cut: true,
            view_mode: ViewMode::Details,
            screen_offset: Point::new(100, 200),
        }
    }

    pub fn with_file(mut self, name: &str) -> Self {
        let index = self.items.len();
        let path = self.directory.join(name);
        self.items.push(ListItem::file(index, path));
        self
    }

    pub fn with_dir(mut self, name: &str) -> Self {
        let index = self.items.len();
        let path = self.directory.join(name);
        self.items.push(ListItem::directory(index, path));
        self
    }

    pub fn select(mut self, indices: &[usize]) -> Self {
        self.selected.extend(indices.iter().copied());
        self
    }

    pub fn path_of(&self, index: usize) -> PathBuf {
        self.items[index].full_path.clone()
    }
}

impl ListingPort for FakeListing {
    fn columns(&self) -> ColumnSet {
        self.columns.clone()
    }

    fn set_columns(&mut self, columns: ColumnSet) {
        self.columns = columns;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn directory(&self) -> PathBuf {
        self.directory.clone()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<ListItem> {
        self.items.get(index).cloned()
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    fn focused_selected_index(&self) -> Option<usize> {
        self.focused.filter(|f| self.selected.contains(f))
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if selected {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    fn item_icon_rect(&self, index: usize) -> Rect {
        // 32px icons stacked vertically, 40px rows
        Rect::from_pos_size(4, index as i32 * 40, 32, 32)
    }

    fn client_to_screen(&self, point: Point) -> Point {
        Point::new(point.x + self.screen_offset.x, point.y + self.screen_offset.y)
    }

    fn can_copy_selection(&self) -> bool {
        self.can_copy && !self.selected.is_empty()
    }

    fn can_cut_selection(&self) -> bool {
        self.can_cut && !self.selected.is_empty()
    }

    fn view_mode(&self) -> ViewMode {
        self.view_mode
    }
}

/// Clipboard with scripted predicates.
///
/// `paste_normal`/`paste_shortcut` stand for the shell drop target's answer;
/// `files` is the file list a direct copy works from.
#[derive(Default)]
pub struct FakeClipboard {
    pub available: bool,
    pub paste_normal: bool,
    pub paste_shortcut: bool,
    pub files: Vec<PathBuf>,
    pub texts: Vec<String>,
    pub copied_into: Vec<PathBuf>,
}

impl ClipboardPort for FakeClipboard {
    fn has_data(&self) -> bool {
        self.available
    }

    fn can_paste(&self, _directory: &Path, mode: PasteMode) -> bool {
        self.available
            && match mode {
                PasteMode::Normal => self.paste_normal,
                PasteMode::Shortcut => self.paste_shortcut,
            }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.texts.push(text.to_string());
        Ok(())
    }

    fn copy_files_into(&mut self, destination: &Path) -> Result<(), ClipboardError> {
        if !self.available || self.files.is_empty() {
            return Err(ClipboardError::NoFileData);
        }
        self.copied_into.push(destination.to_path_buf());
        Ok(())
    }
}

/// Shell that records every request
#[derive(Default)]
pub struct FakeShell {
    pub menus: Vec<ShellMenuRequest>,
    pub verbs: Vec<(PathBuf, Vec<PathBuf>, String)>,
    pub properties: Vec<(PathBuf, Vec<PathBuf>)>,
    /// (local prefix, UNC prefix)
    pub unc_mapping: Option<(String, String)>,
}

impl ShellPort for FakeShell {
    fn show_context_menu(&mut self, request: &ShellMenuRequest) -> Result<(), ShellError> {
        self.menus.push(request.clone());
        Ok(())
    }

    fn execute_verb(
        &mut self,
        directory: &Path,
        items: &[PathBuf],
        verb: &str,
    ) -> Result<(), ShellError> {
        self.verbs
            .push((directory.to_path_buf(), items.to_vec(), verb.to_string()));
        Ok(())
    }

    fn show_properties(&mut self, directory: &Path, items: &[PathBuf]) -> Result<(), ShellError> {
        self.properties
            .push((directory.to_path_buf(), items.to_vec()));
        Ok(())
    }

    fn universal_name(&self, path: &Path) -> Option<String> {
        let (local, unc) = self.unc_mapping.as_ref()?;
        let path = path.to_string_lossy();
        path.strip_prefix(local.as_str())
            .map(|rest| format!("{}{}", unc, rest))
    }
}

/// Menu that returns a scripted choice and keeps what it was shown
#[derive(Default)]
pub struct FakeMenu {
    pub choice: Option<CommandId>,
    pub shown: Vec<(MenuModel, Point)>,
}

impl FakeMenu {
    pub fn choosing(command: CommandId) -> Self {
        Self {
            choice: Some(command),
            shown: Vec::new(),
        }
    }

    pub fn last_menu(&self) -> &MenuModel {
        &self.shown.last().expect("no menu shown").0
    }

    pub fn last_point(&self) -> Point {
        self.shown.last().expect("no menu shown").1
    }
}

impl MenuPort for FakeMenu {
    fn track_popup(&mut self, menu: &MenuModel, at: Point) -> Option<CommandId> {
        self.shown.push((menu.clone(), at));
        self.choice
    }
}

/// Host that records opens and dispatched commands
#[derive(Default)]
pub struct FakeHost {
    pub opened: Vec<(PathBuf, OpenDisposition)>,
    pub commands: Vec<CommandId>,
    pub focus_changes: usize,
    pub menu_selects: Vec<(u32, u32)>,
}

impl HostPort for FakeHost {
    fn open_item(&mut self, path: &Path, disposition: OpenDisposition) {
        self.opened.push((path.to_path_buf(), disposition));
    }

    fn dispatch_command(&mut self, command: CommandId) {
        self.commands.push(command);
    }

    fn focus_changed(&mut self) {
        self.focus_changes += 1;
    }

    fn menu_select(&mut self, item: u32, flags: u32) {
        self.menu_selects.push((item, flags));
    }
}
