use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::model::{default_shopping_list, default_shopping_list_item, ShoppingList, State};
use crate::mutators::ListMutators;
use crate::settings::SettingsManager;
use crate::transfer::{self, TransferError};
use crate::ui::drag::{DragIntent, DragReducer, DragState};
use crate::ui::element::{ElementId, HitMap};
use crate::ui::mvi::Reducer;
use crate::ui::settings::{SettingsDialogState, SettingsIntent, SettingsReducer};
use crate::ui::status::StatusBanner;
use crate::ui::theme::Palette;
use crate::ui::transfer::{ExportView, TransferDialogState, TransferIntent, TransferReducer};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Menu,
    Items,
}

/// Column of the focused item row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Checked,
    Quantity,
    Name,
}

/// An in-progress text edit. Every change is written through the debounced
/// mutators; `original` is restored on cancel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Editing {
    pub target: ElementId,
    pub buffer: String,
    pub original: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: (u16, u16),
    breakpoint_cols: u16,
    status_timeout: Duration,
    export_dir: PathBuf,
    mutators: ListMutators,
    settings: SettingsManager,
    palette: Arc<Mutex<Palette>>,
    clipboard: Option<ClipboardHandler>,
    pane: Pane,
    menu_cursor: usize,
    item_cursor: usize,
    field: Field,
    editing: Option<Editing>,
    hit_map: HitMap,
    status: Option<StatusBanner>,
    /// Drag-to-reorder gesture (MVI pattern).
    drag: DragState,
    /// Theme picker (MVI pattern).
    settings_dialog: SettingsDialogState,
    /// Import/export modal (MVI pattern).
    transfer_dialog: TransferDialogState,
}

impl App {
    pub fn new(mutators: ListMutators, settings: SettingsManager, config: &Config) -> Self {
        let palette = Arc::new(Mutex::new(Palette::for_theme(settings.theme())));
        let applied = Arc::clone(&palette);
        settings.subscribe(move |saved| {
            *applied.lock() = Palette::for_theme(saved.theme);
        });

        let export_dir = std::env::current_dir().unwrap_or_else(|_| config.data_dir());
        let menu_cursor = mutators.state().active_list.unwrap_or(0);
        Self {
            should_quit: false,
            size: (0, 0),
            breakpoint_cols: config.ui.breakpoint_cols,
            status_timeout: config.status_timeout(),
            export_dir,
            mutators,
            settings,
            palette,
            clipboard: None,
            pane: Pane::Menu,
            menu_cursor,
            item_cursor: 0,
            field: Field::Name,
            editing: None,
            hit_map: HitMap::new(),
            status: None,
            drag: DragState::default(),
            settings_dialog: SettingsDialogState::default(),
            transfer_dialog: TransferDialogState::default(),
        }
    }

    /// Directory exported files are written to (default: working directory).
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn state(&self) -> State {
        self.mutators.state()
    }

    pub fn mutators(&self) -> &ListMutators {
        &self.mutators
    }

    pub fn palette(&self) -> Palette {
        *self.palette.lock()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the event loop. Pending debounced saves are flushed first.
    pub fn request_quit(&mut self) {
        self.mutators.flush();
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Items are laid out in a grid once the terminal reaches the breakpoint.
    pub fn is_grid(&self) -> bool {
        self.size.0 >= self.breakpoint_cols
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn item_cursor(&self) -> usize {
        self.item_cursor
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn settings_dialog(&self) -> &SettingsDialogState {
        &self.settings_dialog
    }

    pub fn transfer_dialog(&self) -> &TransferDialogState {
        &self.transfer_dialog
    }

    pub fn status(&self) -> Option<&StatusBanner> {
        self.status.as_ref()
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Replace the hit regions with those of the frame just drawn.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    pub fn show_popup(&self) -> bool {
        self.settings_dialog.is_visible() || self.transfer_dialog.is_visible()
    }

    /// Element that keyboard actions apply to.
    pub fn focused_element(&self) -> ElementId {
        let state = self.state();
        match self.pane {
            Pane::Menu => {
                if self.menu_cursor < state.shopping_lists.len() {
                    ElementId::MenuEntry(self.menu_cursor)
                } else {
                    ElementId::AddListButton
                }
            }
            Pane::Items => {
                let count = state.active().map_or(0, |list| list.items.len());
                if self.item_cursor >= count {
                    return ElementId::AddItemButton;
                }
                match self.field {
                    Field::Checked => ElementId::ItemChecked(self.item_cursor),
                    Field::Quantity => ElementId::ItemQuantity(self.item_cursor),
                    Field::Name => ElementId::ItemName(self.item_cursor),
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    /// A snapshot was written. Keeps cursors in range and drops a drag whose
    /// list changed underneath it.
    pub fn on_state_saved(&mut self) {
        let state = self.state();
        let count = state.active().map_or(0, |list| list.items.len());
        self.menu_cursor = self.menu_cursor.min(state.shopping_lists.len());
        self.item_cursor = self.item_cursor.min(count);
        let stale = matches!(&self.drag, DragState::Dragging { order, .. } if order.len() != count);
        if stale {
            self.dispatch_drag(DragIntent::Cancel);
        }
    }

    pub fn set_status_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusBanner::info(message, self.status_timeout, Instant::now()));
    }

    pub fn set_status_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(message = %message, "Status error");
        self.status = Some(StatusBanner::error(message, self.status_timeout, Instant::now()));
    }

    // ========================================================================
    // Keyboard navigation
    // ========================================================================

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Menu if self.state().active().is_some() => Pane::Items,
            _ => Pane::Menu,
        };
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let state = self.state();
        match self.pane {
            Pane::Menu => {
                // The add-list entry sits after the last list.
                let max = state.shopping_lists.len();
                self.menu_cursor = step(self.menu_cursor, delta, max);
            }
            Pane::Items => {
                let max = state.active().map_or(0, |list| list.items.len());
                self.item_cursor = step(self.item_cursor, delta, max);
            }
        }
    }

    pub fn move_field(&mut self, delta: isize) {
        const FIELDS: [Field; 3] = [Field::Checked, Field::Quantity, Field::Name];
        let current = FIELDS.iter().position(|f| *f == self.field).unwrap_or(2);
        self.field = FIELDS[step(current, delta, FIELDS.len() - 1)];
    }

    /// Enter on the focused element.
    pub fn activate_focused(&mut self) {
        let target = self.focused_element();
        self.activate(target);
    }

    /// Delete on the focused element.
    pub fn remove_focused(&mut self) {
        match self.focused_element() {
            ElementId::MenuEntry(idx) => self.remove_list(idx),
            ElementId::ItemChecked(idx)
            | ElementId::ItemQuantity(idx)
            | ElementId::ItemName(idx) => self.remove_item(idx),
            _ => {}
        }
    }

    /// Alt+Up/Down: move the focused item one place.
    pub fn shift_focused_item(&mut self, delta: isize) {
        if self.pane != Pane::Items {
            return;
        }
        let count = self.state().active().map_or(0, |list| list.items.len());
        if self.item_cursor >= count {
            return;
        }
        let dest = self.item_cursor as isize + delta;
        if dest < 0 || dest as usize >= count {
            return;
        }
        if self.mutators.move_item(self.item_cursor, dest as usize) {
            self.item_cursor = dest as usize;
        }
    }

    /// Change the quantity of the focused item by `delta`, never below 1.
    pub fn adjust_focused_quantity(&mut self, delta: i64) {
        if self.pane != Pane::Items {
            return;
        }
        let idx = self.item_cursor;
        if let Some(mut item) = self.mutators.active_item_at(idx) {
            let next = (item.quantity as i64 + delta).clamp(1, u32::MAX as i64);
            item.quantity = next as u32;
            self.mutators.set_item_at(idx, item);
        }
    }

    // ========================================================================
    // Element actions
    // ========================================================================

    /// Click or Enter on an element.
    pub fn activate(&mut self, target: ElementId) {
        match target {
            ElementId::MenuEntry(idx) => self.select_list(idx),
            ElementId::AddListButton => self.add_list(),
            ElementId::RemoveListButton(idx) => self.remove_list(idx),
            ElementId::ListName | ElementId::ItemQuantity(_) | ElementId::ItemName(_) => {
                self.begin_edit(target)
            }
            ElementId::ItemChecked(idx) => self.toggle_checked(idx),
            ElementId::ItemHandle(idx) => self.focus_item(idx, Field::Name),
            ElementId::RemoveItemButton(idx) => self.remove_item(idx),
            ElementId::AddItemButton => self.add_item(),
            ElementId::ExportButton => self.open_export(),
            ElementId::ImportButton => self.open_import(),
            ElementId::SettingsButton => self.open_settings(),
        }
    }

    pub fn select_list(&mut self, idx: usize) {
        if self.mutators.set_active_list(idx) {
            self.menu_cursor = idx;
            self.item_cursor = 0;
        }
    }

    pub fn add_list(&mut self) {
        let idx = self.mutators.add_list(default_shopping_list());
        self.menu_cursor = idx;
        self.item_cursor = 0;
        self.pane = Pane::Items;
        self.begin_edit(ElementId::ListName);
    }

    pub fn remove_list(&mut self, idx: usize) {
        if self.mutators.remove_list(idx) {
            let state = self.state();
            self.menu_cursor = state.active_list.unwrap_or(0);
            self.item_cursor = 0;
            if state.active().is_none() {
                self.pane = Pane::Menu;
            }
        }
    }

    pub fn add_item(&mut self) {
        let Some(list_idx) = self.state().active_list else {
            return;
        };
        if self.mutators.add_item(list_idx, default_shopping_list_item()) {
            let count = self.state().active().map_or(0, |list| list.items.len());
            self.focus_item(count.saturating_sub(1), Field::Name);
            self.begin_edit(ElementId::ItemName(self.item_cursor));
        }
    }

    pub fn remove_item(&mut self, idx: usize) {
        if self.mutators.remove_item(idx) {
            let count = self.state().active().map_or(0, |list| list.items.len());
            self.item_cursor = self.item_cursor.min(count);
        }
    }

    pub fn toggle_checked(&mut self, idx: usize) {
        if let Some(mut item) = self.mutators.active_item_at(idx) {
            item.checked = !item.checked;
            self.mutators.set_item_at(idx, item);
        }
    }

    fn focus_item(&mut self, idx: usize, field: Field) {
        self.pane = Pane::Items;
        self.item_cursor = idx;
        self.field = field;
    }

    // ========================================================================
    // Text editing
    // ========================================================================

    pub fn begin_edit(&mut self, target: ElementId) {
        let state = self.state();
        let Some(list) = state.active() else {
            return;
        };
        let original = match target {
            ElementId::ListName => list.name.clone(),
            ElementId::ItemName(idx) => match list.items.get(idx) {
                Some(item) => item.name.clone(),
                None => return,
            },
            ElementId::ItemQuantity(idx) => match list.items.get(idx) {
                Some(item) => item.quantity.to_string(),
                None => return,
            },
            _ => return,
        };
        match target {
            ElementId::ItemName(idx) => self.focus_item(idx, Field::Name),
            ElementId::ItemQuantity(idx) => self.focus_item(idx, Field::Quantity),
            _ => {}
        }
        self.editing = Some(Editing {
            target,
            buffer: original.clone(),
            original,
        });
    }

    pub fn edit_input(&mut self, ch: char) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };
        if matches!(editing.target, ElementId::ItemQuantity(_)) && !ch.is_ascii_digit() {
            return;
        }
        editing.buffer.push(ch);
        self.write_edit();
    }

    pub fn edit_paste(&mut self, text: &str) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };
        let accepted: String = if matches!(editing.target, ElementId::ItemQuantity(_)) {
            text.chars().filter(char::is_ascii_digit).collect()
        } else {
            text.chars().filter(|c| !c.is_control()).collect()
        };
        editing.buffer.push_str(&accepted);
        self.write_edit();
    }

    pub fn edit_backspace(&mut self) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };
        editing.buffer.pop();
        self.write_edit();
    }

    /// Leave edit mode keeping what was typed. A blank list name or an
    /// invalid quantity restores the value the edit started from.
    pub fn finish_edit(&mut self) {
        let Some(editing) = self.editing.take() else {
            return;
        };
        let accepted = match editing.target {
            ElementId::ListName => !editing.buffer.trim().is_empty(),
            ElementId::ItemQuantity(_) => parse_quantity(&editing.buffer).is_some(),
            _ => true,
        };
        if !accepted {
            self.apply_edit(editing.target, &editing.original);
        }
    }

    /// Leave edit mode and restore the value the edit started from.
    pub fn cancel_edit(&mut self) {
        if let Some(editing) = self.editing.take() {
            self.apply_edit(editing.target, &editing.original);
        }
    }

    fn write_edit(&mut self) {
        if let Some(editing) = self.editing.clone() {
            self.apply_edit(editing.target, &editing.buffer);
        }
    }

    fn apply_edit(&mut self, target: ElementId, text: &str) {
        match target {
            ElementId::ListName => {
                self.mutators.rename_active_list(text);
            }
            ElementId::ItemName(idx) => {
                if let Some(mut item) = self.mutators.active_item_at(idx) {
                    item.name = text.to_string();
                    self.mutators.set_item_at(idx, item);
                }
            }
            ElementId::ItemQuantity(idx) => {
                let Some(quantity) = parse_quantity(text) else {
                    return;
                };
                if let Some(mut item) = self.mutators.active_item_at(idx) {
                    item.quantity = quantity;
                    self.mutators.set_item_at(idx, item);
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Mouse and drag (MVI pattern)
    // ========================================================================

    fn dispatch_drag(&mut self, intent: DragIntent) {
        dispatch_mvi!(self, drag, DragReducer, intent);
    }

    /// Left button pressed at a terminal cell.
    pub fn on_mouse_down(&mut self, column: u16, row: u16) {
        if self.editing.is_some() {
            self.finish_edit();
        }
        let Some((target, _)) = self.hit_map.hit(column, row) else {
            return;
        };
        match target {
            ElementId::ItemHandle(source) => {
                let item_count = self.state().active().map_or(0, |list| list.items.len());
                self.focus_item(source, Field::Name);
                self.dispatch_drag(DragIntent::Start { source, item_count });
            }
            other => self.activate(other),
        }
    }

    /// Pointer moved with the left button held.
    pub fn on_mouse_drag(&mut self, column: u16, row: u16) {
        if !self.drag.is_dragging() {
            return;
        }
        let Some((hit, area)) = self.hit_map.hit(column, row) else {
            return;
        };
        let Some(target) = hit.item_index() else {
            return;
        };
        let cell = self.hit_map.item_cell(target).unwrap_or(area);
        let after = if self.is_grid() {
            u32::from(column.saturating_sub(cell.x)) * 2 >= u32::from(cell.width)
        } else {
            u32::from(row.saturating_sub(cell.y)) * 2 >= u32::from(cell.height)
        };
        self.dispatch_drag(DragIntent::Over { target, after });
    }

    /// Left button released. Commits the reorder, if any.
    pub fn on_mouse_up(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        let commit = self.drag.drop_move();
        self.dispatch_drag(DragIntent::End);
        if let Some((source, target)) = commit {
            if self.mutators.move_item(source, target) {
                self.item_cursor = target;
            }
        }
    }

    pub fn cancel_drag(&mut self) {
        self.dispatch_drag(DragIntent::Cancel);
    }

    // ========================================================================
    // Settings dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings_dialog, SettingsReducer, intent);
    }

    pub fn open_settings(&mut self) {
        let current = self.settings.theme();
        self.dispatch_settings(SettingsIntent::Load { current });
    }

    /// Save the focused theme. The palette follows through the settings
    /// subscription.
    pub fn apply_focused_theme(&mut self) {
        if let Some(theme) = self.settings_dialog.focused_theme() {
            self.settings.set_theme(theme);
            self.dispatch_settings(SettingsIntent::Applied);
        }
    }

    // ========================================================================
    // Import / export (MVI pattern)
    // ========================================================================

    pub fn dispatch_transfer(&mut self, intent: TransferIntent) {
        dispatch_mvi!(self, transfer_dialog, TransferReducer, intent);
    }

    pub fn open_export(&mut self) {
        let state = self.state();
        let Some(list) = state.active() else {
            self.set_status_error("No list selected");
            return;
        };
        let json = match transfer::export_list(list) {
            Ok(json) => json,
            Err(e) => {
                self.set_status_error(e.to_string());
                return;
            }
        };
        let qr = transfer::export_list_compact(list)
            .and_then(|compact| transfer::render_qr(&compact))
            .map_err(|e| tracing::warn!(error = %e, "List does not fit in a QR code"))
            .ok();
        self.dispatch_transfer(TransferIntent::OpenExport {
            list_name: list.name.clone(),
            json,
            qr,
        });
    }

    pub fn open_import(&mut self) {
        self.dispatch_transfer(TransferIntent::OpenImport);
    }

    pub fn copy_export_to_clipboard(&mut self) {
        let Some(json) = self.transfer_dialog.export_json().map(str::to_string) else {
            return;
        };
        let result = self.with_clipboard(|clipboard| Ok(clipboard.set_text(&json)?));
        match result {
            Ok(()) => self.set_status_info("Copied list to clipboard"),
            Err(e) => self.set_status_error(e.to_string()),
        }
    }

    /// Write the exported list next to the working directory: JSON in the
    /// JSON view, PNG in the QR view.
    pub fn save_export(&mut self) -> Option<PathBuf> {
        let TransferDialogState::Export { view, .. } = &self.transfer_dialog else {
            return None;
        };
        let view = *view;
        let state = self.state();
        let list = state.active()?;
        let result = match view {
            ExportView::Json => transfer::write_list_file(list, &self.export_dir),
            ExportView::Qr => {
                let path = self
                    .export_dir
                    .join(transfer::export_filename(&list.name))
                    .with_extension("png");
                transfer::export_list_compact(list)
                    .and_then(|compact| transfer::write_qr_png(&compact, &path))
                    .map(|()| path)
            }
        };
        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "List exported");
                self.set_status_info(format!("Saved {}", path.display()));
                Some(path)
            }
            Err(e) => {
                self.set_status_error(e.to_string());
                None
            }
        }
    }

    /// Import what was typed or pasted: JSON text, a `.json` file path, or
    /// the path of a QR code image.
    pub fn submit_import(&mut self) -> bool {
        let Some(input) = self.transfer_dialog.import_input().map(str::trim) else {
            return false;
        };
        let input = input.to_string();
        match import_from_input(&input) {
            Ok(list) => {
                let name = list.name.clone();
                let idx = self.mutators.add_list(list);
                self.menu_cursor = idx;
                self.item_cursor = 0;
                self.dispatch_transfer(TransferIntent::Close);
                tracing::info!(list = %name, "List imported");
                self.set_status_info(format!("Imported '{name}'"));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Import rejected");
                let message = e.to_string();
                self.dispatch_transfer(TransferIntent::Failed(message.clone()));
                self.set_status_error(message);
                false
            }
        }
    }

    /// Ctrl+V in the import dialog: clipboard text, or a QR code in a
    /// clipboard image.
    pub fn paste_clipboard_into_import(&mut self) {
        if !self.transfer_dialog.is_import() {
            return;
        }
        let text = self.with_clipboard(|clipboard| match clipboard.get_text() {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            _ => {
                let image = clipboard.get_image()?;
                transfer::decode_qr_rgba(image.width, image.height, image.rgba)
            }
        });
        match text {
            Ok(text) => self.dispatch_transfer(TransferIntent::Paste(text)),
            Err(e) => self.set_status_error(e.to_string()),
        }
    }

    /// Bracketed paste from the terminal.
    pub fn on_paste(&mut self, text: &str) {
        if self.transfer_dialog.is_import() {
            self.dispatch_transfer(TransferIntent::Paste(text.to_string()));
        } else if self.editing.is_some() {
            self.edit_paste(text);
        }
    }

    fn with_clipboard<R, F>(&mut self, op: F) -> Result<R, TransferError>
    where
        F: FnOnce(&mut ClipboardHandler) -> Result<R, TransferError>,
    {
        if self.clipboard.is_none() {
            self.clipboard = Some(ClipboardHandler::new()?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => op(clipboard),
            None => Err(TransferError::Validation("clipboard unavailable".to_string())),
        }
    }
}

fn import_from_input(input: &str) -> Result<ShoppingList, TransferError> {
    if input.starts_with('{') {
        return transfer::import_list(input);
    }
    let path = Path::new(input);
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"));
    if is_image {
        let text = transfer::decode_qr_image(path)?;
        transfer::import_list(&text)
    } else {
        transfer::read_list_file(path)
    }
}

/// `current + delta`, clamped to `0..=max`.
/// Quantities are positive integers.
fn parse_quantity(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|q| *q >= 1)
}

fn step(current: usize, delta: isize, max: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, max as isize) as usize
}
