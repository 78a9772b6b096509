use crate::ui::app::{App, Pane};
use crate::ui::element::ElementId;
use crate::ui::settings::SettingsIntent;
use crate::ui::transfer::TransferIntent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.drag().is_dragging() {
        if key.code == KeyCode::Esc {
            app.cancel_drag();
        }
        return;
    }

    if app.settings_dialog().is_visible() {
        handle_settings_key(app, key);
        return;
    }

    if app.transfer_dialog().is_visible() {
        handle_transfer_key(app, key);
        return;
    }

    if app.editing().is_some() {
        handle_edit_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'e') {
        app.open_export();
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.open_import();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.open_settings();
        return;
    }

    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Up if alt => app.shift_focused_item(-1),
        KeyCode::Down if alt => app.shift_focused_item(1),
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Left if app.pane() == Pane::Items => app.move_field(-1),
        KeyCode::Right if app.pane() == Pane::Items => app.move_field(1),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_pane(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Char(' ') if app.pane() == Pane::Items => {
            app.toggle_checked(app.item_cursor());
        }
        KeyCode::Delete => app.remove_focused(),
        KeyCode::Char('+') => app.adjust_focused_quantity(1),
        KeyCode::Char('-') => app.adjust_focused_quantity(-1),
        KeyCode::Char('a') => match app.pane() {
            Pane::Menu => app.add_list(),
            Pane::Items => app.add_item(),
        },
        KeyCode::Char('r') => app.begin_edit(ElementId::ListName),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => app.finish_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_input(ch)
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_settings(SettingsIntent::Close),
        KeyCode::Up => app.dispatch_settings(SettingsIntent::MoveUp),
        KeyCode::Down => app.dispatch_settings(SettingsIntent::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => app.apply_focused_theme(),
        _ => {}
    }
}

fn handle_transfer_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.dispatch_transfer(TransferIntent::Close);
        return;
    }

    if !app.transfer_dialog().is_import() {
        match key.code {
            KeyCode::Tab => app.dispatch_transfer(TransferIntent::ToggleView),
            KeyCode::Char('c') => app.copy_export_to_clipboard(),
            KeyCode::Char('s') => {
                app.save_export();
            }
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v') {
        app.paste_clipboard_into_import();
        return;
    }
    match key.code {
        KeyCode::Enter => {
            app.submit_import();
        }
        KeyCode::Backspace => app.dispatch_transfer(TransferIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_transfer(TransferIntent::Input(ch))
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_popup() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_mouse_down(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.on_mouse_drag(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.on_mouse_up(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}
