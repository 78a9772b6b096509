use crate::model::Theme;
use crate::ui::app::{App, Pane};
use crate::ui::element::{ElementId, HitMap};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, item_cells, layout_regions, split_body};
use crate::ui::settings::SettingsDialogState;
use crate::ui::theme::Palette;
use crate::ui::transfer::{ExportView, TransferDialogState};
use crate::ui::view::{render_all, DetailView, ItemRow, MenuEntry};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Lines per item cell: border, content, border.
const ITEM_CELL_HEIGHT: u16 = 3;
/// Item columns in the wide layout.
const GRID_COLUMNS: u16 = 2;
const REMOVE_LABEL: &str = " ✕ ";
const CARET: &str = "▏";

/// Draw the whole screen and return the regions that accept clicks.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> HitMap {
    let palette = app.palette();
    let area = frame.area();
    let mut hits = HitMap::new();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let (header, body, footer) = layout_regions(area);
    let (header_widget, buttons) = Header::new(palette).widget(header);
    frame.render_widget(header_widget, header);
    for (rect, id) in buttons {
        hits.register(rect, id);
    }

    let view = render_all(&app.state());
    let (menu_area, detail_area) = split_body(body);
    draw_menu(frame, menu_area, &view.menu, app, &palette, &mut hits);
    draw_detail(frame, detail_area, &view.detail, app, &palette, &mut hits);

    frame.render_widget(Footer::new(palette).widget(footer, app.status()), footer);

    if app.settings_dialog().is_visible() {
        draw_settings_dialog(frame, body, app.settings_dialog(), &palette);
    } else if app.transfer_dialog().is_visible() {
        draw_transfer_dialog(frame, body, app.transfer_dialog(), &palette);
    }

    hits
}

fn draw_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    menu: &[MenuEntry],
    app: &App,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let focused = app.pane() == Pane::Menu;
    let block = Block::default()
        .title(Span::styled(" Lists ", Style::default().fg(palette.accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { palette.text } else { palette.border }));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let offset = app
        .menu_cursor()
        .saturating_sub(inner.height.saturating_sub(1) as usize);
    let mut lines = Vec::new();
    for (row, (position, entry)) in menu.iter().enumerate().skip(offset).enumerate() {
        if row >= inner.height as usize {
            break;
        }
        let y = inner.y + row as u16;
        let line_rect = Rect::new(inner.x, y, inner.width, 1);
        let is_cursor = focused && position == app.menu_cursor();
        let line = match entry {
            MenuEntry::List { idx, name, active } => {
                let name_width = inner.width.saturating_sub(REMOVE_LABEL.chars().count() as u16);
                hits.register(Rect::new(inner.x, y, name_width, 1), ElementId::MenuEntry(*idx));
                hits.register(
                    Rect::new(inner.x + name_width, y, inner.width - name_width, 1),
                    ElementId::RemoveListButton(*idx),
                );
                let mut name_style = Style::default().fg(palette.text);
                if *active {
                    name_style = name_style.fg(palette.accent).add_modifier(Modifier::BOLD);
                }
                let marker = if *active { "▸ " } else { "  " };
                let label = fit(&format!("{marker}{name}"), name_width as usize);
                Line::from(vec![
                    Span::styled(label, name_style),
                    Span::styled(REMOVE_LABEL, Style::default().fg(palette.muted)),
                ])
            }
            MenuEntry::AddList => {
                hits.register(line_rect, ElementId::AddListButton);
                Line::from(Span::styled("+ New list", Style::default().fg(palette.muted)))
            }
        };
        lines.push(if is_cursor {
            line.style(Style::default().bg(palette.highlight))
        } else {
            line
        });
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    detail: &DetailView,
    app: &App,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    let DetailView::Shown { name, rows } = detail else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No list selected. Press 'a' in the menu to create one.",
                Style::default().fg(palette.muted),
            )),
        ]);
        frame.render_widget(hint, inner);
        return;
    };

    let focused = app.focused_element();
    let items_focused = app.pane() == Pane::Items;

    // List name.
    let name_rect = Rect::new(inner.x, inner.y, inner.width, 1);
    hits.register(name_rect, ElementId::ListName);
    let name_text = edited_text(app, ElementId::ListName).unwrap_or_else(|| name.clone());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                name_text,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ])),
        name_rect,
    );

    // Add-item button.
    let add_rect = Rect::new(inner.x, inner.y + 1, inner.width.min(14), 1);
    hits.register(add_rect, ElementId::AddItemButton);
    let mut add_style = Style::default().fg(palette.muted);
    if items_focused && focused == ElementId::AddItemButton {
        add_style = add_style.bg(palette.highlight);
    }
    frame.render_widget(Paragraph::new(Span::styled(" + Add item", add_style)), add_rect);

    let items_area = Rect::new(
        inner.x,
        inner.y + 2,
        inner.width,
        inner.height.saturating_sub(2),
    );
    let columns = if app.is_grid() { GRID_COLUMNS } else { 1 };
    let order = app.drag().visual_order(rows.len());

    // Scroll so the row holding the cursor stays visible.
    let visible_rows = (items_area.height / ITEM_CELL_HEIGHT).max(1) as usize;
    let cursor_position = order
        .iter()
        .position(|idx| *idx == app.item_cursor())
        .unwrap_or(0);
    let first_row = (cursor_position / columns as usize).saturating_sub(visible_rows - 1);
    let skip = first_row * columns as usize;

    let shown: Vec<&ItemRow> = order
        .iter()
        .skip(skip)
        .filter_map(|idx| rows.get(*idx))
        .collect();
    let cells = item_cells(items_area, shown.len(), columns, ITEM_CELL_HEIGHT);
    for (row, cell) in shown.into_iter().zip(cells) {
        draw_item(frame, cell, row, app, focused, palette, hits);
    }
}

fn draw_item(
    frame: &mut Frame<'_>,
    cell: Rect,
    row: &ItemRow,
    app: &App,
    focused: ElementId,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let idx = row.idx;
    let dragged = app.drag().source() == Some(idx);
    let row_focused = app.pane() == Pane::Items && focused.item_index() == Some(idx);
    let border_color = if dragged {
        palette.accent
    } else if row_focused {
        palette.text
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(cell);
    frame.render_widget(block, cell);
    if inner.width < 12 || inner.height == 0 {
        hits.register(cell, ElementId::ItemName(idx));
        return;
    }

    // Whole cell first so the controls drawn on top take precedence.
    hits.register(cell, ElementId::ItemName(idx));
    let y = inner.y;
    hits.register(Rect::new(inner.x, y, 2, 1), ElementId::ItemHandle(idx));
    hits.register(Rect::new(inner.x + 2, y, 3, 1), ElementId::ItemChecked(idx));
    hits.register(Rect::new(inner.x + 6, y, 4, 1), ElementId::ItemQuantity(idx));
    let remove_width = REMOVE_LABEL.chars().count() as u16;
    hits.register(
        Rect::new(inner.x + inner.width - remove_width, y, remove_width, 1),
        ElementId::RemoveItemButton(idx),
    );

    let mark = |id: ElementId, style: Style| {
        if focused == id && app.pane() == Pane::Items {
            style.bg(palette.highlight)
        } else {
            style
        }
    };

    let quantity = edited_text(app, ElementId::ItemQuantity(idx))
        .unwrap_or_else(|| row.quantity.to_string());
    let name = edited_text(app, ElementId::ItemName(idx)).unwrap_or_else(|| row.name.clone());
    let mut name_style = Style::default().fg(palette.text);
    if row.checked {
        name_style = name_style
            .fg(palette.checked)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let name_width = (inner.width as usize).saturating_sub(2 + 4 + 6 + remove_width as usize);
    let line = Line::from(vec![
        Span::styled("⠿ ", Style::default().fg(palette.muted)),
        Span::styled(
            if row.checked { "[x]" } else { "[ ]" },
            mark(ElementId::ItemChecked(idx), Style::default().fg(palette.accent)),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{:>4}", fit(&quantity, 4)),
            mark(ElementId::ItemQuantity(idx), Style::default().fg(palette.text)),
        ),
        Span::styled(" × ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{:<width$}", fit(&name, name_width), width = name_width),
            mark(ElementId::ItemName(idx), name_style),
        ),
        Span::styled(REMOVE_LABEL, Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
}

fn draw_settings_dialog(
    frame: &mut Frame<'_>,
    body: Rect,
    dialog: &SettingsDialogState,
    palette: &Palette,
) {
    let SettingsDialogState::Visible { current, focused } = dialog else {
        return;
    };
    let mut lines: Vec<Line> = Theme::all()
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let radio = if theme == current { "(•)" } else { "( )" };
            let line = Line::from(vec![
                Span::styled(format!(" {radio} "), Style::default().fg(palette.accent)),
                Span::styled(theme.label(), Style::default().fg(palette.text)),
            ]);
            if idx == *focused {
                line.style(Style::default().bg(palette.highlight))
            } else {
                line
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: Move  Enter: Apply  Esc: Close",
        Style::default().fg(palette.muted),
    )));
    draw_popup(frame, body, "Theme", lines, 0, palette);
}

fn draw_transfer_dialog(
    frame: &mut Frame<'_>,
    body: Rect,
    dialog: &TransferDialogState,
    palette: &Palette,
) {
    let hint_style = Style::default().fg(palette.muted);
    match dialog {
        TransferDialogState::Export {
            list_name,
            json,
            qr,
            view,
        } => {
            let mut lines: Vec<Line> = match (view, qr) {
                (ExportView::Json, _) => json
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.text))))
                    .collect(),
                (ExportView::Qr, Some(qr)) => qr.lines().map(|l| Line::from(l.to_string())).collect(),
                (ExportView::Qr, None) => vec![Line::from(Span::styled(
                    "This list is too large for a QR code.",
                    Style::default().fg(palette.status_error),
                ))],
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Tab: JSON/QR  c: Copy  s: Save  Esc: Close",
                hint_style,
            )));
            draw_popup(frame, body, &format!("Export: {list_name}"), lines, 50, palette);
        }
        TransferDialogState::Import { input, error } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Paste JSON (Ctrl+V also reads QR images from the clipboard),",
                    hint_style,
                )),
                Line::from(Span::styled(
                    "or type the path of a .json file or QR image.",
                    hint_style,
                )),
                Line::from(""),
            ];
            let input_lines: Vec<&str> = input.lines().collect();
            let tail = input_lines.len().saturating_sub(8);
            let mut shown: Vec<String> = input_lines[tail..].iter().map(|l| l.to_string()).collect();
            match shown.last_mut() {
                Some(last) => last.push_str(CARET),
                None => shown.push(CARET.to_string()),
            }
            for (idx, text) in shown.into_iter().enumerate() {
                let prefix = if idx == 0 { "> " } else { "  " };
                lines.push(Line::from(Span::styled(
                    format!("{prefix}{text}"),
                    Style::default().fg(palette.text),
                )));
            }
            if let Some(error) = error {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(palette.status_error),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Enter: Import  Esc: Cancel", hint_style)));
            draw_popup(frame, body, "Import list", lines, 64, palette);
        }
        TransferDialogState::Hidden => {}
    }
}

fn draw_popup(
    frame: &mut Frame<'_>,
    body: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    min_width: u16,
    palette: &Palette,
) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(min_width);
    let popup_height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.accent),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.text))
        .style(Style::default().bg(palette.background));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

/// Text of `target` while it is being edited, with a caret.
fn edited_text(app: &App, target: ElementId) -> Option<String> {
    app.editing()
        .filter(|editing| editing.target == target)
        .map(|editing| format!("{}{CARET}", editing.buffer))
}

/// Truncate to `width` characters, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("Milk", 10), "Milk");
        assert_eq!(fit("Strawberries", 6), "Straw…");
        assert_eq!(fit("abc", 0), "");
    }
}
