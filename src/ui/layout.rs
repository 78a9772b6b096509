use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the list menu column.
const MENU_WIDTH: u16 = 28;

/// Header, body and footer bands of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the list menu and the active list.
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let menu_width = MENU_WIDTH.min(body.width / 2);
    let [menu, detail] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(menu_width), Constraint::Min(0)])
        .areas(body);
    (menu, detail)
}

/// Cells for `count` item rows of `cell_height` lines each, laid out in
/// `columns` columns, row-major. Cells that do not fit are dropped.
pub fn item_cells(area: Rect, count: usize, columns: u16, cell_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_width = area.width / columns;
    if cell_width == 0 || cell_height == 0 {
        return Vec::new();
    }
    (0..count)
        .map_while(|idx| {
            let col = (idx % columns as usize) as u16;
            let row = (idx / columns as usize) as u16;
            let y = area.y.checked_add(row.checked_mul(cell_height)?)?;
            if y + cell_height > area.y + area.height {
                return None;
            }
            Some(Rect {
                x: area.x + col * cell_width,
                y,
                width: cell_width,
                height: cell_height,
            })
        })
        .collect()
}

/// Rectangle of the given size centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn grid_cells_are_row_major() {
        let cells = item_cells(Rect::new(0, 0, 60, 9), 5, 2, 3);
        assert_eq!(cells.len(), 5);
        assert_eq!((cells[1].x, cells[1].y), (30, 0));
        assert_eq!((cells[2].x, cells[2].y), (0, 3));
    }

    #[test]
    fn cells_that_overflow_are_dropped() {
        let cells = item_cells(Rect::new(0, 0, 40, 7), 4, 1, 3);
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
