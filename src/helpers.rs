use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide, so a 3:2 court
/// needs three columns per row.
pub const COLUMNS_PER_ROW: u16 = 3;

pub const MIN_COURT_ROWS: u16 = 16;

pub fn centered_rect_with_percentage(percent_x: u16, percent_y: u16, cols: u16, rows: u16) -> Rect {
    let width = cols * percent_x / 100;
    let height = std::cmp::min(std::cmp::max(rows * percent_y / 100, 5), rows);
    Rect::new((cols - width) / 2, (rows - height) / 2, width, height)
}

pub fn centered_rect(width: u16, height: u16, cols: u16, rows: u16) -> Rect {
    let actual_width = std::cmp::min(width, cols);
    let actual_height = std::cmp::min(height, rows);

    let x = cols.saturating_sub(actual_width) / 2;
    let y = rows.saturating_sub(actual_height) / 2;

    Rect::new(x, y, actual_width, actual_height)
}

/// Largest court (border included) with the fixed aspect that fits `area`,
/// centred in it. `None` when the terminal is too small to play.
pub fn court_rect(area: Rect) -> Option<Rect> {
    // one border cell on each side
    let inner_rows = area.height.saturating_sub(2);
    let inner_cols = area.width.saturating_sub(2);
    let rows = std::cmp::min(inner_rows, inner_cols / COLUMNS_PER_ROW);

    if rows < MIN_COURT_ROWS {
        return None;
    }

    let centered = centered_rect(rows * COLUMNS_PER_ROW + 2, rows + 2, area.width, area.height);
    Some(Rect::new(
        area.x + centered.x,
        area.y + centered.y,
        centered.width,
        centered.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn court_keeps_aspect_and_centres() {
        let court = court_rect(Rect::new(0, 0, 120, 40)).unwrap();
        assert_eq!(court, Rect::new(2, 0, 116, 40));

        let court = court_rect(Rect::new(0, 0, 200, 30)).unwrap();
        assert_eq!(court.height, 30);
        assert_eq!(court.width, 28 * COLUMNS_PER_ROW + 2);
        assert_eq!(court.x, (200 - court.width) / 2);
    }

    #[test]
    fn tiny_terminal_has_no_court() {
        assert_eq!(court_rect(Rect::new(0, 0, 40, 12)), None);
    }

    #[test]
    fn centered_rect_never_exceeds_available_space() {
        assert_eq!(centered_rect(50, 10, 20, 5), Rect::new(0, 0, 20, 5));
        assert_eq!(centered_rect(10, 4, 20, 10), Rect::new(5, 3, 10, 4));
    }
}
