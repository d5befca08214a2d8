use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands of the search view.
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

/// Query box on top, results on the left, saved lists on the right.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);
    (rows[0], columns[0], columns[1])
}

/// Recent, favorites and alerts panels stacked in the side column.
///
/// The recent panel is tall enough for `history_limit` rows plus borders.
pub fn side_regions(area: Rect, history_limit: usize) -> (Rect, Rect, Rect) {
    let recent_height = u16::try_from(history_limit)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(recent_height),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .split(area);
    (sections[0], sections[1], sections[2])
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn recent_panel_fits_history_limit() {
        let area = Rect::new(0, 0, 30, 40);
        let (recent, _, alerts) = side_regions(area, 3);
        assert_eq!(recent.height, 5);
        assert_eq!(alerts.height, 6);

        let (recent, favorites, _) = side_regions(area, 8);
        assert_eq!(recent.height, 10);
        assert!(favorites.height >= 3);
    }

    #[test]
    fn tiny_area_has_no_body() {
        let (_, body, _) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(body.height, 0);
    }
}
