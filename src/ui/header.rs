use crate::ui::search::SearchPhase;
use crate::ui::theme::{
    BRAND_BLUE, BRAND_PURPLE, GLOBAL_BORDER, HEADER_TEXT, LOADING_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: SearchPhase, favorites: usize, alerts: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let (status, status_color) = match phase {
            SearchPhase::Idle => ("Ready", HEADER_TEXT),
            SearchPhase::Loading => ("Loading...", LOADING_TEXT),
            SearchPhase::Success => ("Found", STATUS_OK),
            SearchPhase::Failed => ("Error", STATUS_ERROR),
        };
        let line = Line::from(vec![
            Span::styled("  Med", Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD)),
            Span::styled("Wise", Style::default().fg(BRAND_PURPLE).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(format!("★ {}", favorites), text_style),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(format!("alerts {}", alerts), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
