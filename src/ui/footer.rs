use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, focus: Focus, area: Rect) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Query => {
                " Enter: Search │ Tab: Lists │ Ctrl+F: Favorite │ Ctrl+A: Alert │ Ctrl+R: Clear alert │ Esc: Quit"
            }
            Focus::History => " ↑↓: Move │ Enter: Search again │ Tab: Next │ Esc: Back",
            Focus::Favorites => " ↑↓: Move │ Enter: Search again │ d: Remove │ Tab: Next │ Esc: Back",
            Focus::Alerts => " ↑↓: Move │ Enter: Search │ d: Remove alert │ Tab: Next │ Esc: Back",
            Focus::AlertPrice => " Type a target price │ Enter: Save │ Esc: Cancel",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes, because of the box-drawing glyphs
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
