use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::drug::DrugCard;
use crate::storage::PreferenceStore;
use crate::ui::app::{App, AppMode, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect, layout_regions, side_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, BRAND_PURPLE, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    LOADING_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    match app.mode() {
        AppMode::Landing => draw_landing(frame),
        AppMode::Search => draw_search(frame, app),
    }
}

fn draw_landing(frame: &mut Frame<'_>) {
    let area = centered_rect(60, 30, frame.area());
    let bold = Modifier::BOLD;
    let lines = vec![
        Line::from(vec![
            Span::styled("Med", Style::default().fg(BRAND_BLUE).add_modifier(bold)),
            Span::styled("Wise", Style::default().fg(BRAND_PURPLE).add_modifier(bold)),
        ]),
        Line::from(""),
        Line::styled(
            "Find affordable generic alternatives",
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_search(frame: &mut Frame<'_>, app: &App) {
    let controller = app.controller();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(
        Header::new().widget(
            controller.phase(),
            controller.favorites().len(),
            controller.alerts().len(),
        ),
        header,
    );
    frame.render_widget(Footer::new().widget(app.focus(), footer), footer);

    if body.height == 0 {
        return;
    }
    let (query_area, results_area, side_area) = body_regions(body);

    draw_query(frame, app, query_area);
    draw_results(frame, app, results_area);
    draw_side_lists(frame, app, side_area);
}

fn draw_query(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = app.controller();
    let (title, text) = if app.focus() == Focus::AlertPrice {
        let name = controller.brand().map(|b| b.name.as_str()).unwrap_or_default();
        (format!(" Alert price for {} ", name), app.alert_input().to_string())
    } else {
        (
            " Enter a brand drug (e.g. Dramamine) ".to_string(),
            controller.query().to_string(),
        )
    };

    let typing = matches!(app.focus(), Focus::Query | Focus::AlertPrice);
    let text_style = if controller.is_loading() {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(text.clone(), text_style))
            .block(panel(&title, typing)),
        area,
    );

    if typing && !controller.is_loading() && area.width > 2 {
        let x = area.x + 1 + (text.chars().count() as u16).min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = app.controller();
    let preferences = controller.preferences();
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(notice) = app.notice() {
        lines.push(Line::styled(notice.to_string(), Style::default().fg(STATUS_OK)));
        lines.push(Line::from(""));
    }
    if controller.is_loading() {
        lines.push(Line::styled("Loading...", Style::default().fg(LOADING_TEXT)));
    }
    if let Some(error) = controller.error() {
        lines.push(Line::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
    }

    if let Some(brand) = controller.brand() {
        card_lines(&mut lines, brand, preferences, true);
    }

    if !controller.generics().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Generic Alternatives",
            Style::default().fg(BRAND_PURPLE).add_modifier(Modifier::BOLD),
        ));
        for generic in controller.generics() {
            lines.push(Line::from(""));
            card_lines(&mut lines, generic, preferences, false);
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Results ", false)),
        area,
    );
}

fn card_lines(
    lines: &mut Vec<Line<'static>>,
    card: &DrugCard,
    preferences: &PreferenceStore,
    is_brand: bool,
) {
    let mut title = vec![Span::styled(
        card.name.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if is_brand && preferences.is_favorite(&card.name) {
        title.push(Span::styled("  ★", Style::default().fg(BRAND_PURPLE)));
    }
    if let Some(target) = preferences.alert_hit(card) {
        title.push(Span::styled(
            format!("  at or below your ${:.2} alert", target),
            Style::default().fg(STATUS_OK),
        ));
    } else if let Some(target) = preferences.alert_for(&card.name) {
        title.push(Span::styled(
            format!("  alert ${:.2}", target),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    lines.push(Line::from(title));

    let muted = Style::default().fg(MUTED_TEXT);
    if let Some(description) = &card.description {
        lines.push(Line::styled(description.clone(), muted));
    }
    let dosage = card.dosage.as_deref().unwrap_or("-");
    lines.push(Line::from(format!("{}, {}", dosage, card.quantity)));
    lines.push(Line::from(format!("{} from {}", card.display_price(), card.source)));
    if let Some(company) = &card.company {
        lines.push(Line::from(format!("Manufacturer: {}", company)));
    }
    if !card.conditions.is_empty() {
        lines.push(Line::styled(
            format!("Treats: {}", card.conditions.join(", ")),
            muted,
        ));
    }
    if !card.side_effects.is_empty() {
        let effects: Vec<String> = card
            .side_effects
            .iter()
            .map(|effect| match &effect.severity {
                Some(severity) => format!("{} ({})", effect.name, severity),
                None => effect.name.clone(),
            })
            .collect();
        lines.push(Line::styled(
            format!("Side effects: {}", effects.join(", ")),
            muted,
        ));
    }
    if let Some(retailer) = &card.retailer {
        lines.push(Line::from(vec![
            Span::raw("Buy at "),
            Span::styled(
                retailer.name.clone(),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!(" {}", retailer.url), muted),
        ]));
    }
}

fn draw_side_lists(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = app.controller();
    let (recent_area, favorites_area, alerts_area) =
        side_regions(area, controller.state().history_limit);

    let history: Vec<String> = controller
        .history()
        .iter()
        .map(|drug| format!("{}  {}", drug.name, drug.display_price()))
        .collect();
    draw_list(frame, app, recent_area, " Recent ", Focus::History, history);

    let favorites: Vec<String> = controller
        .favorites()
        .iter()
        .map(|drug| drug.name.clone())
        .collect();
    draw_list(frame, app, favorites_area, " Favorites ", Focus::Favorites, favorites);

    let alerts: Vec<String> = controller
        .alerts()
        .iter()
        .map(|(name, target)| format!("{}  ≤ ${:.2}", name, target))
        .collect();
    draw_list(frame, app, alerts_area, " Price alerts ", Focus::Alerts, alerts);
}

fn draw_list(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    title: &str,
    focus: Focus,
    entries: Vec<String>,
) {
    let focused = app.focus() == focus;
    let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(panel(title, focused))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selection()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}
