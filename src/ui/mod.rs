use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::CostPlan;
use crate::app::{App, ViewState};
use crate::config::Config;
use crate::theme::Theme;

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn danger() -> Color { theme().danger }
fn success() -> Color { theme().success }
fn warning() -> Color { theme().warning }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn header() -> Color { theme().header }

pub const TITLE_TEXT: &str = "Cost Planner";
pub const LOADING_TEXT: &str = "Loading plans...";
pub const NO_PLANS_TEXT: &str = "No cost plans yet. Create one using the API!";

/// One card: five field lines plus the border
const CARD_HEIGHT: u16 = 7;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Body (one of loading/error/empty/cards)
            Constraint::Length(1), // Footer (always)
        ])
        .split(f.area());

    draw_title(f, chunks[0]);
    draw_body(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        TITLE_TEXT,
        Style::default().fg(header()).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn draw_body(f: &mut Frame, app: &App, area: Rect) {
    match app.view_state() {
        ViewState::Loading => {
            let loading = Paragraph::new(Span::styled(
                LOADING_TEXT,
                Style::default().fg(warning()),
            ))
            .alignment(Alignment::Center);
            f.render_widget(loading, area);
        }
        ViewState::Error(msg) => {
            let error = Paragraph::new(Span::styled(
                format!("Error: {}", msg),
                Style::default().fg(danger()),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(error, area);
        }
        ViewState::Empty => {
            let empty = Paragraph::new(Span::styled(
                NO_PLANS_TEXT,
                Style::default().fg(text_dim()),
            ))
            .alignment(Alignment::Center);
            f.render_widget(empty, area);
        }
        ViewState::Plans => draw_plan_cards(f, app, area),
    }
}

fn draw_plan_cards(f: &mut Frame, app: &App, area: Rect) {
    let visible = ((area.height / CARD_HEIGHT).max(1)) as usize;

    // Scroll window follows the cursor; server order is never changed
    let first = if app.selected >= visible {
        app.selected + 1 - visible
    } else {
        0
    };

    let shown = app.plans.len().saturating_sub(first).min(visible);
    let constraints: Vec<Constraint> = (0..shown)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, (i, plan)) in app
        .plans
        .iter()
        .enumerate()
        .skip(first)
        .take(shown)
        .enumerate()
    {
        draw_card(f, plan, i == app.selected, slots[slot]);
    }
}

fn draw_card(f: &mut Frame, plan: &CostPlan, selected: bool, area: Rect) {
    let border_color = if selected { accent() } else { text_dim() };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", plan.name),
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let card = Paragraph::new(card_lines(plan)).block(block);
    f.render_widget(card, area);
}

/// The five card fields, in the fixed order the dashboard promises
pub(crate) fn card_lines(plan: &CostPlan) -> Vec<Line<'static>> {
    let remaining_color = if plan.remaining_budget < 0.0 {
        danger()
    } else {
        success()
    };

    vec![
        field_line("Status", plan.status.clone(), text()),
        field_line("Total Budget", format_currency(plan.total_budget), text()),
        field_line("Estimated Cost", format_currency(plan.total_estimated_cost), text()),
        field_line("Actual Cost", format_currency(plan.total_actual_cost), text()),
        field_line("Remaining", format_currency(plan.remaining_budget), remaining_color),
    ]
}

fn field_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(text_dim())),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Two decimals, no thousands separator: 2500.5 renders as "$2500.50"
pub(crate) fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(footer_line(&app.config)).alignment(Alignment::Left);
    f.render_widget(footer, area);
}

/// Static footer shown in every state: effective base URL, docs link,
/// key hints.
pub(crate) fn footer_line(config: &Config) -> Line<'static> {
    Line::from(vec![
        Span::styled(" API ", Style::default().fg(accent())),
        Span::styled(config.api_base_url.clone(), Style::default().fg(text_dim())),
        Span::styled(" │ ", Style::default().fg(text_dim())),
        Span::styled("Docs ", Style::default().fg(accent())),
        Span::styled(config.docs_url(), Style::default().fg(text_dim())),
        Span::styled(" │ ", Style::default().fg(text_dim())),
        Span::styled("d", Style::default().fg(accent())),
        Span::styled(" open docs │ ", Style::default().fg(text_dim())),
        Span::styled("q", Style::default().fg(accent())),
        Span::styled(" quit", Style::default().fg(text_dim())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn plan() -> CostPlan {
        CostPlan {
            id: "a".to_string(),
            name: "Spring Wedding".to_string(),
            status: "active".to_string(),
            total_budget: 5000.0,
            total_estimated_cost: 2500.5,
            total_actual_cost: 1234.5,
            remaining_budget: 2499.5,
            created_at: "2025-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(5000.0), "$5000.00");
        assert_eq!(format_currency(2500.5), "$2500.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency(-42.5), "$-42.50");
    }

    #[test]
    fn test_format_currency_no_thousands_separator() {
        assert_eq!(format_currency(1234567.0), "$1234567.00");
    }

    #[test]
    fn test_card_fields_in_fixed_order() {
        let lines = card_lines(&plan());
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts.len(), 5);
        assert_eq!(texts[0], " Status: active");
        assert_eq!(texts[1], " Total Budget: $5000.00");
        assert_eq!(texts[2], " Estimated Cost: $2500.50");
        assert_eq!(texts[3], " Actual Cost: $1234.50");
        assert_eq!(texts[4], " Remaining: $2499.50");
    }

    #[test]
    fn test_footer_shows_base_and_docs_urls() {
        let config = Config {
            api_base_url: "http://localhost:8000".to_string(),
        };
        let text = line_text(&footer_line(&config));

        assert!(text.contains("http://localhost:8000"));
        assert!(text.contains("http://localhost:8000/docs"));
    }

    #[test]
    fn test_empty_state_text_is_exact() {
        assert_eq!(NO_PLANS_TEXT, "No cost plans yet. Create one using the API!");
    }
}
