use ratatui::prelude::*;
use ratatui::widgets::*;

use spiderpanel_core::SHUTDOWN_PROMPT;

use crate::app::{App, Tab};
use crate::views;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Status => views::status::render(f, app, chunks[1]),
        Tab::Functions => views::functions::render(f, app, chunks[1]),
        Tab::Help => views::help::render(f, app, chunks[1]),
    }

    render_status_bar(f, app, chunks[2]);

    if app.confirming_shutdown {
        render_shutdown_modal(f, app);
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.muted)),
                Span::raw(tab.label()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Spider Panel ",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )),
        )
        .select(app.current_tab.index())
        .style(Style::default().fg(theme.fg))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let connection = if app.connected {
        Span::styled("● Connected", Style::default().fg(theme.success))
    } else {
        Span::styled("○ Disconnected", Style::default().fg(theme.error))
    };

    let paused = if app.paused.controls().indicator_visible {
        Span::styled(" │ PAUSED", Style::default().fg(theme.warning))
    } else {
        Span::raw("")
    };

    // Only the action the server can honor right now is advertised.
    let controls = app.paused.controls();
    let pause_hint = if controls.pause_enabled {
        "p:Pause"
    } else {
        "u:Resume"
    };
    let help_hint = Span::styled(
        format!(" │ q:Quit Tab:Switch {} f:Query c:Peers s:Shutdown t:Theme", pause_hint),
        Style::default().fg(theme.muted),
    );

    let status = if let Some(ref msg) = app.status_message {
        Span::styled(format!(" │ {}", msg), Style::default().fg(theme.warning))
    } else if let Some(ref err) = app.last_error {
        Span::styled(
            format!(" │ {}", truncate(err, 48)),
            Style::default().fg(theme.error),
        )
    } else {
        Span::raw("")
    };

    let bar = Paragraph::new(Line::from(vec![connection, paused, help_hint, status]));
    f.render_widget(bar, area);
}

fn render_shutdown_modal(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = centered_rect(60, 5, f.area());

    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            SHUTDOWN_PROMPT,
            Style::default().fg(theme.fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::styled(": shut down    ", Style::default().fg(theme.muted)),
            Span::styled("n", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
            Span::styled(": cancel", Style::default().fg(theme.muted)),
        ]),
    ];

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .title(Span::styled(
                    " Confirm Shutdown ",
                    Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(modal, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

// Error text comes straight from the server or the transport layer, so it
// may contain multi-byte characters; cut on char boundaries only.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
