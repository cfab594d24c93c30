use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    render_paused_banner(f, app, chunks[0]);
    render_uptime(f, app, chunks[1]);
    render_queues(f, app, chunks[2]);
}

/// The paused indicator is only drawn with warning styling while the
/// spider is actually paused.
fn render_paused_banner(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let line = if app.paused.controls().indicator_visible {
        Line::from(Span::styled(
            " PAUSED: the spider is not issuing new requests ",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ))
    } else {
        Line::from(Span::styled(
            " Running ",
            Style::default().fg(theme.success),
        ))
    };

    let banner = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(banner, area);
}

fn render_uptime(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let text = app
        .status
        .running_time
        .as_deref()
        .unwrap_or("Waiting for the first status report...");

    let uptime = Paragraph::new(text)
        .style(Style::default().fg(theme.fg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(" Uptime ", Style::default().fg(theme.accent))),
        );
    f.render_widget(uptime, area);
}

fn render_queues(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.fg);

    let row = |name: &str, content: Option<&str>| -> Line {
        let shown = match content {
            Some("") | None => "-".to_string(),
            Some(s) => s.to_string(),
        };
        Line::from(vec![
            Span::styled(format!("{:<22}", name), label),
            Span::styled(shown, value),
        ])
    };

    let lines: Vec<Line> = vec![
        row("Server time", app.status.current_timestamp.as_deref()),
        row("Load average", app.status.load_avg.as_deref()),
        Line::default(),
        row("Active requests", app.status.active_requests.as_deref()),
        row("Pending requests", app.status.pending_requests.as_deref()),
        row(
            "Active by host",
            app.status.active_requests_by_host.as_deref(),
        ),
        row(
            "Pending by host",
            app.status.pending_requests_by_host.as_deref(),
        ),
    ];

    let queues = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Requests ",
                    Style::default().fg(theme.accent),
                )),
        );
    f.render_widget(queues, area);
}
