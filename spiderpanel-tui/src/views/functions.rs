use ratatui::prelude::*;
use ratatui::widgets::*;
use spiderpanel_core::FunctionView;

use crate::app::App;

/// The exposed-function catalog: one heading per function followed by
/// interval and argument rows.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let mut lines: Vec<Line> = Vec::new();

    if app.functions.is_empty() {
        lines.push(Line::from(Span::styled(
            "No exposed functions.",
            Style::default().fg(theme.muted),
        )));
    }

    for function in &app.functions {
        let view = FunctionView::from_function(function);

        lines.push(Line::from(Span::styled(
            view.name.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("  Interval: ", Style::default().fg(theme.muted)),
            Span::styled(view.interval.clone(), Style::default().fg(theme.fg)),
        ]));

        lines.push(Line::from(Span::styled(
            "  Required arguments:",
            Style::default().fg(theme.muted),
        )));
        for item in view.required_arguments.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", item),
                Style::default().fg(theme.fg),
            )));
        }

        lines.push(Line::from(Span::styled(
            "  Optional arguments:",
            Style::default().fg(theme.muted),
        )));
        for item in view.optional_arguments.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", item),
                Style::default().fg(theme.fg),
            )));
        }

        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .scroll((app.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Exposed Functions ",
                    Style::default().fg(theme.accent),
                )),
        );
    f.render_widget(paragraph, area);
}
