use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("1-3 / Tab", "Switch tab"),
    ("j / k", "Scroll"),
    ("p", "Pause the spider (while running)"),
    ("u", "Resume the spider (while paused)"),
    ("f", "Force a scheduler query pass"),
    ("c", "Ask the server to check its peers"),
    ("s", "Shut the spider down (asks for confirmation)"),
    ("t", "Cycle color theme"),
    ("q", "Quit the panel"),
];

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Key bindings",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(theme.fg)),
            Span::styled(*action, Style::default().fg(theme.muted)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "The panel polls /data/server and /data/exposed_function_details;",
        Style::default().fg(theme.muted),
    )));
    lines.push(Line::from(Span::styled(
        "a failed poll keeps the last rendered values on screen.",
        Style::default().fg(theme.muted),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Help ", Style::default().fg(theme.accent))),
    );
    f.render_widget(paragraph, area);
}
