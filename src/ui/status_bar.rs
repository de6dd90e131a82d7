use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::config::Palette;
use crate::figure::chain::Traversal;

/// Render the bottom status bar: key hints on the left, figure state on the right
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = &app.config.palette;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let hints = Paragraph::new(Line::from(hints(palette))).style(base(palette));
    frame.render_widget(hints, chunks[0]);

    let state = Paragraph::new(Line::from(figure_state(app)))
        .style(base(palette))
        .alignment(Alignment::Right);
    frame.render_widget(state, chunks[1]);
}

fn hints(palette: &Palette) -> Vec<Span<'static>> {
    vec![
        key("click", palette),
        desc("Animate "),
        key("q", palette),
        desc("Quit"),
    ]
}

fn figure_state(app: &App) -> Vec<Span<'static>> {
    let controller = app.figure.controller();
    let arrow = match controller.traversal() {
        Traversal::Forward => "↓",
        Traversal::Backward => "↑",
    };
    let activity = if app.figure.is_animating() {
        "running"
    } else {
        "idle"
    };
    let index = controller
        .current_node()
        .map_or(controller.current(), |node| node.index);
    vec![Span::raw(format!(
        "node {}/{} {} │ {} │ legs {} ",
        index + 1,
        controller.chain().len(),
        arrow,
        activity,
        app.figure.legs()
    ))]
}

fn base(palette: &Palette) -> Style {
    Style::default().fg(palette.foreground).bg(palette.background)
}

fn key(k: &'static str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" [{k}] "),
        base(palette).add_modifier(Modifier::BOLD),
    )
}

fn desc(d: &'static str) -> Span<'static> {
    Span::raw(d)
}
