pub mod canvas;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Top-level draw function: figure canvas above a one-line status bar
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    canvas::render(f, app, chunks[0]);
    status_bar::render(f, app, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    use crate::config::{Config, BACKGROUND, FOREGROUND};
    use crate::event::Event;

    fn render(width: u16, height: u16) -> ratatui::buffer::Buffer {
        let (tx, _rx) = mpsc::unbounded_channel();
        let app = App::new(Config::default(), tx);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn canvas_paints_figure_on_background() {
        let buffer = render(40, 31);

        let mut painted = 0;
        for y in 0..30u16 {
            for x in 0..40u16 {
                let cell = &buffer[(x, y)];
                if cell.symbol() == " " || cell.symbol() == "\u{2800}" {
                    assert_eq!(cell.bg, BACKGROUND);
                } else {
                    assert_eq!(cell.fg, FOREGROUND);
                    painted += 1;
                }
            }
        }
        assert!(painted > 0);
    }

    #[test]
    fn status_bar_shows_hints_and_state() {
        let buffer = render(60, 20);
        let status = row_text(&buffer, 19);
        assert!(status.contains("[click]"), "{status}");
        assert!(status.contains("node 1/5"), "{status}");
        assert!(status.contains("idle"), "{status}");
    }

    #[tokio::test(start_paused = true)]
    async fn status_bar_follows_current_node() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(Config::default(), tx);
        app.handle_event(Event::Tap { column: 0, row: 0 });
        while app.figure.is_animating() {
            let event = rx.recv().await.expect("frame timer closed");
            app.handle_event(event);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let status = row_text(terminal.backend().buffer(), 19);
        assert!(status.contains("node 2/5"), "{status}");
        assert!(status.contains("legs 1"), "{status}");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        render(3, 2);
        render(1, 1);
    }
}
