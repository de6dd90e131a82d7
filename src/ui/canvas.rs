use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line, Painter, Shape};
use ratatui::Frame;

use crate::app::App;
use crate::figure::geometry::{FigureGeometry, Square};

/// Braille cells hold 2×4 dots, which keeps the dot grid roughly square.
const DOTS_PER_COLUMN: f32 = 2.0;
const DOTS_PER_ROW: f32 = 4.0;

/// A filled, possibly rotated square in canvas coordinates (y grows upwards).
pub struct FilledSquare {
    corners: [(f64, f64); 4],
    color: Color,
}

impl FilledSquare {
    /// Flip a surface-space square onto a canvas of the given height.
    pub fn from_square(square: &Square, surface_height: f32, color: Color) -> Self {
        let corners = square
            .corners()
            .map(|c| (c.x as f64, (surface_height - c.y) as f64));
        Self { corners, color }
    }
}

impl Shape for FilledSquare {
    fn draw(&self, painter: &mut Painter) {
        let [a, b, c, d] = self.corners;
        let side = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        // Two strokes per dot so rotated squares leave no gaps.
        let strokes = (side * 2.0).ceil().max(1.0) as usize;

        for k in 0..=strokes {
            let t = k as f64 / strokes as f64;
            let (x1, y1) = (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
            let (x2, y2) = (d.0 + (c.0 - d.0) * t, d.1 + (c.1 - d.1) * t);
            Line::new(x1, y1, x2, y2, self.color).draw(painter);
        }
    }
}

/// Clear to the background colour and paint every node.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.config.palette;
    let width = area.width as f32 * DOTS_PER_COLUMN;
    let height = area.height as f32 * DOTS_PER_ROW;
    let geometry = FigureGeometry::new(&app.config, width, height);
    let squares: Vec<FilledSquare> = app
        .figure
        .squares(&geometry)
        .iter()
        .map(|sq| FilledSquare::from_square(sq, height, palette.foreground))
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette.background)
        .x_bounds([0.0, width as f64])
        .y_bounds([0.0, height as f64])
        .paint(|ctx| {
            for square in &squares {
                ctx.draw(square);
            }
        });
    frame.render_widget(canvas, area);
}
