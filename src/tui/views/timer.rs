use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Points},
    },
};

use crate::ring::Ring;
use crate::tui::app::{App, Field};

/// Angular resolution of the drawn ring
const RING_SAMPLES: usize = 360;
/// Canvas extends slightly past the unit ring
const CANVAS_BOUND: f64 = 1.1;

pub fn draw_timer(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Duration inputs
            Constraint::Min(6),    // Ring
            Constraint::Length(3), // Start/reset button
        ])
        .split(area);

    draw_inputs(frame, app, centered_columns(chunks[0], 32));
    draw_ring(frame, app, chunks[1]);
    draw_button(frame, app, centered_columns(chunks[2], 20));
}

fn draw_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(10),
            Constraint::Percentage(45),
        ])
        .split(area);

    let field_style = |field: Field| -> Style {
        if app.inputs_locked() {
            Style::default().fg(Color::DarkGray)
        } else if app.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };
    let cursor = |field: Field| -> &'static str {
        if app.focus == field && !app.inputs_locked() {
            "_"
        } else {
            ""
        }
    };

    let minutes = Paragraph::new(format!("{}{}", app.minutes_input, cursor(Field::Minutes)))
        .alignment(Alignment::Right)
        .style(field_style(Field::Minutes))
        .block(Block::default().borders(Borders::ALL).title(" min "));
    let separator = Paragraph::new(vec![Line::from(""), Line::from(":")])
        .alignment(Alignment::Center);
    let seconds = Paragraph::new(format!("{}{}", app.seconds_input, cursor(Field::Seconds)))
        .alignment(Alignment::Right)
        .style(field_style(Field::Seconds))
        .block(Block::default().borders(Borders::ALL).title(" sec "));

    frame.render_widget(minutes, cols[0]);
    frame.render_widget(separator, cols[1]);
    frame.render_widget(seconds, cols[2]);
}

fn draw_ring(frame: &mut Frame, app: &App, area: Rect) {
    // Terminal cells are about twice as tall as wide
    let width = area.width.min(area.height.saturating_mul(2));
    let ring_area = centered_columns(area, width);

    let arcs = Ring::new(RING_SAMPLES).arcs(app.engine.progress_fraction());
    let label = app.engine.display_label();
    let label_color = if app.engine.is_running() {
        Color::White
    } else if app.engine.configured_total_seconds() > 0 {
        Color::Red
    } else {
        Color::DarkGray
    };

    // Half the label's width in canvas units, so it sits centred
    let cell_width = 2.0 * CANVAS_BOUND / f64::from(ring_area.width.max(1));
    let label_x = -cell_width * label.len() as f64 / 2.0;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &arcs.track,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &arcs.filled,
                color: Color::Red,
            });
            ctx.print(
                label_x,
                0.0,
                Line::styled(
                    label.clone(),
                    Style::default()
                        .fg(label_color)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        });

    frame.render_widget(canvas, ring_area);
}

fn draw_button(frame: &mut Frame, app: &App, area: Rect) {
    let color = if app.engine.is_running() {
        Color::Red
    } else {
        Color::Green
    };

    let button = Paragraph::new(Line::from(Span::styled(
        app.button_label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(color)),
    );

    frame.render_widget(button, area);
}

/// A horizontally centred slice of `area`, at most `width` columns wide
fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
