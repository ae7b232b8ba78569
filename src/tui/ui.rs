use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use super::views::draw_timer;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Timer
            Constraint::Length(3), // Status/help bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_timer(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = if app.engine.is_running() {
        Span::styled(
            " RUNNING ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.engine.configured_total_seconds() > 0 {
        Span::styled(
            " DONE ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" IDLE ", Style::default().fg(Color::DarkGray))
    };

    let header = Paragraph::new(Line::from(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" RINGTIMER - Countdown "),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.engine.is_running() {
        "[Enter] Reset  [?] Help  [q] Quit"
    } else {
        "[0-9] Type  [Tab] Field  [Enter] Start  [?] Help  [q] Quit"
    };

    let status = if let Some(msg) = &app.status_message {
        Line::from(vec![
            Span::styled(msg, Style::default().fg(Color::Green)),
            Span::raw("  |  "),
            Span::styled(help_text, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            help_text,
            Style::default().fg(Color::DarkGray),
        ))
    };

    let footer = Paragraph::new(status).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from(Span::styled(
            "RINGTIMER - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Duration",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  0-9          - Type minutes / seconds"),
        Line::from("  Tab, ←/→     - Switch field"),
        Line::from("  Backspace    - Delete last digit"),
        Line::from("  Del          - Clear field"),
        Line::from(""),
        Line::from(Span::styled(
            "Countdown",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Enter, Space - Start / reset"),
        Line::from("  r            - Reset"),
        Line::from(""),
        Line::from(Span::styled(
            "General",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ?            - Toggle this help"),
        Line::from("  q, Esc       - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::SilentAlarm;
    use crate::config::Config;
    use crate::tui::app::Message;
    use chrono::{Duration, TimeZone, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_screen_shows_placeholder() {
        let app = App::new(&Config::default(), Box::new(SilentAlarm));
        let screen = render(&app);
        assert!(screen.contains("--:--"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("IDLE"));
    }

    #[test]
    fn running_screen_shows_remaining_time() {
        let config = Config {
            minutes: "1".to_string(),
            ..Config::default()
        };
        let mut app = App::new(&config, Box::new(SilentAlarm));
        let t0 = Utc.with_ymd_and_hms(2025, 5, 23, 12, 0, 0).unwrap();
        app.update(Message::StartOrReset, t0);
        app.update(Message::Tick, t0 + Duration::seconds(30));

        let screen = render(&app);
        assert!(screen.contains("00:30"));
        assert!(screen.contains("Reset"));
        assert!(screen.contains("RUNNING"));
    }

    #[test]
    fn help_overlay_renders() {
        let mut app = App::new(&Config::default(), Box::new(SilentAlarm));
        app.show_help = true;
        assert!(render(&app).contains("Press any key to close"));
    }
}
