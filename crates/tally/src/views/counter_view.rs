use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tally_config::KeyBindings;

/// Render the counter panel centered in `area`
pub fn render(count: i64, label: &str, keys: &KeyBindings, area: Rect, f: &mut Frame) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6), // Border + count + blank + help line
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(40),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let count_style = if count < 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{}: ", label)),
            Span::styled(count.to_string(), count_style.add_modifier(Modifier::BOLD)),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            help_text(keys),
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tally ")
        .title_alignment(Alignment::Center);

    f.render_widget(Paragraph::new(lines).block(block), horizontal_chunks[1]);
}

fn help_text(keys: &KeyBindings) -> String {
    format!(
        "{} add  {} subtract  {} reset  {} quit",
        keys.increment, keys.decrement, keys.reset, keys.quit
    )
}
