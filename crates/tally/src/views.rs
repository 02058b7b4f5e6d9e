use ratatui::{layout::Rect, Frame};
use tally_config::AppConfig;

pub mod counter_view;

/// Render the entire application UI
pub fn render(count: i64, config: &AppConfig, area: Rect, f: &mut Frame) {
    counter_view::render(count, &config.label, &config.keys, area, f);
}
