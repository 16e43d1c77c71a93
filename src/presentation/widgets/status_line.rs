//! Operation status line widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Outcome of the most recent operation.
///
/// The variants are mutually exclusive by construction: at most one of
/// loading, success, or error can be displayed at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiStatus {
    /// No operation pending and nothing to report.
    #[default]
    Idle,
    /// An operation is in flight.
    Loading,
    /// The most recent operation succeeded, with the server's message.
    Success(String),
    /// The most recent operation failed, with a user-facing message.
    Error(String),
}

impl UiStatus {
    /// Returns whether an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Renders the current `UiStatus` as a single line.
pub struct StatusLine<'a> {
    status: &'a UiStatus,
}

impl<'a> StatusLine<'a> {
    /// Creates a status line for the given status.
    #[must_use]
    pub const fn new(status: &'a UiStatus) -> Self {
        Self { status }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.status {
            UiStatus::Idle => Line::from(vec![
                Span::styled("Enter: Submit", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Next Field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
            ]),
            UiStatus::Loading => Line::from(Span::styled(
                "Working...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            UiStatus::Success(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )),
            UiStatus::Error(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )),
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(UiStatus::default(), UiStatus::Idle);
        assert!(!UiStatus::Idle.is_loading());
    }

    #[test]
    fn test_only_loading_reports_loading() {
        assert!(UiStatus::Loading.is_loading());
        assert!(!UiStatus::Success("Saved".to_string()).is_loading());
        assert!(!UiStatus::Error("nope".to_string()).is_loading());
    }

    #[test]
    fn test_render_shows_message() {
        let status = UiStatus::Error("Could not retrieve users.".to_string());
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        StatusLine::new(&status).render(buf.area, &mut buf);

        let rendered: String = (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(rendered.starts_with("Could not retrieve users."));
    }
}
