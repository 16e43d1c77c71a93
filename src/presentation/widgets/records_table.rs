//! Stored records table widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::domain::entities::Record;

/// Renders the stored records, or a placeholder while loading / when empty.
pub struct RecordsTable<'a> {
    records: &'a [Record],
    loading: bool,
}

impl<'a> RecordsTable<'a> {
    /// Creates a table over the given records.
    #[must_use]
    pub const fn new(records: &'a [Record], loading: bool) -> Self {
        Self { records, loading }
    }

    fn placeholder(&self) -> Option<&'static str> {
        if self.loading {
            Some("Loading records...")
        } else if self.records.is_empty() {
            Some("No records found.")
        } else {
            None
        }
    }
}

impl Widget for RecordsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" All Stored Records ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(text) = self.placeholder() {
            Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let header = Row::new([Cell::from("ID"), Cell::from("Name"), Cell::from("Age")]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.records.iter().map(|record| {
            Row::new([
                Cell::from(record.id.as_str().to_string()),
                Cell::from(record.name.clone()),
                Cell::from(record.age.to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(6),
            ],
        )
        .header(header);

        Widget::render(table, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_one_row_per_record() {
        let records = vec![Record::new("1", "Ada", 30), Record::new("2", "Grace", 45)];
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
        RecordsTable::new(&records, false).render(buf.area, &mut buf);

        assert!(row_text(&buf, 1).contains("Name"));
        assert!(row_text(&buf, 2).contains("Ada"));
        assert!(row_text(&buf, 2).contains("30"));
        assert!(row_text(&buf, 3).contains("Grace"));
        assert!(row_text(&buf, 3).contains("45"));
    }

    #[test]
    fn test_loading_placeholder() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 4));
        RecordsTable::new(&[], true).render(buf.area, &mut buf);

        assert!(row_text(&buf, 1).contains("Loading records..."));
    }

    #[test]
    fn test_empty_placeholder() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 4));
        RecordsTable::new(&[], false).render(buf.area, &mut buf);

        assert!(row_text(&buf, 1).contains("No records found."));
    }
}
