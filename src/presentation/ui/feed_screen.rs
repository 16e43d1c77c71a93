//! Record feed screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{Record, RecordDraft};
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{RecordsTable, StatusLine, TextInput, UiStatus};

/// Form field holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusField {
    Name,
    Age,
}

/// Action requested by a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    /// Nothing to do.
    None,
    /// Submit the current draft.
    Submit,
    /// Exit the application.
    Quit,
}

/// Screen state: the form draft, the record list, and the operation status.
pub struct FeedScreen {
    name_input: TextInput,
    age_input: TextInput,
    focus: FocusField,
    status: UiStatus,
    records: Vec<Record>,
    submitting: bool,
}

impl FeedScreen {
    /// Creates the screen with an empty draft and no records.
    #[must_use]
    pub fn new() -> Self {
        let mut name_input = TextInput::new(" Name ").placeholder("Enter a name...");
        name_input.set_focused(true);
        let age_input = TextInput::new(" Age ")
            .numeric()
            .placeholder("Enter an age...");

        Self {
            name_input,
            age_input,
            focus: FocusField::Name,
            status: UiStatus::Idle,
            records: Vec::new(),
            submitting: false,
        }
    }

    /// Returns the current draft built from the form fields.
    #[must_use]
    pub fn draft(&self) -> RecordDraft {
        RecordDraft {
            name: self.name_input.value().to_string(),
            age: self.age_input.value().to_string(),
        }
    }

    /// Clears both form fields.
    pub fn clear_draft(&mut self) {
        self.name_input.clear();
        self.age_input.clear();
    }

    /// Returns the displayed records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the displayed record list wholesale.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &UiStatus {
        &self.status
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Sets loading status.
    pub fn set_loading(&mut self) {
        self.status = UiStatus::Loading;
    }

    /// Sets idle status.
    pub fn set_idle(&mut self) {
        self.status = UiStatus::Idle;
    }

    /// Sets success status.
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.status = UiStatus::Success(message.into());
    }

    /// Sets error status.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = UiStatus::Error(message.into());
    }

    /// Marks a submission as started and clears the previous status.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.status = UiStatus::Loading;
    }

    /// Marks the in-flight submission as completed.
    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FocusField::Name => &mut self.name_input,
            FocusField::Age => &mut self.age_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusField::Name => FocusField::Age,
            FocusField::Age => FocusField::Name,
        };
        self.name_input.set_focused(self.focus == FocusField::Name);
        self.age_input.set_focused(self.focus == FocusField::Age);
    }

    fn draft_is_empty(&self) -> bool {
        self.name_input.value().is_empty() && self.age_input.value().is_empty()
    }

    /// Handles a key event, returning the requested action.
    ///
    /// Submit is only emitted when both fields are filled and no submission
    /// is already in flight. `q` quits while both fields are still empty;
    /// once either holds text it is ordinary input.
    pub fn handle_key(&mut self, key: KeyEvent) -> FeedAction {
        if EventHandler::is_quit_event(&key) {
            return FeedAction::Quit;
        }

        if key.code == KeyCode::Char('q')
            && key.modifiers == KeyModifiers::NONE
            && self.draft_is_empty()
        {
            return FeedAction::Quit;
        }

        if EventHandler::is_focus_next_event(&key) || EventHandler::is_focus_prev_event(&key) {
            self.toggle_focus();
            return FeedAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            if !self.submitting && !self.draft().is_incomplete() {
                return FeedAction::Submit;
            }
            return FeedAction::None;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.focused_input_mut().input_char(c);
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
            }
            KeyCode::Left => {
                self.focused_input_mut().move_left();
            }
            KeyCode::Right => {
                self.focused_input_mut().move_right();
            }
            KeyCode::Home => {
                self.focused_input_mut().move_start();
            }
            KeyCode::End => {
                self.focused_input_mut().move_end();
            }
            _ => {}
        }

        FeedAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [title_area, form_area, status_area, table_area] = vertical.areas(area);

        let title = Paragraph::new("intFeed").style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        title.render(title_area, buf);

        let form_block = Block::default()
            .borders(Borders::ALL)
            .title(" Add a new record ");
        let form_inner = form_block.inner(form_area);
        form_block.render(form_area, buf);

        let inputs = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]);
        let [name_area, age_area] = inputs.areas(form_inner);
        (&self.name_input).render(name_area, buf);
        (&self.age_input).render(age_area, buf);

        StatusLine::new(&self.status).render(status_area, buf);

        let list_loading = self.status.is_loading() && self.records.is_empty();
        RecordsTable::new(&self.records, list_loading).render(table_area, buf);
    }
}

impl Default for FeedScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &FeedScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
