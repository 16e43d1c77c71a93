//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::use_cases::{FetchRecordsUseCase, SubmitRecordUseCase};
use crate::domain::entities::Record;
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordsPort;
use crate::presentation::events::EventResult;
use crate::presentation::ui::{FeedAction, FeedScreen};

/// Message shown when the record list cannot be retrieved.
const FETCH_ERROR_MESSAGE: &str = "Could not retrieve users.";
/// Fallback message for a failed submission without a server error payload.
const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug)]
enum Action {
    RecordsLoaded { seq: u64, records: Vec<Record> },
    RecordsFailed { seq: u64 },
    SubmitSucceeded { message: String },
    SubmitFailed { error: ApiError },
}

/// Application controller: dispatches the two remote operations and folds
/// their outcomes back into screen state.
pub struct App {
    screen: FeedScreen,
    fetch_records: FetchRecordsUseCase,
    submit_record: SubmitRecordUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    fetch_seq: u64,
    running: bool,
}

impl App {
    /// Creates the application over the given record service port.
    #[must_use]
    pub fn new(records_port: Arc<dyn RecordsPort>) -> Self {
        let fetch_records = FetchRecordsUseCase::new(records_port.clone());
        let submit_record = SubmitRecordUseCase::new(records_port);
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: FeedScreen::new(),
            fetch_records,
            submit_record,
            action_tx,
            action_rx,
            fetch_seq: 0,
            running: true,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_fetch(true);

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| frame.render_widget(&self.screen, frame.area()))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event {
                        if self.handle_key(key) == EventResult::Exit {
                            self.running = false;
                        }
                    }
                }
            }

            terminal.draw(|frame| frame.render_widget(&self.screen, frame.area()))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Issues a list-fetch tagged with the next sequence number.
    ///
    /// `show_loading` is false for the quiet re-fetch after a successful
    /// submission, so the success message stays visible while the list
    /// refreshes.
    fn start_fetch(&mut self, show_loading: bool) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;

        if show_loading {
            self.screen.set_loading();
        }

        let use_case = self.fetch_records.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute().await {
                Ok(records) => Action::RecordsLoaded { seq, records },
                Err(e) => {
                    error!(error = %e, "Record fetch failed");
                    Action::RecordsFailed { seq }
                }
            };
            let _ = tx.send(action);
        });
    }

    fn start_submit(&mut self) {
        let draft = self.screen.draft();
        if draft.is_incomplete() {
            return;
        }

        self.screen.begin_submit();

        let use_case = self.submit_record.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute(&draft).await {
                Ok(message) => Action::SubmitSucceeded { message },
                Err(error) => Action::SubmitFailed { error },
            };
            let _ = tx.send(action);
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key) {
            FeedAction::Quit => EventResult::Exit,
            FeedAction::Submit => {
                self.start_submit();
                EventResult::Continue
            }
            FeedAction::None => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RecordsLoaded { seq, records } => {
                if seq != self.fetch_seq {
                    debug!(seq, latest = self.fetch_seq, "Discarding stale record list");
                    return;
                }
                self.screen.set_records(records);
                if self.screen.status().is_loading() {
                    self.screen.set_idle();
                }
            }
            Action::RecordsFailed { seq } => {
                if seq != self.fetch_seq {
                    debug!(seq, latest = self.fetch_seq, "Discarding stale fetch failure");
                    return;
                }
                self.screen.set_error(FETCH_ERROR_MESSAGE);
            }
            Action::SubmitSucceeded { message } => {
                self.screen.end_submit();
                self.screen.set_success(message);
                self.screen.clear_draft();
                self.start_fetch(false);
            }
            Action::SubmitFailed { error } => {
                self.screen.end_submit();
                let message = error
                    .server_message()
                    .map_or_else(|| GENERIC_SUBMIT_ERROR.to_string(), ToString::to_string);
                self.screen.set_error(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mock::MockRecordsPort;
    use crate::presentation::widgets::UiStatus;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill_draft(app: &mut App, name: &str, age: &str) {
        for c in name.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.screen.handle_key(key(KeyCode::Tab));
        for c in age.chars() {
            app.screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    async fn next_action(app: &mut App) -> Action {
        app.action_rx.recv().await.expect("expected an action")
    }

    #[tokio::test]
    async fn test_initialize_populates_records() {
        let port = Arc::new(MockRecordsPort::new(vec![
            Record::new("1", "Ada", 30),
            Record::new("2", "Grace", 45),
        ]));
        let mut app = App::new(port);

        app.start_fetch(true);
        assert!(app.screen.status().is_loading());

        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(app.screen.records().len(), 2);
        assert_eq!(app.screen.status(), &UiStatus::Idle);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_generic_error() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        port.set_list_result(Err(ApiError::api(500, "boom")));
        let mut app = App::new(port);

        app.start_fetch(true);
        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(
            app.screen.status(),
            &UiStatus::Error("Could not retrieve users.".to_string())
        );
        assert!(app.screen.records().is_empty());
    }

    #[tokio::test]
    async fn test_stale_fetch_response_is_discarded() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        let mut app = App::new(port);

        app.fetch_seq = 2;
        app.handle_action(Action::RecordsLoaded {
            seq: 1,
            records: vec![Record::new("old", "Stale", 1)],
        });

        assert!(app.screen.records().is_empty());
    }

    #[tokio::test]
    async fn test_stale_fetch_failure_is_discarded() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        let mut app = App::new(port);

        app.screen.set_idle();
        app.fetch_seq = 2;
        app.handle_action(Action::RecordsFailed { seq: 1 });

        assert_eq!(app.screen.status(), &UiStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_success_clears_draft_and_refetches() {
        let port = Arc::new(MockRecordsPort::new(vec![Record::new("1", "Ada", 30)]));
        port.set_create_result(Ok("Saved".to_string()));
        let mut app = App::new(port.clone());

        fill_draft(&mut app, "Ada", "30");
        assert_eq!(
            app.screen.handle_key(key(KeyCode::Enter)),
            FeedAction::Submit
        );
        app.start_submit();
        assert!(app.screen.is_submitting());

        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(app.screen.status(), &UiStatus::Success("Saved".to_string()));
        assert!(app.screen.draft().name.is_empty());
        assert!(app.screen.draft().age.is_empty());
        assert!(!app.screen.is_submitting());

        // Exactly one re-fetch was issued, and it keeps the success message.
        let refetch = next_action(&mut app).await;
        app.handle_action(refetch);
        assert_eq!(port.list_calls(), 1);
        assert_eq!(app.screen.records().len(), 1);
        assert_eq!(app.screen.status(), &UiStatus::Success("Saved".to_string()));
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_rejection_shows_server_error_and_keeps_draft() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        port.set_create_result(Err(ApiError::api(400, "Age must be positive")));
        let mut app = App::new(port.clone());

        fill_draft(&mut app, "Ada", "30");
        app.start_submit();

        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(
            app.screen.status(),
            &UiStatus::Error("Age must be positive".to_string())
        );
        assert_eq!(app.screen.draft().name, "Ada");
        assert_eq!(app.screen.draft().age, "30");
        // No re-fetch after a failed submission.
        assert_eq!(port.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_rejection_without_payload_uses_generic_message() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        port.set_create_result(Err(ApiError::status(502)));
        let mut app = App::new(port);

        fill_draft(&mut app, "Ada", "30");
        app.start_submit();

        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(
            app.screen.status(),
            &UiStatus::Error("Something went wrong. Please try again.".to_string())
        );
        assert_eq!(app.screen.draft().name, "Ada");
    }

    #[tokio::test]
    async fn test_submit_transport_failure_uses_generic_message() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        port.set_create_result(Err(ApiError::network("connection refused")));
        let mut app = App::new(port);

        fill_draft(&mut app, "Ada", "30");
        app.start_submit();

        let action = next_action(&mut app).await;
        app.handle_action(action);

        assert_eq!(
            app.screen.status(),
            &UiStatus::Error("Something went wrong. Please try again.".to_string())
        );
    }

    #[tokio::test]
    async fn test_newer_fetch_wins_regardless_of_arrival_order() {
        let port = Arc::new(MockRecordsPort::new(vec![Record::new("1", "Ada", 30)]));
        let mut app = App::new(port.clone());

        app.start_fetch(true);
        let first = next_action(&mut app).await;

        port.set_list_result(Ok(vec![
            Record::new("1", "Ada", 30),
            Record::new("2", "Grace", 45),
        ]));
        app.start_fetch(true);
        let second = next_action(&mut app).await;

        // Apply the newer completion first, then the stale one.
        app.handle_action(second);
        app.handle_action(first);

        assert_eq!(app.screen.records().len(), 2);
    }

    #[tokio::test]
    async fn test_quit_key_exits() {
        let port = Arc::new(MockRecordsPort::new(vec![]));
        let mut app = App::new(port);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }
}
