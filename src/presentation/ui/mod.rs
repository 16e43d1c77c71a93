//! UI screens.

/// Main application orchestrator.
pub mod app;
/// Record feed screen.
pub mod feed_screen;

pub use app::App;
pub use feed_screen::{FeedAction, FeedScreen};
