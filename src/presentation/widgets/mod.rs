//! Reusable widgets.

/// Text input field.
pub mod input;
/// Stored records table.
pub mod records_table;
/// Operation status line.
pub mod status_line;

pub use input::TextInput;
pub use records_table::RecordsTable;
pub use status_line::{StatusLine, UiStatus};
