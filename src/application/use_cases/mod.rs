//! Use case implementations.

/// List-records use case.
pub mod fetch_records;
/// Create-record use case.
pub mod submit_record;

pub use fetch_records::FetchRecordsUseCase;
pub use submit_record::SubmitRecordUseCase;
