pub mod error;
pub mod event;
pub mod submission;
pub mod submitter;
