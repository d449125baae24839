pub mod handler;

pub use handler::{SubmitHandler, TriggerResponse};
