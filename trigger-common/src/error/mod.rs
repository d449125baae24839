#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    #[error("Submission Error: {0}")]
    Submission(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP-style status reported back to the event-delivery runtime.
    /// Every failure class surfaces as 500; the handler boundary never
    /// lets an error escape as anything but a (message, status) pair.
    pub fn status_code(&self) -> u16 {
        500
    }
}
