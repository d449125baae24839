use tracing::{error, info};
use uuid::Uuid;

use trigger_common::{
    error::Error,
    event::PushEnvelope,
    submission::{DispatchOutcome, RawSubmission, SubmissionRequest},
    submitter::PipelineJobSubmitter,
};

/// Response handed back to the event-delivery runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerResponse {
    pub message: String,
    pub status_code: u16,
}

impl TriggerResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 200,
        }
    }

    pub fn from_error(err: &Error) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status_code(),
        }
    }

    pub fn into_parts(self) -> (String, u16) {
        (self.message, self.status_code)
    }
}

/// Decodes a Pub/Sub push delivery and dispatches the pipeline job
/// submission it carries.
/// ---
/// Stateless and reentrant; each invocation is a single best-effort
/// attempt. Redelivered messages are submitted again, deduplication is
/// the publisher's problem.
pub struct SubmitHandler<S> {
    submitter: S,
}

impl<S: PipelineJobSubmitter> SubmitHandler<S> {
    pub fn new(submitter: S) -> Self {
        Self { submitter }
    }

    /// Never errors and never panics: every failure is converted to a
    /// (message, 500) response at this boundary, so the hosting runtime
    /// never sees an unhandled crash.
    pub async fn handle(&self, raw_event: &[u8]) -> TriggerResponse {
        let invocation_id = Uuid::new_v4();

        match self.try_handle(raw_event).await {
            Ok(request) => {
                info!(
                    %invocation_id,
                    outcome = %DispatchOutcome::Dispatched,
                    project_id = %request.project_id,
                    template = %request.pipeline_template_path,
                    "Pipeline job submitted"
                );

                TriggerResponse::ok("Pipeline job submitted successfully")
            }
            Err(e) => {
                error!(
                    %invocation_id,
                    outcome = %DispatchOutcome::Rejected,
                    "Failed to submit pipeline job: {}",
                    e
                );

                TriggerResponse::from_error(&e)
            }
        }
    }

    /// Parse envelope -> decode payload -> validate -> dispatch.
    /// The submitter is called exactly once, and only after validation
    /// has produced a complete request.
    async fn try_handle(&self, raw_event: &[u8]) -> Result<SubmissionRequest, Error> {
        let envelope: PushEnvelope = serde_json::from_slice(raw_event)?;

        let payload = envelope.message.decode_data()?;
        let raw: RawSubmission = serde_json::from_str(&payload)?;
        let request = raw.validate()?;

        self.submitter
            .submit_pipeline_job_with_persistent_resource(&request)
            .await?;

        Ok(request)
    }
}
