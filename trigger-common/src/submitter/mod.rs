use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::Error, submission::SubmissionRequest};

/// The external collaborator that talks to the managed pipeline
/// execution service.
/// ---
/// Auth, network retries, and run polling all live behind this seam.
/// The handler only guarantees it is called at most once per
/// invocation, with a fully validated request.
#[async_trait]
pub trait PipelineJobSubmitter: Send + Sync + 'static {
    async fn submit_pipeline_job_with_persistent_resource(
        &self,
        request: &SubmissionRequest,
    ) -> Result<(), Error>;
}

#[async_trait]
impl<S: PipelineJobSubmitter> PipelineJobSubmitter for Arc<S> {
    async fn submit_pipeline_job_with_persistent_resource(
        &self,
        request: &SubmissionRequest,
    ) -> Result<(), Error> {
        self.as_ref()
            .submit_pipeline_job_with_persistent_resource(request)
            .await
    }
}
