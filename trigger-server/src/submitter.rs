use async_trait::async_trait;
use tracing::info;
use trigger_common::{
    error::Error, submission::SubmissionRequest, submitter::PipelineJobSubmitter,
};

/// Dry-run submitter wired in by default.
/// ---
/// Logs the job it would hand to the managed service. The production
/// client sits behind the same [`PipelineJobSubmitter`] seam.
pub struct LoggingSubmitter;

#[async_trait]
impl PipelineJobSubmitter for LoggingSubmitter {
    async fn submit_pipeline_job_with_persistent_resource(
        &self,
        request: &SubmissionRequest,
    ) -> Result<(), Error> {
        info!(
            project_id = %request.project_id,
            location = %request.location,
            pipeline_root = %request.pipeline_root,
            template = %request.pipeline_template_path,
            service_account = %request.service_account,
            enable_caching = request.enable_caching,
            persistent_resource = request.persistent_resource_name.as_deref().unwrap_or("-"),
            parameters = request.pipeline_parameters.len(),
            "Submitting pipeline job"
        );

        Ok(())
    }
}
