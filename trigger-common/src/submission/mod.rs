use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

use crate::error::Error;

/// Submission payload as published, before validation.
/// ---
/// Every field is optional so a single serde pass accepts any JSON
/// object; `validate` decides what is actually usable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawSubmission {
    pub project_id: Option<String>,
    pub location: Option<String>,
    pub pipeline_root: Option<String>,
    pub pipeline_parameters: Option<Map<String, Value>>,
    pub pipeline_template_path: Option<String>,
    pub service_account: Option<String>,
    pub enable_caching: Option<bool>,
    pub persistent_resource_name: Option<String>,
}

/// A fully validated pipeline job submission.
/// ---
/// Constructed only through [`RawSubmission::validate`]; no partial
/// request ever reaches the submitter. Lives for a single invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub project_id: String,
    pub location: String,
    pub pipeline_root: String,
    /// Forwarded opaquely to the pipeline run.
    pub pipeline_parameters: Map<String, Value>,
    pub pipeline_template_path: String,
    pub service_account: String,
    pub enable_caching: bool,
    /// Pre-provisioned compute pool to run on, if any.
    pub persistent_resource_name: Option<String>,
}

impl RawSubmission {
    /// Checks presence of all required fields in one pass.
    /// Fails with the full list of missing field names, not just the
    /// first one encountered.
    pub fn validate(self) -> Result<SubmissionRequest, Error> {
        let mut missing = Vec::new();

        if self.project_id.is_none() {
            missing.push("project_id");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.pipeline_root.is_none() {
            missing.push("pipeline_root");
        }
        if self.pipeline_parameters.is_none() {
            missing.push("pipeline_parameters");
        }
        if self.pipeline_template_path.is_none() {
            missing.push("pipeline_template_path");
        }
        if self.service_account.is_none() {
            missing.push("service_account");
        }
        if self.enable_caching.is_none() {
            missing.push("enable_caching");
        }

        match (
            self.project_id,
            self.location,
            self.pipeline_root,
            self.pipeline_parameters,
            self.pipeline_template_path,
            self.service_account,
            self.enable_caching,
        ) {
            (
                Some(project_id),
                Some(location),
                Some(pipeline_root),
                Some(pipeline_parameters),
                Some(pipeline_template_path),
                Some(service_account),
                Some(enable_caching),
            ) => Ok(SubmissionRequest {
                project_id,
                location,
                pipeline_root,
                pipeline_parameters,
                pipeline_template_path,
                service_account,
                enable_caching,
                persistent_resource_name: self.persistent_resource_name,
            }),
            _ => Err(Error::MissingParameters(missing.join(", "))),
        }
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DispatchOutcome {
    Dispatched,
    Rejected,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn full_raw() -> RawSubmission {
        RawSubmission {
            project_id: Some("test-project".to_string()),
            location: Some("us-central1".to_string()),
            pipeline_root: Some("gs://test-bucket/pipeline_root".to_string()),
            pipeline_parameters: Some(
                serde_json::from_str(r#"{"job_name": "test"}"#).unwrap(),
            ),
            pipeline_template_path: Some(
                "us-docker.pkg.dev/project/repo/pipeline".to_string(),
            ),
            service_account: Some("test@gserviceaccount.com".to_string()),
            enable_caching: Some(false),
            persistent_resource_name: Some(
                "projects/123/locations/us/persistentResources/test".to_string(),
            ),
        }
    }

    #[test]
    fn validates_complete_submission_field_for_field() {
        let request = full_raw().validate().unwrap();

        assert_eq!(request.project_id, "test-project");
        assert_eq!(request.location, "us-central1");
        assert_eq!(request.pipeline_root, "gs://test-bucket/pipeline_root");
        assert_eq!(
            request.pipeline_parameters.get("job_name"),
            Some(&Value::String("test".to_string()))
        );
        assert_eq!(
            request.pipeline_template_path,
            "us-docker.pkg.dev/project/repo/pipeline"
        );
        assert_eq!(request.service_account, "test@gserviceaccount.com");
        assert!(!request.enable_caching);
        assert_eq!(
            request.persistent_resource_name.as_deref(),
            Some("projects/123/locations/us/persistentResources/test")
        );
    }

    #[test]
    fn persistent_resource_name_is_optional() {
        let raw = RawSubmission {
            persistent_resource_name: None,
            ..full_raw()
        };

        let request = raw.validate().unwrap();
        assert_eq!(request.persistent_resource_name, None);
    }

    #[test]
    fn reports_every_missing_field() {
        let err = RawSubmission::default().validate().unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("Missing required parameters"));
        for field in [
            "project_id",
            "location",
            "pipeline_root",
            "pipeline_parameters",
            "pipeline_template_path",
            "service_account",
            "enable_caching",
        ] {
            assert!(msg.contains(field), "missing field {} not reported", field);
        }
        assert!(!msg.contains("persistent_resource_name"));
    }

    #[test]
    fn validation_is_deterministic() {
        let raw = RawSubmission {
            project_id: None,
            ..full_raw()
        };

        let first = raw.clone().validate().unwrap_err().to_string();
        let second = raw.validate().unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_from_str() {
        let o = DispatchOutcome::from_str("DISPATCHED").unwrap();
        assert_eq!(o, DispatchOutcome::Dispatched);
        assert_eq!(o.to_string(), "DISPATCHED");
    }
}
