/// Request bodies accepted by the API
///
/// Fields default to empty so a missing field is reported as a validation
/// problem rather than a deserialization failure. Text is trimmed before it
/// is validated or stored.

use crate::{
    error::{ApiError, ApiResult},
    store::{NewContact, NewProject},
};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Longest tag accepted on a project
pub const MAX_TAG_LEN: usize = 32;
/// Most tags a single project may carry
pub const MAX_TAGS: usize = 16;

/// Contact form submission
///
/// POST /api/contacts
/// Body: { "name": "...", "email": "...", "subject": "...", "message": "..." }
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl ContactSubmission {
    /// Trim, validate and convert into a store record
    pub fn into_new_contact(self) -> ApiResult<NewContact> {
        let submission = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if let Err(errors) = submission.validate() {
            return Err(ApiError::Validation(describe(&errors).join("; ")));
        }

        Ok(NewContact {
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
        })
    }
}

/// Project creation request
///
/// POST /api/projects
/// Body: { "title": "...", "description": "...", "imageUrl": "...", "tags": [...], "projectUrl": "..." }
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSubmission {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    #[validate(url(message = "projectUrl must be a valid URL"))]
    pub project_url: Option<String>,
}

impl ProjectSubmission {
    /// Trim, validate and convert into a store record. Blank URLs count as absent.
    pub fn into_new_project(self) -> ApiResult<NewProject> {
        let submission = Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: non_blank(self.image_url),
            tags: self.tags.iter().map(|t| t.trim().to_string()).collect(),
            project_url: non_blank(self.project_url),
        };

        let mut problems = match submission.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => describe(&errors),
        };
        problems.extend(tag_problems(&submission.tags));

        if !problems.is_empty() {
            return Err(ApiError::Validation(problems.join("; ")));
        }

        Ok(NewProject {
            title: submission.title,
            description: submission.description,
            image_url: submission.image_url,
            tags: submission.tags,
            project_url: submission.project_url,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn tag_problems(tags: &[String]) -> Vec<String> {
    let mut problems = Vec::new();
    if tags.len() > MAX_TAGS {
        problems.push(format!("at most {} tags are allowed", MAX_TAGS));
    }
    if tags.iter().any(|t| t.is_empty()) {
        problems.push("tags must not be empty".to_string());
    }
    if tags.iter().any(|t| t.chars().count() > MAX_TAG_LEN) {
        problems.push(format!("tags must be at most {} characters", MAX_TAG_LEN));
    }
    problems
}

/// One message per offending field (the first rule it broke), sorted for
/// stable output.
fn describe(errors: &ValidationErrors) -> Vec<String> {
    let mut problems: Vec<String> = errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    problems.sort();
    problems
}
