/// Record types held by the portfolio store
///
/// `Project` and `Contact` are what the store hands back; `NewProject` and
/// `NewContact` are what callers hand in. Identifiers and timestamps are only
/// ever assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio gallery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned identifier, increasing in insertion order
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Cover image shown on the project card
    pub image_url: Option<String>,
    /// Short labels; order is display order
    pub tags: Vec<String>,
    /// External link to the live project or case study
    pub project_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A project about to be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub project_url: Option<String>,
}

impl NewProject {
    /// Attach store-assigned fields
    pub fn into_project(self, id: i64, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            tags: self.tags,
            project_url: self.project_url,
            created_at,
        }
    }
}

/// A message received through the contact form. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A validated contact submission about to be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContact {
    pub fn into_contact(self, id: i64, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}
