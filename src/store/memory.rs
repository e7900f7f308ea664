/// In-process store for ephemeral runs
///
/// Records live in insertion-ordered vectors behind a tokio `RwLock`; ids
/// come from per-table counters so they are never reused.

use crate::store::{
    types::{Contact, NewContact, NewProject, Project},
    PortfolioStore, StoreResult,
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    contacts: Vec<Contact>,
    next_project_id: i64,
    next_contact_id: i64,
}

/// Volatile store; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.tables.read().await.projects.clone())
    }

    async fn get_project(&self, id: i64) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, project: NewProject) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;
        tables.next_project_id += 1;
        let stored = project.into_project(tables.next_project_id, Utc::now());
        tables.projects.push(stored.clone());
        Ok(stored)
    }

    async fn count_projects(&self) -> StoreResult<u64> {
        Ok(self.tables.read().await.projects.len() as u64)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.tables.read().await.contacts.clone())
    }

    async fn create_contact(&self, contact: NewContact) -> StoreResult<Contact> {
        let mut tables = self.tables.write().await;
        tables.next_contact_id += 1;
        let stored = contact.into_contact(tables.next_contact_id, Utc::now());
        tables.contacts.push(stored.clone());
        Ok(stored)
    }
}
