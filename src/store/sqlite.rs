/// SQLite persistence for projects and contact messages
///
/// One database file holds both tables. Tags are kept as a JSON array column
/// so their display order survives the round trip.

use crate::store::{
    types::{Contact, NewContact, NewProject, Project},
    PortfolioStore, StoreError, StoreResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use std::path::Path;

/// sqlx-backed store over a single SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an existing pool. Call `init_schema` before first use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file at `path` and prepare the schema
    pub async fn connect(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!(
                    "failed to create database directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tracing::info!("🗄️ Opening portfolio database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Private in-memory database. The pool is pinned to a single connection
    /// that never expires, otherwise each connection would see an empty database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the projects and contacts tables.
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_url TEXT,
                tags JSON NOT NULL DEFAULT '[]',
                project_url TEXT,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Close the underlying pool. Later calls fail with `StoreError::Database`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PortfolioStore for SqliteStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, title, description, image_url, tags, project_url, created_at \
             FROM projects ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn get_project(&self, id: i64) -> StoreResult<Option<Project>> {
        let row = sqlx::query(
            "SELECT id, title, description, image_url, tags, project_url, created_at \
             FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn create_project(&self, project: NewProject) -> StoreResult<Project> {
        let tags_json = serde_json::to_string(&project.tags)?;
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, image_url, tags, project_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&tags_json)
        .bind(&project.project_url)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(project.into_project(result.last_insert_rowid(), created_at))
    }

    async fn count_projects(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, created_at FROM contacts ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(contact_from_row).collect()
    }

    async fn create_contact(&self, contact: NewContact) -> StoreResult<Contact> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO contacts (name, email, subject, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(contact.into_contact(result.last_insert_rowid(), created_at))
    }
}

fn project_from_row(row: &SqliteRow) -> StoreResult<Project> {
    let tags_json: String = row.try_get("tags")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        tags: serde_json::from_str(&tags_json)?,
        project_url: row.try_get("project_url")?,
        created_at,
    })
}

fn contact_from_row(row: &SqliteRow) -> StoreResult<Contact> {
    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}
