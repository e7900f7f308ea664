//! End-to-end tests: the router is served on an ephemeral port and driven
//! over real HTTP.

use async_trait::async_trait;
use portfolio_api::{
    build_router,
    store::{
        Contact, MemoryStore, NewContact, NewProject, PortfolioStore, Project, SqliteStore,
        StoreError, StoreResult,
    },
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::net::TcpListener;

async fn spawn_app(store: Arc<dyn PortfolioStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(store)).await.unwrap();
    });
    format!("http://{}", addr)
}

fn valid_contact() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "New project",
        "message": "Could you design our landing page?"
    })
}

/// Memory store whose operations can be switched to fail
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    offline: AtomicBool,
}

impl FlakyStore {
    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PortfolioStore for FlakyStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.check()?;
        self.inner.list_projects().await
    }

    async fn get_project(&self, id: i64) -> StoreResult<Option<Project>> {
        self.check()?;
        self.inner.get_project(id).await
    }

    async fn create_project(&self, project: NewProject) -> StoreResult<Project> {
        self.check()?;
        self.inner.create_project(project).await
    }

    async fn count_projects(&self) -> StoreResult<u64> {
        self.check()?;
        self.inner.count_projects().await
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.check()?;
        self.inner.list_contacts().await
    }

    async fn create_contact(&self, contact: NewContact) -> StoreResult<Contact> {
        self.check()?;
        self.inner.create_contact(contact).await
    }
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(Arc::new(MemoryStore::new())).await;

    let response = reqwest::get(format!("{}/healthz", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_empty_store_lists_no_projects() {
    let base = spawn_app(Arc::new(SqliteStore::in_memory().await.unwrap())).await;

    let response = reqwest::get(format!("{}/api/projects", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let projects: Vec<Value> = response.json().await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_valid_contact_is_echoed_back() {
    let base = spawn_app(Arc::new(SqliteStore::in_memory().await.unwrap())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/contacts", base))
        .json(&valid_contact())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let contact: Value = response.json().await.unwrap();
    for field in ["name", "email", "subject", "message"] {
        assert_eq!(contact[field], valid_contact()[field]);
    }
    assert!(contact["id"].is_i64());
    assert!(contact["createdAt"].is_string());
}

#[tokio::test]
async fn test_missing_contact_field_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;
    let client = reqwest::Client::new();

    for field in ["name", "email", "subject", "message"] {
        let mut body = valid_contact();
        body.as_object_mut().unwrap().remove(field);

        let response = client
            .post(format!("{}/api/contacts", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {}", field);

        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "validation_error");
        assert!(error["message"].as_str().unwrap().contains(field));
    }

    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let mut body = valid_contact();
    body["email"] = json!("not-an-email");

    let response = reqwest::Client::new()
        .post(format!("{}/api/contacts", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let base = spawn_app(Arc::new(MemoryStore::new())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contacts", base))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "validation_error");
}

#[tokio::test]
async fn test_wrongly_typed_field_is_a_validation_error() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let mut body = valid_contact();
    body["name"] = json!(42);

    let response = reqwest::Client::new()
        .post(format!("{}/api/contacts", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "validation_error");
    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_a_validation_error() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contacts", base))
        .body(valid_contact().to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "validation_error");
    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let mut body = valid_contact();
    body["message"] = json!("x".repeat(3 * 1024 * 1024));

    let response = reqwest::Client::new()
        .post(format!("{}/api/contacts", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "payload_too_large");
    assert!(store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repeated_submissions_create_distinct_records() {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());
    let base = spawn_app(store.clone()).await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let contact: Value = client
            .post(format!("{}/api/contacts", base))
            .json(&valid_contact())
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(contact["id"].as_i64().unwrap());
    }
    assert_ne!(ids[0], ids[1]);

    let inbox: Vec<Value> = reqwest::get(format!("{}/api/contacts", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(inbox.len(), 2);
}

#[tokio::test]
async fn test_store_failure_returns_server_error_and_keeps_data() {
    let store = Arc::new(FlakyStore::default());
    let base = spawn_app(store.clone()).await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{}/api/contacts", base))
        .json(&valid_contact())
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    store.set_offline(true);
    let mut body = valid_contact();
    body["name"] = json!("Grace Hopper");
    let failed = client
        .post(format!("{}/api/contacts", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = failed.json().await.unwrap();
    assert_eq!(error["error"], "storage_unavailable");

    let listing = reqwest::get(format!("{}/api/projects", base)).await.unwrap();
    assert_eq!(listing.status(), StatusCode::INTERNAL_SERVER_ERROR);

    store.set_offline(false);
    let contacts = store.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn test_showcase_falls_back_to_samples() {
    let store = Arc::new(FlakyStore::default());
    let base = spawn_app(store.clone()).await;

    let empty: Value = reqwest::get(format!("{}/api/projects/showcase", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty["source"], "fallback");
    assert_eq!(empty["projects"].as_array().unwrap().len(), 6);

    store.set_offline(true);
    let response = reqwest::get(format!("{}/api/projects/showcase", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let offline: Value = response.json().await.unwrap();
    assert_eq!(offline["source"], "fallback");
}

#[tokio::test]
async fn test_project_create_fetch_and_list() {
    let base = spawn_app(Arc::new(SqliteStore::in_memory().await.unwrap())).await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/api/projects", base))
        .json(&json!({
            "title": "Mobile Banking App",
            "description": "Secure banking with financial tracking.",
            "tags": ["Mobile", "Fintech"],
            "projectUrl": "https://example.com/bank"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["imageUrl"], Value::Null);

    let fetched: Value = reqwest::get(format!("{}/api/projects/{}", base, id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["title"], "Mobile Banking App");
    assert_eq!(fetched["tags"], json!(["Mobile", "Fintech"]));

    let listed: Vec<Value> = reqwest::get(format!("{}/api/projects", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let showcase: Value = reqwest::get(format!("{}/api/projects/showcase", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(showcase["source"], "live");

    let missing = reqwest::get(format!("{}/api/projects/{}", base, id + 1)).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_project_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/projects", base))
        .json(&json!({ "title": "", "description": "No title", "imageUrl": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count_projects().await.unwrap(), 0);
}
