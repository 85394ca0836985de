//! Shared test fixtures: in-memory repositories and HTTP helpers
//!
//! The in-memory repositories mirror the Postgres adapters' semantics
//! (oldest-first ordering, `NotFound` on updating a missing document, no
//! cascading deletes) so the router can be driven without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rolodex_api::api::{self, AppState};
use rolodex_api::domain::communication::Communication;
use rolodex_api::domain::company::Company;
use rolodex_api::domain::errors::{CrmError, CrmResult};
use rolodex_api::domain::next_communication::NextCommunication;
use rolodex_api::domain::repositories::{
    CommunicationRepository, CompanyRepository, NextCommunicationRepository,
};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

/// In-memory companies collection, insertion ordered
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    docs: Mutex<Vec<Company>>,
    /// When set, `update` fails with a store error
    pub fail_updates: AtomicBool,
}

impl InMemoryCompanyRepository {
    pub fn snapshot(&self, id: Uuid) -> Option<Company> {
        self.docs.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, company: &Company) -> CrmResult<()> {
        self.docs.lock().unwrap().push(company.clone());
        Ok(())
    }

    async fn find_all(&self) -> CrmResult<Vec<Company>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<Company>> {
        Ok(self.snapshot(id))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Company>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn update(&self, company: &Company) -> CrmResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(CrmError::store("simulated company write failure"));
        }
        let mut docs = self.docs.lock().unwrap();
        let slot = docs
            .iter_mut()
            .find(|c| c.id == company.id)
            .ok_or(CrmError::NotFound("Company"))?;
        *slot = company.clone();
        Ok(())
    }

    async fn update_details(&self, company: &Company, include_next: bool) -> CrmResult<()> {
        let mut docs = self.docs.lock().unwrap();
        let slot = docs
            .iter_mut()
            .find(|c| c.id == company.id)
            .ok_or(CrmError::NotFound("Company"))?;
        let history = std::mem::take(&mut slot.last_communications);
        let next = slot.next_communication.take();
        *slot = Company {
            last_communications: history,
            next_communication: if include_next {
                company.next_communication.clone()
            } else {
                next
            },
            ..company.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<Company>> {
        let mut docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .position(|c| c.id == id)
            .map(|idx| docs.remove(idx)))
    }
}

/// In-memory communications collection
#[derive(Default)]
pub struct InMemoryCommunicationRepository {
    docs: Mutex<Vec<Communication>>,
    /// When set, `insert` fails with a store error
    pub fail_inserts: AtomicBool,
}

impl InMemoryCommunicationRepository {
    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

#[async_trait]
impl CommunicationRepository for InMemoryCommunicationRepository {
    async fn insert(&self, communication: &Communication) -> CrmResult<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(CrmError::store("simulated communication write failure"));
        }
        self.docs.lock().unwrap().push(communication.clone());
        Ok(())
    }

    async fn find_all(&self) -> CrmResult<Vec<Communication>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CrmResult<Vec<Communication>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<Communication>> {
        let mut docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .position(|c| c.id == id)
            .map(|idx| docs.remove(idx)))
    }
}

/// In-memory next-communications collection
#[derive(Default)]
pub struct InMemoryNextCommunicationRepository {
    docs: Mutex<Vec<NextCommunication>>,
}

#[async_trait]
impl NextCommunicationRepository for InMemoryNextCommunicationRepository {
    async fn insert(&self, next: &NextCommunication) -> CrmResult<()> {
        self.docs.lock().unwrap().push(next.clone());
        Ok(())
    }

    async fn find_active(&self, company_id: Option<Uuid>) -> CrmResult<Vec<NextCommunication>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.is_completed)
            .filter(|n| company_id.map_or(true, |id| n.company_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> CrmResult<Option<NextCommunication>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn update(&self, next: &NextCommunication) -> CrmResult<()> {
        let mut docs = self.docs.lock().unwrap();
        let slot = docs
            .iter_mut()
            .find(|n| n.id == next.id)
            .ok_or(CrmError::NotFound("Next communication"))?;
        *slot = next.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CrmResult<Option<NextCommunication>> {
        let mut docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .position(|n| n.id == id)
            .map(|idx| docs.remove(idx)))
    }
}

/// Repositories behind a test app, kept for direct inspection
#[derive(Clone, Default)]
pub struct TestStore {
    pub companies: Arc<InMemoryCompanyRepository>,
    pub communications: Arc<InMemoryCommunicationRepository>,
    pub next_communications: Arc<InMemoryNextCommunicationRepository>,
}

impl TestStore {
    pub fn state(&self) -> AppState {
        AppState::new(
            self.companies.clone(),
            self.communications.clone(),
            self.next_communications.clone(),
        )
    }
}

/// Setup test application over a fresh in-memory store
pub fn setup_app() -> (Router, TestStore) {
    let store = TestStore::default();
    (api::router(store.state()), store)
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// POST a company and return its id
pub async fn create_company(app: &Router, name: &str, location: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/companies",
        Some(serde_json::json!({ "name": name, "location": location })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["company"]["_id"].as_str().unwrap().to_string()
}
