#![allow(dead_code)]

use async_trait::async_trait;
use hrms_api::create_app;
use hrms_api::db::{AppDb, EmployeeStore, InMemoryEmployeeStore};
use hrms_api::error::{StoreError, StoreResult};
use hrms_api::models::{Employee, EmployeeFields};
use mongodb::bson::oid::ObjectId;

/// Serve `create_app(store)` on an ephemeral port and return its base URL.
pub async fn spawn_app(store: AppDb) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_app(store))
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

pub fn is_object_id_hex(value: &str) -> bool {
    value.len() == 24
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// A store whose every operation fails, for exercising the 5xx paths.
pub struct FailingStore;

pub const FAILURE_MESSAGE: &str = "store offline";

fn offline<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable(FAILURE_MESSAGE.to_string()))
}

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        offline()
    }

    async fn insert(&self, _employee: &Employee) -> StoreResult<ObjectId> {
        offline()
    }

    async fn find_by_id(&self, _id: ObjectId) -> StoreResult<Option<Employee>> {
        offline()
    }

    async fn update_by_id(&self, _id: ObjectId, _fields: &EmployeeFields) -> StoreResult<bool> {
        offline()
    }

    async fn delete_by_id(&self, _id: ObjectId) -> StoreResult<u64> {
        offline()
    }
}

/// Delegates to an in-memory store but fails every lookup, so creates succeed
/// while their read-back does not.
#[derive(Default)]
pub struct ReadBackFails {
    inner: InMemoryEmployeeStore,
}

#[async_trait]
impl EmployeeStore for ReadBackFails {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        self.inner.list().await
    }

    async fn insert(&self, employee: &Employee) -> StoreResult<ObjectId> {
        self.inner.insert(employee).await
    }

    async fn find_by_id(&self, _id: ObjectId) -> StoreResult<Option<Employee>> {
        offline()
    }

    async fn update_by_id(&self, id: ObjectId, fields: &EmployeeFields) -> StoreResult<bool> {
        self.inner.update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        self.inner.delete_by_id(id).await
    }
}
