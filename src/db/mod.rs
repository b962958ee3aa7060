//! Store adapter for Employee records.
//!
//! Handlers talk to the store only through [`EmployeeStore`]. The production
//! implementation is [`MongoEmployeeStore`]; [`InMemoryEmployeeStore`] backs
//! tests and local runs without a database.
//!
//! None of the operations retry or cache. A request that goes away (client
//! disconnect) drops the handler future and with it any in-flight store call
//! and open cursor.

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreResult;
use crate::models::{Employee, EmployeeFields};

pub use memory::InMemoryEmployeeStore;
pub use mongo::MongoEmployeeStore;

/// Shared store handle injected into route handlers.
///
/// Usage in route handlers:
/// ```ignore
/// async fn my_handler(
///     Extension(store): Extension<AppDb>,
/// ) -> impl IntoResponse {
///     let employees = store.list().await?;
/// }
/// ```
pub type AppDb = Arc<dyn EmployeeStore>;

/// The five primitive operations over the employee collection.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employees, unfiltered.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Insert a new record and return the identifier the store assigned.
    /// Any `id` already on `employee` is not sent.
    async fn insert(&self, employee: &Employee) -> StoreResult<ObjectId>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Employee>>;

    /// Atomically overwrite `name`, `salary` and `age`. Returns whether a
    /// document matched.
    async fn update_by_id(&self, id: ObjectId, fields: &EmployeeFields) -> StoreResult<bool>;

    /// Delete at most one document, returning how many were removed.
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64>;
}
