use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::EmployeeStore;
use crate::error::StoreResult;
use crate::models::{Employee, EmployeeFields};

/// [`EmployeeStore`] kept in process memory.
///
/// Identifiers come from [`ObjectId::new`], which increases over time, so
/// `list` returns records in insertion order like a fresh collection would.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<BTreeMap<ObjectId, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn insert(&self, employee: &Employee) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        let record = Employee {
            id: Some(id),
            ..employee.clone()
        };
        self.records.write().await.insert(id, record);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Employee>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_by_id(&self, id: ObjectId, fields: &EmployeeFields) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) => {
                record.name = fields.name.clone();
                record.salary = fields.salary;
                record.age = fields.age;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        Ok(self.records.write().await.remove(&id).map_or(0, |_| 1))
    }
}
