use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ReadPreference, SelectionCriteria};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::EmployeeStore;
use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{Employee, EmployeeFields};

/// [`EmployeeStore`] backed by a MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoEmployeeStore {
    collection: Collection<Employee>,
}

impl MongoEmployeeStore {
    /// Connect to the configured deployment and ping the primary.
    ///
    /// The driver connects lazily, so the ping is what actually proves the
    /// server is reachable.
    pub async fn connect(config: &AppConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await?;

        info!(
            "Connected to MongoDB at {} ({}.{})",
            config.mongodb_uri, config.database, config.collection
        );

        Ok(Self::new(database.collection(&config.collection)))
    }

    pub fn new(collection: Collection<Employee>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let cursor = self.collection.find(doc! {}).await?;
        let employees: Vec<Employee> = cursor.try_collect().await?;
        debug!("Listed {} employees", employees.len());
        Ok(employees)
    }

    async fn insert(&self, employee: &Employee) -> StoreResult<ObjectId> {
        let record = Employee {
            id: None,
            ..employee.clone()
        };
        let result = self.collection.insert_one(&record).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingInsertedId(result.inserted_id.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Employee>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_by_id(&self, id: ObjectId, fields: &EmployeeFields) -> StoreResult<bool> {
        let update = doc! {
            "$set": {
                "name": fields.name.clone(),
                "age": fields.age,
                "salary": fields.salary,
            }
        };
        // Only the match matters; the pre-image is never decoded as an Employee,
        // so an off-schema document cannot fail a write that already happened.
        let previous = self
            .collection
            .clone_with_type::<Document>()
            .find_one_and_update(doc! { "_id": id }, update)
            .projection(doc! { "_id": 1 })
            .await?;
        Ok(previous.is_some())
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
