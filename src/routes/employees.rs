//! Employee resource routes.
//!
//! GET    /employee     - List every employee
//! POST   /employee     - Create an employee
//! GET    /employee/:id - Retrieve an employee by ID
//! PUT    /employee/:id - Overwrite name, salary and age
//! DELETE /employee/:id - Delete an employee
//!
//! IDs travel as 24-character hex strings. A malformed ID is a 400 with an
//! empty body on every route.

use axum::extract::{FromRequest, Path, Request};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::db::AppDb;
use crate::error::ApiError;
use crate::models::{Employee, EmployeeRequest, EmployeeResponse};

/// Body returned by a successful delete. Existing clients match on this exact
/// string, spelling included.
pub const DELETED_MESSAGE: &str = "Sucessfully deleted";

/// Build the employee router.
pub fn router() -> Router {
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route(
            "/employee/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// JSON body extractor that turns every rejection into a 400 carrying the
/// parser's message. Plain `Json` would answer 415 or 422 for some of them.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::bad_request())
}

/// List all employees. An empty collection yields `[]`.
async fn list_employees(
    Extension(store): Extension<AppDb>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = store.list().await.map_err(|e| {
        error!("Failed to list employees: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Insert an employee and return it with its assigned ID.
///
/// The record is read back from the store. If that read fails the inserted
/// body is returned with the new ID instead.
async fn create_employee(
    Extension(store): Extension<AppDb>,
    JsonBody(req): JsonBody<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = Employee::from(req);

    let id = store.insert(&employee).await.map_err(|e| {
        error!("Failed to insert employee: {}", e);
        ApiError::from(e)
    })?;

    info!("Employee {} created", id);

    let created = match store.find_by_id(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            warn!("Employee {} missing on read-back, returning inserted body", id);
            Employee {
                id: Some(id),
                ..employee
            }
        }
        Err(e) => {
            warn!("Read-back of employee {} failed: {}", id, e);
            Employee {
                id: Some(id),
                ..employee
            }
        }
    };

    Ok(Json(created.into()))
}

/// Overwrite `name`, `salary` and `age` on an existing employee.
///
/// Responds with the request body, not the stored document, so the response
/// never carries `_id`. An unknown ID is a 400.
async fn update_employee(
    Extension(store): Extension<AppDb>,
    Path(id): Path<String>,
    body: Result<JsonBody<EmployeeRequest>, ApiError>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let id = parse_id(&id)?;
    let JsonBody(req) = body?;

    let matched = store.update_by_id(id, &req.fields()).await.map_err(|e| {
        error!("Failed to update employee {}: {}", id, e);
        ApiError::from(e)
    })?;

    if !matched {
        return Err(ApiError::bad_request());
    }

    info!("Employee {} updated", id);
    Ok(Json(req.into()))
}

/// Retrieve an employee by ID. Any failure to fetch is reported as 404.
async fn get_employee(
    Extension(store): Extension<AppDb>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let id = parse_id(&id)?;

    match store.find_by_id(id).await {
        Ok(Some(employee)) => Ok(Json(employee.into())),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            debug!("Lookup of employee {} failed: {}", id, e);
            Err(ApiError::NotFound)
        }
    }
}

/// Delete an employee by ID.
async fn delete_employee(
    Extension(store): Extension<AppDb>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = store.delete_by_id(id).await.map_err(|e| {
        error!("Failed to delete employee {}: {}", id, e);
        ApiError::from(e)
    })?;

    if deleted < 1 {
        return Err(ApiError::NotFound);
    }

    info!("Employee {} deleted", id);
    Ok(Json(DELETED_MESSAGE))
}
