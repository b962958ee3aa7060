//! Domain models for the HRMS service.
//!
//! `Employee` is the document stored in the `employees` collection. The JSON
//! wire types are kept separate so the identifier travels as a 24-character
//! hex string over HTTP while staying a native ObjectId in the store.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Database Models
// ============================================================================

/// An employee record as stored in the document collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: i32,
}

/// The mutable fields written by an update. `_id` is never part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub salary: f64,
    pub age: i32,
}

// ============================================================================
// Request Models (Deserialize from JSON input)
// ============================================================================

/// Request body for create and update.
///
/// Missing or `null` fields take their zero values. An `_id` in the body is
/// ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmployeeRequest {
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            salary: self.salary,
            age: self.age,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            salary: req.salary,
            age: req.age,
        }
    }
}

// ============================================================================
// Response Models
// ============================================================================

/// An employee as returned over HTTP. `_id` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub salary: f64,
    pub age: i32,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(|oid| oid.to_hex()),
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
        }
    }
}

impl From<EmployeeRequest> for EmployeeResponse {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            salary: req.salary,
            age: req.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_omits_absent_id() {
        let body = serde_json::to_value(EmployeeResponse::from(EmployeeRequest {
            name: "A".into(),
            salary: 1.5,
            age: 30,
        }))
        .unwrap();
        assert_eq!(body, json!({"name": "A", "salary": 1.5, "age": 30}));
    }

    #[test]
    fn response_renders_id_as_lowercase_hex() {
        let oid = ObjectId::parse_str("65a1f0c2b3d4e5f60718293a").unwrap();
        let employee = Employee {
            id: Some(oid),
            name: "A".into(),
            salary: 1.5,
            age: 30,
        };
        let body = serde_json::to_value(EmployeeResponse::from(employee)).unwrap();
        assert_eq!(body["_id"], "65a1f0c2b3d4e5f60718293a");
    }

    #[test]
    fn request_defaults_missing_fields_and_ignores_id() {
        let req: EmployeeRequest =
            serde_json::from_value(json!({"_id": "zzz", "name": "B"})).unwrap();
        assert_eq!(
            req,
            EmployeeRequest {
                name: "B".into(),
                salary: 0.0,
                age: 0,
            }
        );
    }

    #[test]
    fn request_treats_null_as_zero_value() {
        let req: EmployeeRequest =
            serde_json::from_value(json!({"name": null, "salary": null, "age": 31})).unwrap();
        assert_eq!(
            req,
            EmployeeRequest {
                name: String::new(),
                salary: 0.0,
                age: 31,
            }
        );
    }

    #[test]
    fn request_rejects_wrong_types() {
        let res = serde_json::from_value::<EmployeeRequest>(json!({"age": "thirty"}));
        assert!(res.is_err());
    }

    #[test]
    fn stored_document_skips_unassigned_id() {
        let doc = mongodb::bson::to_document(&Employee::from(EmployeeRequest::default())).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "");
        assert_eq!(doc.get_f64("salary").unwrap(), 0.0);
        assert_eq!(doc.get_i32("age").unwrap(), 0);
    }
}
