//! Department models and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::{deserialize_optional_string, deserialize_optional_timestamp};
use samaysetu_core::{ApiError, FieldErrors};

use crate::forms::{finish, non_blank, require};
use crate::ids::DepartmentId;

/// A department. Also used for the nested `department` of other entities,
/// where the backend may send only some of the columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub head_of_department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Department form as filled in by an admin.
#[derive(Debug, Clone, Default)]
pub struct DepartmentForm {
    pub name: String,
    pub code: String,
    pub head_of_department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 10, message = "Code must be at most 10 characters"))]
    pub code: String,
    #[validate(length(max = 100, message = "Head of department must be at most 100 characters"))]
    pub head_of_department: Option<String>,
}

impl DepartmentForm {
    pub fn into_payload(self) -> Result<DepartmentPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "code", &self.code, "Code is required");

        finish(errors, || DepartmentPayload {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            head_of_department: non_blank(self.head_of_department),
        })
    }
}

impl From<&Department> for DepartmentForm {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            code: department.code.clone(),
            head_of_department: department.head_of_department.clone(),
        }
    }
}
