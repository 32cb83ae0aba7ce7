//! Division models, payloads and list filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::deserialize_optional_timestamp;
use samaysetu_core::{ApiError, FieldErrors};

use crate::academic_years::AcademicYear;
use crate::courses::default_true;
use crate::departments::Department;
use crate::forms::{finish, require, require_some};
use crate::ids::{AcademicYearId, DepartmentId, DivisionId};
use crate::value_types::IdRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
    #[serde(default = "first_year")]
    pub year: i32,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub total_students: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub department: Option<Department>,
    pub academic_year: Option<AcademicYear>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn first_year() -> i32 {
    1
}

/// Display label for a year of study.
pub fn year_label(year: i32) -> String {
    match year {
        1 => "FY (First Year)".to_string(),
        2 => "SY (Second Year)".to_string(),
        3 => "TY (Third Year)".to_string(),
        4 => "BTech (Final Year)".to_string(),
        other => format!("Year {}", other),
    }
}

#[derive(Debug, Clone)]
pub struct DivisionForm {
    pub name: String,
    pub year: i32,
    pub branch: String,
    pub total_students: Option<i32>,
    pub department_id: Option<DepartmentId>,
    pub academic_year_id: Option<AcademicYearId>,
}

impl Default for DivisionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            year: first_year(),
            branch: String::new(),
            total_students: None,
            department_id: None,
            academic_year_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DivisionPayload {
    #[validate(length(max = 10, message = "Division name must be at most 10 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: i32,
    #[validate(length(max = 50, message = "Branch must be at most 50 characters"))]
    pub branch: String,
    #[validate(range(min = 0, message = "Total students cannot be negative"))]
    pub total_students: i32,
    pub department: IdRef<DepartmentId>,
    pub academic_year: IdRef<AcademicYearId>,
}

impl DivisionForm {
    pub fn into_payload(self) -> Result<DivisionPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Division name is required");
        require(&mut errors, "branch", &self.branch, "Branch is required");
        require_some(
            &mut errors,
            "departmentId",
            &self.department_id,
            "Department is required",
        );
        require_some(
            &mut errors,
            "academicYearId",
            &self.academic_year_id,
            "Academic year is required",
        );
        require_some(
            &mut errors,
            "totalStudents",
            &self.total_students,
            "Total students is required",
        );

        finish(errors, || DivisionPayload {
            name: self.name.trim().to_string(),
            year: self.year,
            branch: self.branch.trim().to_string(),
            total_students: self.total_students.unwrap_or_default(),
            department: IdRef::new(self.department_id.unwrap_or_default()),
            academic_year: IdRef::new(self.academic_year_id.unwrap_or_default()),
        })
    }
}

impl From<&Division> for DivisionForm {
    fn from(division: &Division) -> Self {
        Self {
            name: division.name.clone(),
            year: division.year,
            branch: division.branch.clone(),
            total_students: Some(division.total_students),
            department_id: division.department.as_ref().map(|d| d.id),
            academic_year_id: division.academic_year.as_ref().map(|y| y.id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DivisionFilter {
    pub year: Option<i32>,
    pub department_id: Option<DepartmentId>,
    pub academic_year_id: Option<AcademicYearId>,
}

impl DivisionFilter {
    pub fn matches(&self, division: &Division) -> bool {
        self.year.is_none_or(|year| division.year == year)
            && self
                .department_id
                .is_none_or(|id| division.department.as_ref().is_some_and(|d| d.id == id))
            && self
                .academic_year_id
                .is_none_or(|id| division.academic_year.as_ref().is_some_and(|y| y.id == id))
    }

    pub fn apply<'a>(&self, divisions: &'a [Division]) -> Vec<&'a Division> {
        divisions.iter().filter(|d| self.matches(d)).collect()
    }
}
