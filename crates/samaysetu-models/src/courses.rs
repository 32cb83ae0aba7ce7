//! Course models, payloads and list filters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use samaysetu_core::serde::{deserialize_optional_string, deserialize_optional_timestamp};
use samaysetu_core::{ApiError, FieldErrors};

use crate::departments::Department;
use crate::forms::{finish, non_blank, require, require_some};
use crate::ids::{CourseId, DepartmentId};
use crate::value_types::IdRef;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    #[default]
    Theory,
    Lab,
}

impl CourseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "THEORY",
            Self::Lab => "LAB",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "THEORY" => Ok(Self::Theory),
            "LAB" => Ok(Self::Lab),
            other => Err(format!("Unknown course type: {}", other)),
        }
    }
}

/// Semester 1 to 8, sent to the backend as `SEM_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester(u8);

impl Semester {
    pub const FIRST: Semester = Semester(1);

    pub fn new(number: u8) -> Option<Self> {
        (1..=8).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl Default for Semester {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SEM_{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Accepts `SEM_3` as well as a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("SEM_").unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("Invalid semester: {}", s))
    }
}

impl Serialize for Semester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub course_type: CourseType,
    #[serde(default)]
    pub credits: i32,
    #[serde(default)]
    pub hours_per_week: i32,
    #[serde(default)]
    pub semester: Semester,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub prerequisites: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub department: Option<Department>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub(crate) fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    pub name: String,
    pub code: String,
    pub course_type: CourseType,
    pub credits: Option<i32>,
    pub hours_per_week: Option<i32>,
    pub department_id: Option<DepartmentId>,
    pub semester: Semester,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 20, message = "Code must be at most 20 characters"))]
    pub code: String,
    pub course_type: CourseType,
    #[validate(range(min = 1, message = "Credits must be at least 1"))]
    pub credits: i32,
    #[validate(range(min = 1, message = "Hours per week must be at least 1"))]
    pub hours_per_week: i32,
    pub semester: Semester,
    pub description: Option<String>,
    pub department: IdRef<DepartmentId>,
}

impl CourseForm {
    pub fn into_payload(self) -> Result<CoursePayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "code", &self.code, "Code is required");
        require_some(&mut errors, "credits", &self.credits, "Credits is required");
        require_some(
            &mut errors,
            "hoursPerWeek",
            &self.hours_per_week,
            "Hours per week is required",
        );
        require_some(
            &mut errors,
            "departmentId",
            &self.department_id,
            "Department is required",
        );

        finish(errors, || CoursePayload {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            course_type: self.course_type,
            credits: self.credits.unwrap_or_default(),
            hours_per_week: self.hours_per_week.unwrap_or_default(),
            semester: self.semester,
            description: non_blank(self.description),
            department: IdRef::new(self.department_id.unwrap_or_default()),
        })
    }
}

impl From<&Course> for CourseForm {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            code: course.code.clone(),
            course_type: course.course_type,
            credits: Some(course.credits),
            hours_per_week: Some(course.hours_per_week),
            department_id: course.department.as_ref().map(|d| d.id),
            semester: course.semester,
            description: course.description.clone(),
        }
    }
}

/// Client-side course list filter. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub semester: Option<Semester>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            Some(query) if !query.is_empty() => {
                course.name.to_lowercase().contains(&query)
                    || course.code.to_lowercase().contains(&query)
            }
            _ => true,
        };
        let matches_department = self
            .department_id
            .is_none_or(|id| course.department.as_ref().is_some_and(|d| d.id == id));
        let matches_semester = self.semester.is_none_or(|s| course.semester == s);

        matches_search && matches_department && matches_semester
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}
