//! Teacher (staff) models, admin payloads, the self-service profile and
//! list filters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::{
    deserialize_optional_string, deserialize_optional_timestamp, serialize_blank_as_null,
};
use samaysetu_core::{ApiError, FieldErrors};

use crate::courses::default_true;
use crate::departments::Department;
use crate::forms::{finish, is_blank, non_blank, require};
use crate::ids::{DepartmentId, TeacherId};

pub const DEFAULT_WEEKLY_HOURS_LIMIT: i32 = 25;

/// Reason sent when an admin rejects an application without typing one.
pub const DEFAULT_REJECTION_REASON: &str = "Application rejected by administrator";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeacherRole {
    #[default]
    Teacher,
    Admin,
}

impl TeacherRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "TEACHER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeacherRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TEACHER" => Ok(Self::Teacher),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    #[serde(default)]
    pub employee_id: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours_limit: i32,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub specialization: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub role: TeacherRole,
    #[serde(default)]
    pub is_email_verified: bool,
    pub department: Option<Department>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_weekly_hours() -> i32 {
    DEFAULT_WEEKLY_HOURS_LIMIT
}

/// Reads a typed weekly-hours value; blank, zero or unreadable input means 25.
pub fn parse_weekly_hours(raw: &str) -> i32 {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|hours| *hours != 0)
        .unwrap_or(DEFAULT_WEEKLY_HOURS_LIMIT)
}

/// Teacher form on the admin screen.
///
/// The same form creates and edits; only creation requires a password and
/// an empty password leaves the stored one untouched.
#[derive(Debug, Clone)]
pub struct TeacherForm {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub weekly_hours_limit: String,
    pub password: String,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            employee_id: String::new(),
            email: String::new(),
            phone: None,
            specialization: None,
            weekly_hours_limit: DEFAULT_WEEKLY_HOURS_LIMIT.to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 20, message = "Employee ID must be at most 20 characters"))]
    pub employee_id: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 15, message = "Phone must be at most 15 characters"))]
    pub phone: Option<String>,
    pub specialization: Option<String>,
    #[validate(range(min = 1, max = 40, message = "Weekly hours limit must be between 1 and 40"))]
    pub weekly_hours_limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl TeacherForm {
    pub fn into_create_payload(self) -> Result<TeacherPayload, ApiError> {
        self.into_payload(true)
    }

    pub fn into_update_payload(self) -> Result<TeacherPayload, ApiError> {
        self.into_payload(false)
    }

    fn into_payload(self, creating: bool) -> Result<TeacherPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "employeeId", &self.employee_id, "Employee ID is required");
        require(&mut errors, "email", &self.email, "Email is required");
        if creating {
            require(&mut errors, "password", &self.password, "Password is required");
        }

        finish(errors, || TeacherPayload {
            name: self.name.trim().to_string(),
            employee_id: self.employee_id.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone),
            specialization: non_blank(self.specialization),
            weekly_hours_limit: parse_weekly_hours(&self.weekly_hours_limit),
            password: (!self.password.is_empty()).then_some(self.password),
        })
    }
}

impl From<&Teacher> for TeacherForm {
    fn from(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            employee_id: teacher.employee_id.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            specialization: teacher.specialization.clone(),
            weekly_hours_limit: teacher.weekly_hours_limit.to_string(),
            password: String::new(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// The signed-in teacher's own profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub weekly_hours_limit: String,
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[serde(serialize_with = "serialize_blank_as_null")]
    #[validate(length(max = 15, message = "Phone must be at most 15 characters"))]
    pub phone: Option<String>,
    #[serde(serialize_with = "serialize_blank_as_null")]
    pub specialization: Option<String>,
    pub weekly_hours_limit: Option<i32>,
    pub email: String,
    #[validate(length(max = 20, message = "Employee ID must be at most 20 characters"))]
    pub employee_id: String,
    pub department_id: Option<DepartmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

impl ProfileForm {
    /// Builds the update. `password` is only set when changing it.
    pub fn into_payload(self, password: Option<String>) -> Result<ProfilePayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "employeeId", &self.employee_id, "Employee ID is required");

        finish(errors, || ProfilePayload {
            name: self.name.trim().to_string(),
            phone: self.phone,
            specialization: self.specialization,
            weekly_hours_limit: self.weekly_hours_limit.trim().parse().ok(),
            email: self.email,
            employee_id: self.employee_id.trim().to_string(),
            department_id: self.department_id,
            password,
        })
    }
}

impl From<&Teacher> for ProfileForm {
    fn from(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            employee_id: teacher.employee_id.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            specialization: teacher.specialization.clone(),
            weekly_hours_limit: teacher.weekly_hours_limit.to_string(),
            department_id: teacher.department.as_ref().map(|d| d.id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// Checks the three fields and returns the new password.
    pub fn validate(self) -> Result<String, ApiError> {
        if is_blank(&self.current_password) || is_blank(&self.new_password) {
            return Err(ApiError::invalid("password", "Please fill in all password fields"));
        }
        if self.new_password != self.confirm_password {
            return Err(ApiError::invalid("confirmPassword", "New passwords do not match"));
        }
        if self.new_password.chars().count() < 6 {
            return Err(ApiError::invalid(
                "newPassword",
                "Password must be at least 6 characters",
            ));
        }
        Ok(self.new_password)
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StaffFilter {
    /// Case-insensitive match on name, email or employee id.
    pub search: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl StaffFilter {
    pub fn matches(&self, teacher: &Teacher) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                teacher.name.to_lowercase().contains(&query)
                    || teacher.email.to_lowercase().contains(&query)
                    || teacher.employee_id.to_lowercase().contains(&query)
            }
            _ => true,
        };
        let matches_department = self
            .department_id
            .is_none_or(|id| teacher.department.as_ref().is_some_and(|d| d.id == id));

        matches_search && matches_department
    }

    pub fn apply<'a>(&self, teachers: &'a [Teacher]) -> Vec<&'a Teacher> {
        teachers.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Approved teaching staff; admins are left out.
pub fn approved_teachers(teachers: &[Teacher]) -> Vec<&Teacher> {
    teachers
        .iter()
        .filter(|t| t.role == TeacherRole::Teacher && t.is_approved)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::name::en::Name;
    use serde_json::json;

    fn teacher(id: i64, name: &str, role: &str, approved: bool, department: i64) -> Teacher {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "employeeId": format!("EMP{id:03}"),
            "email": format!("t{id}@mitaoe.ac.in"),
            "role": role,
            "isApproved": approved,
            "department": {"id": department}
        }))
        .unwrap()
    }

    fn valid_form() -> TeacherForm {
        TeacherForm {
            name: Name().fake(),
            employee_id: "EMP001".into(),
            email: "asha.patil@mitaoe.ac.in".into(),
            phone: Some(String::new()),
            specialization: None,
            weekly_hours_limit: "abc".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn test_teacher_defaults() {
        let teacher: Teacher = serde_json::from_value(json!({
            "id": 7,
            "name": "Asha Patil",
            "email": "asha.patil@mitaoe.ac.in",
            "phone": ""
        }))
        .unwrap();
        assert_eq!(teacher.weekly_hours_limit, 25);
        assert_eq!(teacher.role, TeacherRole::Teacher);
        assert!(teacher.is_active);
        assert!(!teacher.is_approved);
        assert_eq!(teacher.phone, None);
    }

    #[test]
    fn test_parse_weekly_hours() {
        assert_eq!(parse_weekly_hours("18"), 18);
        assert_eq!(parse_weekly_hours(""), 25);
        assert_eq!(parse_weekly_hours("0"), 25);
        assert_eq!(parse_weekly_hours("many"), 25);
    }

    #[test]
    fn test_password_required_only_on_create() {
        let form = TeacherForm {
            password: String::new(),
            ..valid_form()
        };
        let ApiError::Validation(errors) = form.clone().into_create_payload().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("password"), Some("Password is required"));

        let payload = form.into_update_payload().unwrap();
        assert_eq!(payload.password, None);
        assert!(serde_json::to_value(&payload).unwrap().get("password").is_none());
    }

    #[test]
    fn test_create_payload_shape() {
        let payload = valid_form().into_create_payload().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["phone"], json!(null));
        assert_eq!(value["specialization"], json!(null));
        assert_eq!(value["weeklyHoursLimit"], json!(25));
        assert_eq!(value["password"], json!("secret1"));
        assert_eq!(value["employeeId"], json!("EMP001"));
    }

    #[test]
    fn test_required_fields() {
        let ApiError::Validation(errors) = TeacherForm::default().into_create_payload().unwrap_err()
        else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("employeeId"), Some("Employee ID is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_weekly_hours_range() {
        let form = TeacherForm {
            weekly_hours_limit: "45".into(),
            ..valid_form()
        };
        let ApiError::Validation(errors) = form.into_create_payload().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.get("weeklyHoursLimit"),
            Some("Weekly hours limit must be between 1 and 40")
        );
    }

    #[test]
    fn test_profile_payload() {
        let teacher = teacher(3, "Asha Patil", "TEACHER", true, 2);
        let payload = ProfileForm::from(&teacher).into_payload(None).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["departmentId"], json!(2));
        assert_eq!(value["weeklyHoursLimit"], json!(25));
        assert_eq!(value["phone"], json!(null));
        assert!(value.get("password").is_none());

        let err = ProfileForm::from(&teacher)
            .into_payload(Some("abc".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_profile_phone_length() {
        let form = ProfileForm {
            name: "Asha".into(),
            employee_id: "EMP001".into(),
            phone: Some("1234567890123456".into()),
            ..Default::default()
        };
        let ApiError::Validation(errors) = form.into_payload(None).unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("phone"), Some("Phone must be at most 15 characters"));
    }

    #[test]
    fn test_password_change_rules() {
        let change = |current: &str, new: &str, confirm: &str| {
            PasswordChangeForm {
                current_password: current.into(),
                new_password: new.into(),
                confirm_password: confirm.into(),
            }
            .validate()
        };
        assert_eq!(
            change("", "secret1", "secret1").unwrap_err().to_string(),
            "Please fill in all password fields"
        );
        assert_eq!(
            change("old", "secret1", "secret2").unwrap_err().to_string(),
            "New passwords do not match"
        );
        assert_eq!(
            change("old", "abc", "abc").unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(change("old", "secret1", "secret1").unwrap(), "secret1");
    }

    #[test]
    fn test_staff_filter_and_approved_view() {
        let staff = vec![
            teacher(1, "Asha Patil", "TEACHER", true, 1),
            teacher(2, "Ravi Kulkarni", "TEACHER", false, 2),
            teacher(3, "Admin User", "ADMIN", true, 1),
        ];

        let filter = StaffFilter {
            search: Some("emp002".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&staff)[0].id, TeacherId::new(2));

        let filter = StaffFilter {
            department_id: Some(DepartmentId::new(1)),
            ..Default::default()
        };
        assert_eq!(filter.apply(&staff).len(), 2);

        let approved = approved_teachers(&staff);
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].name, "Asha Patil");
    }
}
