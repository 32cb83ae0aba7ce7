//! Sign-in, registration and password-reset forms.
//!
//! Every account belongs to the college, so the email checks here take the
//! accepted domain from [`CollegeConfig`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_config::CollegeConfig;
use samaysetu_core::{ApiError, FieldErrors};

use crate::forms::{finish, is_blank, non_blank, require};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
    pub role: String,
}

impl LoginForm {
    pub fn into_request(self, college: &CollegeConfig) -> Result<LoginRequest, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "email", &self.email, "Email is required");
        require(&mut errors, "password", &self.password, "Password is required");
        errors.into_result()?;

        if !college.accepts(&self.email) {
            return Err(ApiError::invalid(
                "email",
                "Only college email addresses are allowed",
            ));
        }

        Ok(LoginRequest {
            email: self.email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub specialization: Option<String>,
}

/// Registration body. The confirmation field never leaves the client.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 20, message = "Employee ID must be at most 20 characters"))]
    pub employee_id: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 15, message = "Phone must be at most 15 characters"))]
    pub phone: String,
    pub password: String,
    pub specialization: Option<String>,
}

impl RegisterForm {
    pub fn into_payload(self, college: &CollegeConfig) -> Result<RegisterPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "employeeId", &self.employee_id, "Employee ID is required");
        if is_blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !college.accepts(&self.email) {
            errors.add(
                "email",
                format!("Only college email ({}) is allowed", college.email_domain),
            );
        }
        require(&mut errors, "phone", &self.phone, "Phone number is required");
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("password", "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }

        finish(errors, || RegisterPayload {
            name: self.name.trim().to_string(),
            employee_id: self.employee_id.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password,
            specialization: non_blank(self.specialization),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn into_request(self, college: &CollegeConfig) -> Result<ForgotPasswordRequest, ApiError> {
        if is_blank(&self.email) {
            return Err(ApiError::invalid("email", "Email is required"));
        }
        if !college.accepts(&self.email) {
            return Err(ApiError::invalid(
                "email",
                format!("Please use your college email ({})", college.email_domain),
            ));
        }
        Ok(ForgotPasswordRequest { email: self.email })
    }
}

/// The token comes from the emailed reset link.
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub token: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

impl ResetPasswordForm {
    pub fn into_request(self) -> Result<ResetPasswordRequest, ApiError> {
        let Some(token) = non_blank(self.token) else {
            return Err(ApiError::invalid("token", "Invalid reset link"));
        };

        let mut errors = FieldErrors::new();
        if self.new_password.is_empty() {
            errors.add("newPassword", "Password is required");
        } else if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("newPassword", "Password must be at least 6 characters");
        }
        if self.confirm_password.is_empty() {
            errors.add("confirmPassword", "Please confirm your password");
        } else if self.new_password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }
        errors.into_result()?;

        Ok(ResetPasswordRequest {
            token,
            new_password: self.new_password,
        })
    }
}

/// Display name guessed from an email address when no profile name is known.
///
/// `asha.patil21@college.edu` becomes `asha patil`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .replace('.', " ")
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_string()
}

/// The local part of an email address.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college() -> CollegeConfig {
        CollegeConfig::default()
    }

    fn fields(err: ApiError) -> FieldErrors {
        match err {
            ApiError::Validation(fields) => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_login_requires_fields_before_domain() {
        let errors = fields(LoginForm::default().into_request(&college()).unwrap_err());
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_rejects_outside_domain() {
        let form = LoginForm {
            email: "someone@gmail.com".into(),
            password: "secret1".into(),
        };
        let errors = fields(form.into_request(&college()).unwrap_err());
        assert_eq!(errors.get("email"), Some("Only college email addresses are allowed"));
    }

    #[test]
    fn test_login_response_deserialize() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"email":"asha.patil@mitaoe.ac.in","token":"abc","role":"TEACHER"}"#,
        )
        .unwrap();
        assert_eq!(response.role, "TEACHER");
    }

    #[test]
    fn test_register_messages() {
        let form = RegisterForm {
            email: "asha@gmail.com".into(),
            password: "abc".into(),
            confirm_password: "abcd".into(),
            ..Default::default()
        };
        let errors = fields(form.into_payload(&college()).unwrap_err());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("employeeId"), Some("Employee ID is required"));
        assert_eq!(errors.get("email"), Some("Only college email (@mitaoe.ac.in) is allowed"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_register_payload_drops_confirmation() {
        let payload = RegisterForm {
            name: "Asha Patil".into(),
            employee_id: "EMP001".into(),
            email: "asha.patil@mitaoe.ac.in".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            specialization: Some("Networks".into()),
        }
        .into_payload(&college())
        .unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("confirmPassword").is_none());
        assert_eq!(value["employeeId"], "EMP001");
        assert_eq!(value["specialization"], "Networks");
    }

    #[test]
    fn test_forgot_password_messages() {
        let err = ForgotPasswordForm::default().into_request(&college()).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");

        let err = ForgotPasswordForm {
            email: "asha@gmail.com".into(),
        }
        .into_request(&college())
        .unwrap_err();
        assert_eq!(err.to_string(), "Please use your college email (@mitaoe.ac.in)");
    }

    #[test]
    fn test_reset_password_rules() {
        let err = ResetPasswordForm::default().into_request().unwrap_err();
        assert_eq!(err.to_string(), "Invalid reset link");

        let errors = fields(
            ResetPasswordForm {
                token: Some("t".into()),
                new_password: String::new(),
                confirm_password: String::new(),
            }
            .into_request()
            .unwrap_err(),
        );
        assert_eq!(errors.get("newPassword"), Some("Password is required"));
        assert_eq!(errors.get("confirmPassword"), Some("Please confirm your password"));

        let request = ResetPasswordForm {
            token: Some("t".into()),
            new_password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
        .into_request()
        .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"token": "t", "newPassword": "secret1"})
        );
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("asha.patil21@mitaoe.ac.in"), "asha patil");
        assert_eq!(display_name_from_email("2021.ravi@mitaoe.ac.in"), "ravi");
        assert_eq!(email_local_part("asha.patil@mitaoe.ac.in"), "asha.patil");
    }
}
