mod common;

use axum::http::Method;
use serde_json::json;

use common::{MockBackend, client_for, college, college_email, stored_token};
use samaysetu::modules::AuthService;
use samaysetu::modules::auth::messages::{EMAIL_NOT_VERIFIED, INCORRECT_PASSWORD, REGISTER_FAILED};
use samaysetu::modules::auth::{
    login_error_message, register_error_message, reset_password_error_message,
};
use samaysetu::samaysetu_auth::SessionStore;
use samaysetu::samaysetu_core::ApiError;
use samaysetu::samaysetu_models::{
    ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm,
};

fn login_form(email: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn test_login_stores_session_with_profile_name() {
    let email = college_email();
    let backend = MockBackend::new();
    backend
        .json(
            Method::POST,
            "/auth/login",
            200,
            json!({"email": email, "token": "jwt-token", "role": "ADMIN"}),
        )
        .json(
            Method::GET,
            "/api/teachers/profile",
            200,
            json!({"id": 1, "name": "Asha Patil", "email": email}),
        );
    let test = client_for(&backend, None).await;

    let session = AuthService::login(&test.client, login_form(&email), &college())
        .await
        .unwrap();

    assert_eq!(session.name, "Asha Patil");
    assert_eq!(session.role, "ADMIN");
    assert_eq!(stored_token(&test).as_deref(), Some("jwt-token"));
    assert_eq!(test.session.session().unwrap().name, "Asha Patil");
    assert_eq!(test.navigator.paths(), vec!["/admin/dashboard"]);

    let login = &backend.requests_to(Method::POST, "/auth/login")[0];
    assert_eq!(login.json(), json!({"email": email, "password": "secret123"}));
    assert_eq!(login.authorization, None);

    let profile = &backend.requests_to(Method::GET, "/api/teachers/profile")[0];
    assert_eq!(profile.authorization.as_deref(), Some("Bearer jwt-token"));
}

#[tokio::test]
async fn test_login_falls_back_to_email_when_profile_fails() {
    let backend = MockBackend::new();
    backend
        .json(
            Method::POST,
            "/auth/login",
            200,
            json!({"email": "asha.patil21@mitaoe.ac.in", "token": "jwt-token", "role": "TEACHER"}),
        )
        .text(Method::GET, "/api/teachers/profile", 500, "boom");
    let test = client_for(&backend, None).await;

    let session = AuthService::login(
        &test.client,
        login_form("asha.patil21@mitaoe.ac.in"),
        &college(),
    )
    .await
    .unwrap();

    assert_eq!(session.name, "asha patil");
    assert_eq!(test.navigator.paths(), vec!["/dashboard"]);
    assert_eq!(stored_token(&test).as_deref(), Some("jwt-token"));
}

#[tokio::test]
async fn test_login_blank_profile_name_uses_local_part() {
    let backend = MockBackend::new();
    backend
        .json(
            Method::POST,
            "/auth/login",
            200,
            json!({"email": "asha.patil21@mitaoe.ac.in", "token": "t", "role": "TEACHER"}),
        )
        .json(
            Method::GET,
            "/api/teachers/profile",
            200,
            json!({"id": 4, "name": "", "email": "asha.patil21@mitaoe.ac.in"}),
        );
    let test = client_for(&backend, None).await;

    let session = AuthService::login(
        &test.client,
        login_form("asha.patil21@mitaoe.ac.in"),
        &college(),
    )
    .await
    .unwrap();

    assert_eq!(session.name, "asha.patil21");
}

#[tokio::test]
async fn test_login_rejects_outside_email_without_request() {
    let backend = MockBackend::new();
    let test = client_for(&backend, None).await;

    let err = AuthService::login(&test.client, login_form("someone@gmail.com"), &college())
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(fields) => assert_eq!(
            fields.get("email"),
            Some("Only college email addresses are allowed")
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_message() {
    let backend = MockBackend::new();
    backend.text(Method::POST, "/auth/login", 401, "Bad credentials");
    let test = client_for(&backend, None).await;

    let err = AuthService::login(&test.client, login_form(&college_email()), &college())
        .await
        .unwrap_err();

    assert_eq!(login_error_message(&err), INCORRECT_PASSWORD);
    assert_eq!(stored_token(&test), None);
}

#[tokio::test]
async fn test_login_unverified_email_message() {
    let backend = MockBackend::new();
    backend.text(
        Method::POST,
        "/auth/login",
        403,
        "Please verify your email before logging in",
    );
    let test = client_for(&backend, None).await;

    let err = AuthService::login(&test.client, login_form(&college_email()), &college())
        .await
        .unwrap_err();

    assert_eq!(login_error_message(&err), EMAIL_NOT_VERIFIED);
}

#[tokio::test]
async fn test_register_returns_backend_message() {
    let backend = MockBackend::new();
    backend.text(
        Method::POST,
        "/auth/register",
        200,
        "Registration successful! Please verify your email.",
    );
    let test = client_for(&backend, None).await;
    let email = college_email();

    let form = RegisterForm {
        name: "Asha Patil".to_string(),
        employee_id: "EMP042".to_string(),
        email: email.clone(),
        phone: "9876543210".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
        specialization: None,
    };
    let message = AuthService::register(&test.client, form, &college())
        .await
        .unwrap();

    assert_eq!(message, "Registration successful! Please verify your email.");
    let sent = backend.requests_to(Method::POST, "/auth/register")[0].json();
    assert_eq!(sent["employeeId"], "EMP042");
    assert_eq!(sent["email"], email.as_str());
    assert!(sent.get("confirmPassword").is_none());
}

#[tokio::test]
async fn test_register_error_uses_string_body() {
    let backend = MockBackend::new();
    backend.text(Method::POST, "/auth/register", 400, "Email already registered");
    let test = client_for(&backend, None).await;

    let form = RegisterForm {
        name: "Asha Patil".to_string(),
        employee_id: "EMP042".to_string(),
        email: college_email(),
        phone: "9876543210".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
        specialization: None,
    };
    let err = AuthService::register(&test.client, form, &college())
        .await
        .unwrap_err();

    assert_eq!(register_error_message(&err), "Email already registered");
    assert_ne!(register_error_message(&err), REGISTER_FAILED);
}

#[tokio::test]
async fn test_verify_email_sends_token_in_query() {
    let backend = MockBackend::new();
    backend.text(
        Method::GET,
        "/auth/verify-email",
        200,
        "Email verified successfully! You can now login.",
    );
    let test = client_for(&backend, None).await;

    let message = AuthService::verify_email(&test.client, "abc-123")
        .await
        .unwrap();

    assert_eq!(message, "Email verified successfully! You can now login.");
    let sent = &backend.requests_to(Method::GET, "/auth/verify-email")[0];
    assert_eq!(sent.query.as_deref(), Some("token=abc-123"));
}

#[tokio::test]
async fn test_forgot_and_reset_password() {
    let backend = MockBackend::new();
    backend
        .text(Method::POST, "/auth/forgot-password", 200, "Reset link sent")
        .json(
            Method::POST,
            "/auth/reset-password",
            200,
            json!("Password reset successfully"),
        );
    let test = client_for(&backend, None).await;
    let email = college_email();

    AuthService::forgot_password(
        &test.client,
        ForgotPasswordForm {
            email: email.clone(),
        },
        &college(),
    )
    .await
    .unwrap();
    let sent = backend.requests_to(Method::POST, "/auth/forgot-password")[0].json();
    assert_eq!(sent, json!({"email": email}));

    let message = AuthService::reset_password(
        &test.client,
        ResetPasswordForm {
            token: Some("reset-token".to_string()),
            new_password: "newpass1".to_string(),
            confirm_password: "newpass1".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(message, "Password reset successfully");
    let sent = backend.requests_to(Method::POST, "/auth/reset-password")[0].json();
    assert_eq!(sent, json!({"token": "reset-token", "newPassword": "newpass1"}));
}

#[tokio::test]
async fn test_reset_password_error_is_cleaned() {
    let backend = MockBackend::new();
    backend.text(
        Method::POST,
        "/auth/reset-password",
        400,
        r#"An unexpected error occurred: 400 BAD_REQUEST "Reset token has expired""#,
    );
    let test = client_for(&backend, None).await;

    let err = AuthService::reset_password(
        &test.client,
        ResetPasswordForm {
            token: Some("stale".to_string()),
            new_password: "newpass1".to_string(),
            confirm_password: "newpass1".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(reset_password_error_message(&err), "Reset token has expired");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = MockBackend::new();
    let test = client_for(&backend, Some(common::admin_session())).await;

    AuthService::logout(&test.client).unwrap();

    assert_eq!(stored_token(&test), None);
    assert!(test.session.session().is_none());
}
