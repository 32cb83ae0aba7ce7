use chrono::DateTime;

use samaysetu_auth::{decode_claims, is_expired};
use samaysetu_core::message_or;
use samaysetu_models::{
    ForgotPasswordForm, LoginForm, PasswordChangeForm, ProfileForm, RegisterForm,
    ResetPasswordForm,
};

use crate::cli::catalogue::pick_department;
use crate::cli::{ProfileCommand, output, prompt, report, report_with};
use crate::modules::auth::messages::{
    LOGIN_SUCCESS, REGISTER_SUCCESS, RESET_LINK_SENT, RESET_SUCCESS,
};
use crate::modules::auth::{
    AuthService, forgot_password_error_message, login_error_message, register_error_message,
    reset_password_error_message,
};
use crate::modules::teachers::{CHANGE_PASSWORD_FAILED, PROFILE_UPDATE_FAILED, TeacherService};
use crate::state::AppState;

pub async fn login(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let form = LoginForm {
        email: prompt::or_text(email, "College email")?,
        password: prompt::or_password(password, "Password")?,
    };

    let session = AuthService::login(&state.client, form, &state.college)
        .await
        .map_err(|e| report_with(e, login_error_message))?;

    println!("\n✅ {}", LOGIN_SUCCESS);
    println!("   Name: {}", session.name);
    println!("   Role: {}", session.role);
    Ok(())
}

pub fn logout(state: &AppState) -> anyhow::Result<()> {
    AuthService::logout(&state.client).map_err(report)?;
    println!("👋 Logged out");
    Ok(())
}

pub fn whoami(state: &AppState) -> anyhow::Result<()> {
    let Some(session) = state.client.session().session() else {
        println!("Not logged in. Run `samaysetu-cli login`.");
        return Ok(());
    };

    println!("Name:   {}", session.name);
    println!("Email:  {}", session.email);
    println!("Role:   {}", session.role);

    if let Ok(claims) = decode_claims(&session.token)
        && let Some(expires) = claims
            .exp
            .and_then(|exp| DateTime::from_timestamp(exp as i64, 0))
    {
        println!("Token expires: {}", expires.format("%Y-%m-%d %H:%M UTC"));
    }
    if is_expired(&session.token) {
        println!("\n⚠️  The stored token has expired. Run `samaysetu-cli login` again.");
    }
    Ok(())
}

pub async fn register(state: &AppState, email: Option<String>) -> anyhow::Result<()> {
    let form = RegisterForm {
        name: prompt::text("Full name", None)?,
        employee_id: prompt::text("Employee ID", None)?,
        email: prompt::or_text(email, &format!("College email ({})", state.college.email_domain))?,
        phone: prompt::text("Phone number", None)?,
        password: prompt::password("Password")?,
        confirm_password: prompt::password("Confirm password")?,
        specialization: prompt::optional_text("Specialization (optional)", None)?,
    };

    let message = AuthService::register(&state.client, form, &state.college)
        .await
        .map_err(|e| report_with(e, register_error_message))?;

    println!("\n✅ {}", REGISTER_SUCCESS);
    if !message.is_empty() {
        println!("   {}", message);
    }
    Ok(())
}

pub async fn verify_email(state: &AppState, token: &str) -> anyhow::Result<()> {
    let message = AuthService::verify_email(&state.client, token)
        .await
        .map_err(report)?;
    println!("✅ {}", message);
    Ok(())
}

pub async fn forgot_password(state: &AppState, email: Option<String>) -> anyhow::Result<()> {
    let form = ForgotPasswordForm {
        email: prompt::or_text(email, "College email")?,
    };

    AuthService::forgot_password(&state.client, form, &state.college)
        .await
        .map_err(|e| report_with(e, forgot_password_error_message))?;

    println!("📧 {}", RESET_LINK_SENT);
    Ok(())
}

pub async fn reset_password(state: &AppState, token: Option<String>) -> anyhow::Result<()> {
    let form = ResetPasswordForm {
        token: Some(prompt::or_text(token, "Reset token")?),
        new_password: prompt::password("New password")?,
        confirm_password: prompt::password("Confirm new password")?,
    };

    AuthService::reset_password(&state.client, form)
        .await
        .map_err(|e| report_with(e, reset_password_error_message))?;

    println!("✅ {}", RESET_SUCCESS);
    Ok(())
}

pub async fn profile(state: &AppState, command: ProfileCommand) -> anyhow::Result<()> {
    let client = &state.client;
    let current = TeacherService::profile(client).await.map_err(report)?;

    match command {
        ProfileCommand::Show => output::teacher(&current),
        ProfileCommand::Update => {
            let mut form = ProfileForm::from(&current);
            form.name = prompt::text("Name", Some(&form.name))?;
            form.phone = prompt::optional_text("Phone", form.phone.as_deref())?;
            form.specialization =
                prompt::optional_text("Specialization", form.specialization.as_deref())?;
            form.weekly_hours_limit =
                prompt::text("Weekly hours limit", Some(&form.weekly_hours_limit))?;
            form.department_id = pick_department(state, form.department_id).await?;

            TeacherService::update_profile(client, form)
                .await
                .map_err(|e| report_with(e, |e| message_or(e, PROFILE_UPDATE_FAILED)))?;
            println!("✅ Profile updated");
        }
        ProfileCommand::Password => {
            let change = PasswordChangeForm {
                current_password: prompt::password("Current password")?,
                new_password: prompt::password("New password")?,
                confirm_password: prompt::password("Confirm new password")?,
            };

            TeacherService::change_password(client, ProfileForm::from(&current), change)
                .await
                .map_err(|e| report_with(e, |e| message_or(e, CHANGE_PASSWORD_FAILED)))?;
            println!("✅ Password changed");
        }
    }
    Ok(())
}
