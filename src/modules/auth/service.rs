use serde::Serialize;
use tracing::{info, instrument, warn};

use samaysetu_auth::{Session, landing_path};
use samaysetu_config::CollegeConfig;
use samaysetu_core::ApiError;
use samaysetu_models::{
    ForgotPasswordForm, LoginForm, LoginResponse, RegisterForm, ResetPasswordForm,
    display_name_from_email, email_local_part,
};

use crate::client::ApiClient;
use crate::modules::teachers::TeacherService;

#[derive(Debug, Serialize)]
struct TokenQuery<'a> {
    token: &'a str,
}

pub struct AuthService;

impl AuthService {
    /// Returns the backend's confirmation text.
    #[instrument(skip_all)]
    pub async fn register(
        client: &ApiClient,
        form: RegisterForm,
        college: &CollegeConfig,
    ) -> Result<String, ApiError> {
        let payload = form.into_payload(college)?;
        let message = client.post_for_message("/auth/register", &payload).await?;
        info!(email = %payload.email, "Registration submitted");
        Ok(message)
    }

    /// Signs in, stores the session and navigates to the role's landing page.
    ///
    /// The token is stored before the profile lookup so that the lookup is
    /// authenticated. A failed lookup does not fail the login.
    #[instrument(skip_all)]
    pub async fn login(
        client: &ApiClient,
        form: LoginForm,
        college: &CollegeConfig,
    ) -> Result<Session, ApiError> {
        let request = form.into_request(college)?;
        let LoginResponse { email, token, role } =
            client.post("/auth/login", &request).await?;

        let mut session = Session {
            token,
            email,
            role,
            name: String::new(),
        };
        client.session().save(session.clone())?;

        session.name = match TeacherService::profile(client).await {
            Ok(profile) if profile.name.is_empty() => email_local_part(&session.email).to_string(),
            Ok(profile) => profile.name,
            Err(e) => {
                warn!(error = %e, "Profile lookup failed after login, using email for name");
                display_name_from_email(&session.email)
            }
        };
        client.session().save(session.clone())?;

        info!(email = %session.email, role = %session.role, "Logged in");
        client.navigator().navigate(landing_path(&session.role));
        Ok(session)
    }

    #[instrument(skip_all)]
    pub async fn verify_email(client: &ApiClient, token: &str) -> Result<String, ApiError> {
        client
            .get_message("/auth/verify-email", &TokenQuery { token })
            .await
    }

    #[instrument(skip_all)]
    pub async fn forgot_password(
        client: &ApiClient,
        form: ForgotPasswordForm,
        college: &CollegeConfig,
    ) -> Result<String, ApiError> {
        let request = form.into_request(college)?;
        client
            .post_for_message("/auth/forgot-password", &request)
            .await
    }

    #[instrument(skip_all)]
    pub async fn reset_password(
        client: &ApiClient,
        form: ResetPasswordForm,
    ) -> Result<String, ApiError> {
        let request = form.into_request()?;
        client
            .post_for_message("/auth/reset-password", &request)
            .await
    }

    pub fn logout(client: &ApiClient) -> Result<(), ApiError> {
        client.session().clear()?;
        info!("Logged out");
        Ok(())
    }
}
