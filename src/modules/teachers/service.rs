use tracing::{info, instrument};

use samaysetu_core::ApiError;
use samaysetu_models::{
    DEFAULT_REJECTION_REASON, PasswordChangeForm, ProfileForm, StaffFilter, Teacher, TeacherForm,
    TeacherId, approved_teachers,
};

use crate::client::ApiClient;

const TEACHERS_PATH: &str = "/api/teachers";
const PROFILE_PATH: &str = "/api/teachers/profile";

pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
pub const CHANGE_PASSWORD_FAILED: &str = "Failed to change password";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Teacher>, ApiError> {
        client.get(TEACHERS_PATH).await
    }

    /// Staff list narrowed by `filter`.
    #[instrument(skip(client))]
    pub async fn search(client: &ApiClient, filter: &StaffFilter) -> Result<Vec<Teacher>, ApiError> {
        let staff = Self::list(client).await?;
        Ok(filter.apply(&staff).into_iter().cloned().collect())
    }

    /// Approved teaching staff, without admins.
    #[instrument(skip(client))]
    pub async fn list_approved(client: &ApiClient) -> Result<Vec<Teacher>, ApiError> {
        let staff = Self::list(client).await?;
        Ok(approved_teachers(&staff).into_iter().cloned().collect())
    }

    #[instrument(skip(client))]
    pub async fn pending_approvals(client: &ApiClient) -> Result<Vec<Teacher>, ApiError> {
        client
            .get(&format!("{}/pending-approvals", TEACHERS_PATH))
            .await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: TeacherId) -> Result<Teacher, ApiError> {
        client.get(&format!("{}/{}", TEACHERS_PATH, id)).await
    }

    #[instrument(skip_all)]
    pub async fn create(client: &ApiClient, form: TeacherForm) -> Result<(), ApiError> {
        let payload = form.into_create_payload()?;
        client.post_json(TEACHERS_PATH, &payload).await
    }

    #[instrument(skip(client, form))]
    pub async fn update(client: &ApiClient, id: TeacherId, form: TeacherForm) -> Result<(), ApiError> {
        let payload = form.into_update_payload()?;
        client
            .put_json(&format!("{}/{}", TEACHERS_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: TeacherId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", TEACHERS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn approve(client: &ApiClient, id: TeacherId) -> Result<(), ApiError> {
        client
            .post_empty(&format!("{}/{}/approve", TEACHERS_PATH, id))
            .await?;
        info!(teacher_id = %id, "Teacher approved");
        Ok(())
    }

    /// Rejects an application; a blank reason sends the default one.
    #[instrument(skip(client))]
    pub async fn reject(
        client: &ApiClient,
        id: TeacherId,
        reason: Option<String>,
    ) -> Result<(), ApiError> {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());
        client
            .post_text(&format!("{}/{}/reject", TEACHERS_PATH, id), reason)
            .await?;
        info!(teacher_id = %id, "Teacher rejected");
        Ok(())
    }

    #[instrument(skip(client))]
    pub async fn profile(client: &ApiClient) -> Result<Teacher, ApiError> {
        client.get(PROFILE_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn update_profile(client: &ApiClient, form: ProfileForm) -> Result<(), ApiError> {
        let payload = form.into_payload(None)?;
        client.put_json(PROFILE_PATH, &payload).await
    }

    /// Changes the password by resending the profile with the new one.
    #[instrument(skip_all)]
    pub async fn change_password(
        client: &ApiClient,
        profile: ProfileForm,
        change: PasswordChangeForm,
    ) -> Result<(), ApiError> {
        let password = change.validate()?;
        let payload = profile.into_payload(Some(password))?;
        client.put_json(PROFILE_PATH, &payload).await
    }
}
