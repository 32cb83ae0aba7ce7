use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{Course, CourseFilter, CourseForm, CourseId};

use crate::client::ApiClient;

const COURSES_PATH: &str = "/admin/api/courses";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Course>, ApiError> {
        client.get(COURSES_PATH).await
    }

    /// Fetches every course and keeps those matching `filter`.
    #[instrument(skip(client))]
    pub async fn search(client: &ApiClient, filter: &CourseFilter) -> Result<Vec<Course>, ApiError> {
        let courses = Self::list(client).await?;
        Ok(filter.apply(&courses).into_iter().cloned().collect())
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: CourseId) -> Result<Course, ApiError> {
        client.get(&format!("{}/{}", COURSES_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: CourseForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(COURSES_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(client: &ApiClient, id: CourseId, form: CourseForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client
            .put_json(&format!("{}/{}", COURSES_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: CourseId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", COURSES_PATH, id)).await
    }
}
