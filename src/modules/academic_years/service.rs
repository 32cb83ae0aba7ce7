use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{AcademicYear, AcademicYearForm, AcademicYearId};

use crate::client::ApiClient;

const ACADEMIC_YEARS_PATH: &str = "/admin/api/academic-years";

pub struct AcademicYearService;

impl AcademicYearService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<AcademicYear>, ApiError> {
        client.get(ACADEMIC_YEARS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn current(client: &ApiClient) -> Result<AcademicYear, ApiError> {
        client.get(&format!("{}/current", ACADEMIC_YEARS_PATH)).await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: AcademicYearId) -> Result<AcademicYear, ApiError> {
        client.get(&format!("{}/{}", ACADEMIC_YEARS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: AcademicYearForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(ACADEMIC_YEARS_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: AcademicYearId,
        form: AcademicYearForm,
    ) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client
            .put_json(&format!("{}/{}", ACADEMIC_YEARS_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: AcademicYearId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", ACADEMIC_YEARS_PATH, id)).await
    }
}
