use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{AcademicYearId, Division, DivisionFilter, DivisionForm, DivisionId};

use crate::client::ApiClient;

const DIVISIONS_PATH: &str = "/admin/api/divisions";

pub struct DivisionService;

impl DivisionService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Division>, ApiError> {
        client.get(DIVISIONS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn search(
        client: &ApiClient,
        filter: &DivisionFilter,
    ) -> Result<Vec<Division>, ApiError> {
        let divisions = Self::list(client).await?;
        Ok(filter.apply(&divisions).into_iter().cloned().collect())
    }

    /// Divisions of one academic year, filtered by the backend.
    #[instrument(skip(client))]
    pub async fn list_by_academic_year(
        client: &ApiClient,
        academic_year_id: AcademicYearId,
    ) -> Result<Vec<Division>, ApiError> {
        client
            .get(&format!("{}/academic-year/{}", DIVISIONS_PATH, academic_year_id))
            .await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: DivisionId) -> Result<Division, ApiError> {
        client.get(&format!("{}/{}", DIVISIONS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: DivisionForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(DIVISIONS_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: DivisionId,
        form: DivisionForm,
    ) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client
            .put_json(&format!("{}/{}", DIVISIONS_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: DivisionId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", DIVISIONS_PATH, id)).await
    }
}
