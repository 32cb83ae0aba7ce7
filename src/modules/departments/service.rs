use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{Department, DepartmentForm, DepartmentId};

use crate::client::ApiClient;

const DEPARTMENTS_PATH: &str = "/admin/api/departments";

pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Department>, ApiError> {
        client.get(DEPARTMENTS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: DepartmentId) -> Result<Department, ApiError> {
        client.get(&format!("{}/{}", DEPARTMENTS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: DepartmentForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(DEPARTMENTS_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: DepartmentId,
        form: DepartmentForm,
    ) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client
            .put_json(&format!("{}/{}", DEPARTMENTS_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: DepartmentId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", DEPARTMENTS_PATH, id)).await
    }
}
