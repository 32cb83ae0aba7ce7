use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{TimeSlot, TimeSlotForm, TimeSlotId};

use crate::client::ApiClient;

const TIME_SLOTS_PATH: &str = "/admin/api/time-slots";
const PUBLIC_TIME_SLOTS_PATH: &str = "/api/time-slots";

pub struct TimeSlotService;

impl TimeSlotService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<TimeSlot>, ApiError> {
        client.get(TIME_SLOTS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn list_active(client: &ApiClient) -> Result<Vec<TimeSlot>, ApiError> {
        client.get(&format!("{}/active", TIME_SLOTS_PATH)).await
    }

    /// The slot list teachers can read.
    #[instrument(skip(client))]
    pub async fn list_public(client: &ApiClient) -> Result<Vec<TimeSlot>, ApiError> {
        client.get(PUBLIC_TIME_SLOTS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: TimeSlotId) -> Result<TimeSlot, ApiError> {
        client.get(&format!("{}/{}", TIME_SLOTS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: TimeSlotForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(TIME_SLOTS_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: TimeSlotId,
        form: TimeSlotForm,
    ) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client
            .put_json(&format!("{}/{}", TIME_SLOTS_PATH, id), &payload)
            .await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: TimeSlotId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", TIME_SLOTS_PATH, id)).await
    }
}
