use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{Room, RoomFilter, RoomForm, RoomId};

use crate::client::ApiClient;

const ROOMS_PATH: &str = "/admin/api/rooms";

pub struct RoomService;

impl RoomService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Room>, ApiError> {
        client.get(ROOMS_PATH).await
    }

    #[instrument(skip(client))]
    pub async fn search(client: &ApiClient, filter: &RoomFilter) -> Result<Vec<Room>, ApiError> {
        let rooms = Self::list(client).await?;
        Ok(filter.apply(&rooms).into_iter().cloned().collect())
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: RoomId) -> Result<Room, ApiError> {
        client.get(&format!("{}/{}", ROOMS_PATH, id)).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, form: RoomForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.post_json(ROOMS_PATH, &payload).await
    }

    #[instrument(skip(client))]
    pub async fn update(client: &ApiClient, id: RoomId, form: RoomForm) -> Result<(), ApiError> {
        let payload = form.into_payload()?;
        client.put_json(&format!("{}/{}", ROOMS_PATH, id), &payload).await
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: RoomId) -> Result<(), ApiError> {
        client.delete(&format!("{}/{}", ROOMS_PATH, id)).await
    }
}
