use std::sync::Arc;

use samaysetu_auth::{FileSessionStore, Navigator};
use samaysetu_config::{ApiConfig, CollegeConfig, SessionConfig};
use samaysetu_core::ApiError;

use crate::client::ApiClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: ApiClient,
    pub college: CollegeConfig,
}

pub fn init_app_state(navigator: Arc<dyn Navigator>) -> Result<AppState, ApiError> {
    let session = FileSessionStore::open(SessionConfig::from_env().file);
    let client = ApiClient::new(ApiConfig::from_env(), Arc::new(session), navigator)?;

    Ok(AppState {
        client,
        college: CollegeConfig::from_env(),
    })
}
