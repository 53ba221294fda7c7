use super::types::{ErrorResponse, FlowRequest, FlowResponse};
use crate::advisor::{Advisor, Advisory};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
}

/// Handles one advisory category; mounted once per route.
pub async fn advise<A>(
    State(state): State<AppState>,
    Json(request): Json<FlowRequest<A>>,
) -> Result<Json<FlowResponse<A::Output>>, (StatusCode, Json<ErrorResponse>)>
where
    A: Advisory + DeserializeOwned + Send + Sync + 'static,
    A::Output: Serialize + Send,
{
    let request_id = Uuid::new_v4();
    let category = A::CATEGORY;
    info!("Received {} request {}", category, request_id);

    match state.advisor.run(&request.data).await {
        Ok(result) => {
            info!("Successfully processed {} request {}", category, request_id);
            Ok(Json(FlowResponse { result }))
        }
        Err(e) => {
            error!(
                "Failed to process {} request {}: {}",
                category, request_id, e
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
