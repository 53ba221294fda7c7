use serde::{Deserialize, Serialize};

/// Request body of every advisory endpoint: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct FlowRequest<T> {
    pub data: T,
}

/// Success body of every advisory endpoint: `{"result": {...}}`.
#[derive(Debug, Serialize)]
pub struct FlowResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
