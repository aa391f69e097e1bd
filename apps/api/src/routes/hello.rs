use axum::Json;
use serde::Serialize;

pub const HELLO_MESSAGE: &str = "Hello from Go Backend!";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// GET /api/v1/hello
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}
