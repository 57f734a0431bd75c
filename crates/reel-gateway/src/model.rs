use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of every 400 response: the violations in report order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorsResponse {
    pub errors_messages: Vec<String>,
}
