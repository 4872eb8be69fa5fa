use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: u16,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    pub message: String,
}
