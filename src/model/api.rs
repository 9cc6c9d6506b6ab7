use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A severity-tagged notice surfaced to the user after a redirect
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlashDto {
    /// One of `success`, `warning`, `danger`
    pub severity: String,
    pub message: String,
}
