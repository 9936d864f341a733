use serde::Deserialize;

/// Error payload the provider returns instead of the requested resource.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}
