use crate::app_config::AppConfig;
use crate::summit::domain::{ApiError, DeviceSummary};
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// Lists all summit ids registered with the provider, in provider order.
#[instrument(skip_all)]
pub async fn list_summit_ids(client: &Client, config: &AppConfig) -> Result<Vec<i64>, DeviceListError> {
    info!("Retrieving Summit devices...");

    let body = client
        .get(format!("{}/devices", config.summit().url()))
        .send()
        .await?
        .text()
        .await?;

    let summaries = match serde_json::from_str::<Vec<DeviceSummary>>(&body) {
        Ok(summaries) => summaries,
        // Not a device list; a well-formed provider error carries a message field
        Err(err) => match serde_json::from_str::<ApiError>(&body) {
            Ok(api_error) => {
                return Err(DeviceListError::Api {
                    message: api_error.message,
                });
            }
            Err(_) => return Err(DeviceListError::MalformedResponse(err)),
        },
    };

    info!("Retrieving Summit devices... OK, {} found", summaries.len());

    Ok(summaries.into_iter().map(|summary| summary.summit_id).collect())
}

#[derive(Error, Debug)]
pub enum DeviceListError {
    #[error("device list request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Summit API error: {message}")]
    Api { message: String },
    #[error("malformed device list response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
