use crate::app_config::AppConfig;
use crate::summit::domain::Credentials;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    app_id: &'a str,
    app_secret: &'a str,
}

/// Exchanges the static application secret for a short-lived api key and token.
#[instrument(skip_all)]
pub async fn login(client: &Client, config: &AppConfig) -> Result<Credentials, LoginError> {
    info!("Logging in to the Summit API...");

    let summit = config.summit();
    let response = client
        .post(format!("{}/accounts/login/app_secret", summit.url()))
        .json(&LoginRequest {
            app_id: summit.app_id(),
            app_secret: summit.app_secret(),
        })
        .send()
        .await?
        .error_for_status()?;

    let credentials = response.json::<Credentials>().await?;
    info!("Logging in to the Summit API... OK");

    Ok(credentials)
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("login failed: {0}")]
    RequestError(#[from] reqwest::Error),
}
