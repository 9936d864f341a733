use serde::Deserialize;

// Response of POST /accounts/login/app_secret.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_key: String,
    pub token: String,
}
