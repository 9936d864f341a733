use crate::summit::domain::Credentials;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Plain JSON client used for the login exchange only.
pub fn new_client() -> Result<Client, SummitClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Client carrying the short-lived api key and token on every request.
pub fn authorized_client(credentials: &Credentials) -> Result<Client, SummitClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let mut api_key_value = HeaderValue::from_str(&credentials.api_key)?;
    api_key_value.set_sensitive(true);
    headers.insert("x-api-key", api_key_value);

    let mut token_value = HeaderValue::from_str(&credentials.token)?;
    token_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, token_value);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum SummitClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Summit client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn authorized_client_sets_the_api_key_and_token_headers() -> Result<(), SummitClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("x-api-key", "key")
            .match_header("authorization", "token")
            .create_async()
            .await;

        let credentials = Credentials {
            api_key: "key".to_string(),
            token: "token".to_string(),
        };
        let client = authorized_client(&credentials)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert();

        Ok(())
    }
}
