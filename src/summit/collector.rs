use crate::app_config::AppConfig;
use crate::domain::{DeviceRow, UsageWindow};
use crate::summit::domain::{DeviceDetail, UsageResponse};
use crate::summit::map_device::{MapDeviceError, map_device};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Fetches detail and prior-day usage for every summit id, in list order,
/// and maps each pair into one flat row.
///
/// The window is computed once by the caller so every device is queried
/// against the same day. One request per sub-resource per device; a failure
/// on any device aborts the whole run.
#[instrument(skip(client, config, summit_ids))]
pub async fn collect(
    client: &Client,
    config: &AppConfig,
    summit_ids: &[i64],
    window: &UsageWindow,
) -> Result<Vec<DeviceRow>, CollectError> {
    info!("Collecting usage for {} devices...", summit_ids.len());

    let summit_url = config.summit().url();
    let mut rows = Vec::with_capacity(summit_ids.len());

    for &summit_id in summit_ids {
        debug!("Fetching device {}...", summit_id);

        let detail = client
            .get(format!("{}/devices/{}", summit_url, summit_id))
            .send()
            .await?
            .error_for_status()?
            .json::<DeviceDetail>()
            .await?;

        let usage = client
            .get(format!("{}/devices/usage/{}", summit_url, summit_id))
            .query(&[
                ("range.end", window.end().to_string()),
                ("range.start", window.start().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<UsageResponse>()
            .await?;

        rows.push(map_device(detail, usage)?);
    }

    info!("Collecting usage for {} devices... OK", rows.len());

    Ok(rows)
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("device fetch failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error(transparent)]
    MapDevice(#[from] MapDeviceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::NaiveDate;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use std::error::Error;
    use test_log::test;

    #[test(tokio::test)]
    async fn collect_maps_each_device_into_one_row() -> Result<(), Box<dyn Error>> {
        let mut server = mockito::Server::new_async().await;

        let detail_mock = server
            .mock("GET", "/devices/81056")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/summit_device_detail.json"))
            .create_async()
            .await;

        let usage_mock = server
            .mock("GET", "/devices/usage/81056")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("range.end".into(), "2018-05-08".into()),
                Matcher::UrlEncoded("range.start".into(), "2018-05-08".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/summit_usage_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().summit_url(server.url()).build();
        let client = Client::new();
        let window = UsageWindow::day_before(NaiveDate::from_ymd_opt(2018, 5, 9).unwrap());

        let rows = collect(&client, &config, &[81056], &window).await?;

        detail_mock.assert();
        usage_mock.assert();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].summit_id, 81056);
        assert_eq!(rows[0].customer_name, "Byte Foods-OC");
        assert_eq!(rows[0].customer_id, 3384);
        assert_eq!(rows[0].static_ip, Some("10.145.188.51".to_string()));
        assert_eq!(rows[0].data_used_date, NaiveDate::from_ymd_opt(2018, 5, 8));
        assert_eq!(rows[0].data_used, Some(43063500));

        Ok(())
    }

    #[test(tokio::test)]
    async fn collect_queries_every_device_against_the_same_day() -> Result<(), Box<dyn Error>> {
        let mut server = mockito::Server::new_async().await;

        for summit_id in [81056, 81057] {
            server
                .mock("GET", format!("/devices/{}", summit_id).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(include_str!("../../tests/resources/summit_device_detail.json"))
                .create_async()
                .await;
        }

        let usage_mock = server
            .mock("GET", Matcher::Regex(r"^/devices/usage/\d+$".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("range.end".into(), "2018-05-08".into()),
                Matcher::UrlEncoded("range.start".into(), "2018-05-08".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/summit_usage_response.json"))
            .expect(2)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().summit_url(server.url()).build();
        let client = Client::new();
        let window = UsageWindow::day_before(NaiveDate::from_ymd_opt(2018, 5, 9).unwrap());

        let rows = collect(&client, &config, &[81056, 81057], &window).await?;

        usage_mock.assert();
        assert_eq!(rows.len(), 2);

        Ok(())
    }

    #[test(tokio::test)]
    async fn collect_aborts_when_a_device_fetch_fails() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/devices/81056").with_status(500).create_async().await;

        let config = AppConfigBuilder::new().summit_url(server.url()).build();
        let client = Client::new();
        let window = UsageWindow::day_before(NaiveDate::from_ymd_opt(2018, 5, 9).unwrap());

        let result = collect(&client, &config, &[81056], &window).await;

        assert!(matches!(result, Err(CollectError::RequestError(_))));
    }
}
