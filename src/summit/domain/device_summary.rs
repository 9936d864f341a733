use serde::Deserialize;

// API: GET /devices. Enumeration only needs the identifier.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub summit_id: i64,
}
