use serde::Deserialize;

// API: GET /devices/usage/{summitId}?range.end=…&range.start=…
#[derive(Debug, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub usages: Vec<UsageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub date: String, // YYYY-MM-DD, validated when the row is mapped
    pub data_used: i64,
}
