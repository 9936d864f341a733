use serde::Deserialize;

// API: GET /devices/{summitId}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    pub summit_id: i64,
    pub carrier: String,
    pub customer: Customer,
    pub serial_number: String,
    pub description: String,
    #[serde(default)]
    pub your_device_id: Option<String>,
    pub device_model: String,
    pub last_check_in_time: i64,    // epoch milliseconds
    pub snapshot_refresh_time: i64, // epoch milliseconds
    pub device_up_time: String,
    pub signal_strength: String,
    pub signal_quality: String, // the provider sends this as a string, e.g. "3"
    #[serde(default)]
    pub dynamic_fields: Vec<DynamicField>,
    pub data_plan: i64,
}

#[derive(Debug, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DynamicField {
    pub key: String,
    pub value: String,
}
