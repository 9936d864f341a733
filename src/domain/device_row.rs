use chrono::NaiveDate;

/// One flat row per device, matching the `summit_usage` destination columns.
#[derive(Clone, PartialEq, Debug)]
pub struct DeviceRow {
    pub summit_id: i64,
    pub carrier: String,
    pub customer_name: String,
    pub customer_id: i64,
    pub your_device_id: Option<String>,
    pub signal_strength: String,
    pub description: String,
    pub device_model: String,
    pub serial_number: String,
    pub device_up_time: String,
    pub static_ip: Option<String>,
    pub snapshot_refresh_time: i64,
    pub last_check_in_time: i64,
    pub signal_quality: String,
    pub data_plan: i64,
    pub data_used_date: Option<NaiveDate>,
    pub data_used: Option<i64>,
}
