use crate::domain::DeviceRow;
use crate::summit::domain::{DeviceDetail, UsageResponse};
use chrono::NaiveDate;
use thiserror::Error;

const STATIC_IP_KEY: &str = "staticIP";

/// Merges a device's detail and usage responses into one flat row.
///
/// The nested customer object, the usage sequence and the dynamic-field
/// sequence are lifted into top-level columns and do not survive into the
/// output. Only the first usage entry and the first dynamic field are ever
/// consulted; the window is a single day and the provider reports a static
/// IP as the first dynamic field when the device has one.
pub fn map_device(detail: DeviceDetail, usage: UsageResponse) -> Result<DeviceRow, MapDeviceError> {
    let (data_used_date, data_used) = match usage.usages.first() {
        Some(entry) => {
            let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").map_err(|source| MapDeviceError::InvalidUsageDate {
                date: entry.date.clone(),
                source,
            })?;
            (Some(date), Some(entry.data_used))
        }
        None => (None, None),
    };

    let static_ip = detail
        .dynamic_fields
        .into_iter()
        .next()
        .filter(|field| field.key == STATIC_IP_KEY)
        .map(|field| field.value);

    Ok(DeviceRow {
        summit_id: detail.summit_id,
        carrier: detail.carrier,
        customer_name: detail.customer.name,
        customer_id: detail.customer.id,
        your_device_id: detail.your_device_id,
        signal_strength: detail.signal_strength,
        description: detail.description,
        device_model: detail.device_model,
        serial_number: detail.serial_number,
        device_up_time: detail.device_up_time,
        static_ip,
        snapshot_refresh_time: detail.snapshot_refresh_time,
        last_check_in_time: detail.last_check_in_time,
        signal_quality: detail.signal_quality,
        data_plan: detail.data_plan,
        data_used_date,
        data_used,
    })
}

#[derive(Error, Debug)]
pub enum MapDeviceError {
    #[error("invalid usage date '{date}': {source}")]
    InvalidUsageDate { date: String, source: chrono::ParseError },
}
