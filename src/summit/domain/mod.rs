mod api_error;
mod credentials;
mod device_detail;
mod device_summary;
mod usage;

pub use api_error::ApiError;
pub use credentials::Credentials;
pub use device_detail::{Customer, DeviceDetail, DynamicField};
pub use device_summary::DeviceSummary;
pub use usage::{UsageEntry, UsageResponse};
