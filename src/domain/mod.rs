mod device_row;
mod usage_window;

pub use device_row::DeviceRow;
pub use usage_window::UsageWindow;
