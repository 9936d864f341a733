mod client;
mod collector;
mod devices;
mod domain;
mod login;
mod map_device;

pub use client::{SummitClientError, authorized_client, new_client};
pub use collector::{CollectError, collect};
pub use devices::{DeviceListError, list_summit_ids};
pub use login::{LoginError, login};
pub use map_device::{MapDeviceError, map_device};
