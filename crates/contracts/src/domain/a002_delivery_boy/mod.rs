pub mod aggregate;
mod mock_data;

pub use aggregate::{DeliveryBoy, DeliveryBoyDto, DeliveryBoyField, VehicleType, NO_VEHICLE_NUMBER};
pub use mock_data::mock_delivery_boys;
