//! Typed records for each resource kind
//!
//! Field names match the snake_case wire names one to one. Every record
//! tolerates unknown fields and fills missing ones with their defaults.

mod camera;
mod smoke_co_alarm;
mod structure;
mod thermostat;

pub use camera::{ActivityZone, Camera, CameraEvent};
pub use smoke_co_alarm::SmokeCoAlarm;
pub use structure::{Structure, Where};
pub use thermostat::Thermostat;
