//! Per-resource operations on [`NestClient`](crate::NestClient)
//!
//! Each module adds typed collection reads, single-field getters and the
//! writes the device accepts.

pub mod camera;
pub mod smoke_co_alarm;
pub mod structure;
pub mod thermostat;

pub use thermostat::TemperatureScale;
