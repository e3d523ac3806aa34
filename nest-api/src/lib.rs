//! Typed client for the Nest devices REST API
//!
//! This crate reads and writes thermostats, cameras, smoke/CO alarms and
//! structures through a small set of generic primitives on [`NestClient`].
//! It uses the private `rest-client` crate for authenticated HTTP with
//! redirect handling.
//!
//! # Reading and writing
//!
//! ```rust,no_run
//! use nest_api::{Config, NestClient};
//!
//! let client = NestClient::from_config(&Config::from_env()?);
//!
//! for thermostat in client.thermostats()? {
//!     println!("{}: {}", thermostat.name, thermostat.hvac_mode);
//!     client.set_hvac_mode(&thermostat.device_id, "eco")?;
//! }
//!
//! let battery = client.smoke_co_alarm_battery_health("alarm-id")?;
//! # Ok::<(), nest_api::ApiError>(())
//! ```
//!
//! Parameters are validated before any request is sent, and every
//! validation failure carries a user-facing message (for example
//! `HVAC Mode must be one of the following: [heat cool heat-cool eco off]`).

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod models;
pub mod resource;
pub mod services;
pub mod value;

pub use client::{NestClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use decode::{decode_collection, decode_single};
pub use error::{ApiError, Result};
pub use models::{ActivityZone, Camera, CameraEvent, SmokeCoAlarm, Structure, Thermostat, Where};
pub use resource::{Resource, ResourceKind};
pub use rest_client::RestError;
pub use services::TemperatureScale;
pub use value::{FieldValue, FieldValues, FromFieldText};
