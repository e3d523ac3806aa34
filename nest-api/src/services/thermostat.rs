//! Thermostat reads and writes
//!
//! Temperature fields exist twice on the device, once per unit
//! (`target_temperature_f` / `target_temperature_c`). Reads follow the
//! device's current scale; writes are rejected unless the caller's unit
//! matches it.

use std::fmt;

use tracing::debug;

use crate::client::NestClient;
use crate::models::Thermostat;
use crate::resource::ResourceKind;
use crate::value::{unquote, FieldValues, FromFieldText};
use crate::{ApiError, Result};

/// Fahrenheit target temperature bounds, inclusive
pub const FAHRENHEIT_RANGE: (i32, i32) = (50, 90);

/// Celsius target temperature bounds, inclusive
pub const CELSIUS_RANGE: (f32, f32) = (9.0, 32.0);

/// Accepted HVAC modes, in the order they are reported
pub const HVAC_MODES: [&str; 5] = ["heat", "cool", "heat-cool", "eco", "off"];

/// Accepted fan timer durations in minutes
pub const FAN_TIMER_DURATIONS: [i32; 8] = [15, 30, 45, 60, 120, 240, 480, 720];

/// Unit a thermostat displays and accepts temperatures in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Fahrenheit,
    Celsius,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 2] = [TemperatureScale::Fahrenheit, TemperatureScale::Celsius];

    /// Wire value, `F` or `C`
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Celsius => "C",
        }
    }

    /// Suffix of the per-unit temperature fields, `f` or `c`
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureScale::Fahrenheit => "f",
            TemperatureScale::Celsius => "c",
        }
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "F" => Some(TemperatureScale::Fahrenheit),
            "C" => Some(TemperatureScale::Celsius),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `F`, `"F"`, `C` or `"C"`
impl FromFieldText for TemperatureScale {
    fn from_field_text(raw: &str) -> Result<Self> {
        let value = unquote(raw);
        TemperatureScale::from_wire(value)
            .ok_or_else(|| ApiError::Decode(format!("unknown temperature scale '{}'", value)))
    }
}

define_field_getters! {
    kind: Thermostats,
    prefix: thermostat,
    fields: {
        locale: String,
        software_version: String,
        name: String,
        last_connection: String,
        is_online: bool,
        temperature_scale: TemperatureScale,
        hvac_mode: String,
        label: String,
    }
}

impl NestClient {
    /// Fetch all thermostats on the account
    pub fn thermostats(&self) -> Result<Vec<Thermostat>> {
        self.get_all()
    }

    /// Fetch one thermostat by device ID
    pub fn thermostat(&self, device_id: &str) -> Result<Thermostat> {
        self.get(device_id)
    }

    /// Read the target temperature in the thermostat's current scale
    pub fn thermostat_target_temperature(&self, device_id: &str) -> Result<String> {
        let scale = self.thermostat_temperature_scale(device_id)?;
        self.thermostat_field(device_id, &format!("target_temperature_{}", scale.suffix()))
    }

    /// Read the `(high, low)` targets in the thermostat's current scale
    pub fn thermostat_target_high_low_temperature(
        &self,
        device_id: &str,
    ) -> Result<(String, String)> {
        let scale = self.thermostat_temperature_scale(device_id)?;

        let high = self.thermostat_field(
            device_id,
            &format!("target_temperature_high_{}", scale.suffix()),
        )?;
        let low = self.thermostat_field(
            device_id,
            &format!("target_temperature_low_{}", scale.suffix()),
        )?;

        Ok((high, low))
    }

    /// Change the display scale; `scale` must be `F` or `C`
    pub fn set_temperature_scale(&self, device_id: &str, scale: &str) -> Result<()> {
        let scale = scale.trim();
        if scale.is_empty() {
            return Err(ApiError::EmptyParameter("Scale"));
        }

        let scale = TemperatureScale::from_wire(scale)
            .ok_or_else(|| ApiError::not_allowed("Temperature Scale", &TemperatureScale::ALL))?;

        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("temperature_scale", scale.as_str()),
        )
    }

    /// Set the target temperature in whole degrees Fahrenheit
    ///
    /// Fails with [`ApiError::ScaleMismatch`] unless the thermostat is set to F.
    pub fn set_target_temperature_f(&self, device_id: &str, temperature: i32) -> Result<()> {
        check_fahrenheit("Target Temperature", temperature)?;
        self.require_scale(device_id, TemperatureScale::Fahrenheit)?;

        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("target_temperature_f", temperature),
        )
    }

    /// Set the target temperature in degrees Celsius
    ///
    /// Fails with [`ApiError::ScaleMismatch`] unless the thermostat is set to C.
    pub fn set_target_temperature_c(&self, device_id: &str, temperature: f32) -> Result<()> {
        check_celsius("Target Temperature", temperature)?;
        self.require_scale(device_id, TemperatureScale::Celsius)?;

        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("target_temperature_c", temperature),
        )
    }

    /// Set the heat-cool targets in whole degrees Fahrenheit
    pub fn set_target_high_low_temperature_f(
        &self,
        device_id: &str,
        high: i32,
        low: i32,
    ) -> Result<()> {
        check_fahrenheit("Target High Temperature", high)?;
        check_fahrenheit("Target Low Temperature", low)?;
        self.require_scale(device_id, TemperatureScale::Fahrenheit)?;

        let values = FieldValues::new()
            .with("target_temperature_high_f", high)
            .with("target_temperature_low_f", low);
        self.set_value(ResourceKind::Thermostats, device_id, &values)
    }

    /// Set the heat-cool targets in degrees Celsius
    pub fn set_target_high_low_temperature_c(
        &self,
        device_id: &str,
        high: f32,
        low: f32,
    ) -> Result<()> {
        check_celsius("Target High Temperature", high)?;
        check_celsius("Target Low Temperature", low)?;
        self.require_scale(device_id, TemperatureScale::Celsius)?;

        let values = FieldValues::new()
            .with("target_temperature_high_c", high)
            .with("target_temperature_low_c", low);
        self.set_value(ResourceKind::Thermostats, device_id, &values)
    }

    /// Change the HVAC mode; see [`HVAC_MODES`]
    pub fn set_hvac_mode(&self, device_id: &str, mode: &str) -> Result<()> {
        let mode = mode.trim();
        if mode.is_empty() {
            return Err(ApiError::EmptyParameter("HVAC Mode"));
        }
        if !HVAC_MODES.contains(&mode) {
            return Err(ApiError::not_allowed("HVAC Mode", &HVAC_MODES));
        }

        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("hvac_mode", mode),
        )
    }

    /// Change the thermostat's custom label
    pub fn set_thermostat_label(&self, device_id: &str, label: &str) -> Result<()> {
        if label.trim().is_empty() {
            return Err(ApiError::EmptyParameter("Label"));
        }

        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("label", label),
        )
    }

    /// Run the fan for `duration` minutes; see [`FAN_TIMER_DURATIONS`]
    pub fn turn_on_fan_timer(&self, device_id: &str, duration: i32) -> Result<()> {
        if !FAN_TIMER_DURATIONS.contains(&duration) {
            return Err(ApiError::not_allowed(
                "Fan Timer Duration",
                &FAN_TIMER_DURATIONS,
            ));
        }

        let values = FieldValues::new()
            .with("fan_timer_active", true)
            .with("fan_timer_duration", duration);
        self.set_value(ResourceKind::Thermostats, device_id, &values)
    }

    pub fn turn_off_fan_timer(&self, device_id: &str) -> Result<()> {
        self.set_value(
            ResourceKind::Thermostats,
            device_id,
            &FieldValues::new().with("fan_timer_active", false),
        )
    }

    fn thermostat_field(&self, device_id: &str, field: &str) -> Result<String> {
        self.get_value(ResourceKind::Thermostats, device_id, field)
    }

    fn require_scale(&self, device_id: &str, expected: TemperatureScale) -> Result<()> {
        let actual = self.thermostat_temperature_scale(device_id)?;
        if actual != expected {
            debug!(device_id, %actual, %expected, "temperature scale mismatch");
            return Err(ApiError::ScaleMismatch(expected));
        }
        Ok(())
    }
}

fn check_fahrenheit(name: &'static str, temperature: i32) -> Result<()> {
    let (min, max) = FAHRENHEIT_RANGE;
    if !(min..=max).contains(&temperature) {
        return Err(ApiError::out_of_range(name, min, max));
    }
    Ok(())
}

fn check_celsius(name: &'static str, temperature: f32) -> Result<()> {
    let (min, max) = CELSIUS_RANGE;
    // NaN fails the range check as well
    if !(min..=max).contains(&temperature) {
        return Err(ApiError::out_of_range(name, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("F", TemperatureScale::Fahrenheit)]
    #[case("\"F\"", TemperatureScale::Fahrenheit)]
    #[case("C", TemperatureScale::Celsius)]
    #[case(" \"C\"\n", TemperatureScale::Celsius)]
    fn test_scale_from_field_text(#[case] raw: &str, #[case] expected: TemperatureScale) {
        assert_eq!(TemperatureScale::from_field_text(raw).unwrap(), expected);
    }

    #[test]
    fn test_scale_rejects_unknown_values() {
        assert!(TemperatureScale::from_field_text("K").is_err());
        assert!(TemperatureScale::from_field_text("f").is_err());
        assert!(TemperatureScale::from_field_text("").is_err());
    }

    #[test]
    fn test_scale_display_and_suffix() {
        assert_eq!(TemperatureScale::Fahrenheit.to_string(), "F");
        assert_eq!(TemperatureScale::Celsius.to_string(), "C");
        assert_eq!(TemperatureScale::Fahrenheit.suffix(), "f");
        assert_eq!(TemperatureScale::Celsius.suffix(), "c");
    }

    #[rstest]
    #[case(50, true)]
    #[case(90, true)]
    #[case(49, false)]
    #[case(91, false)]
    fn test_fahrenheit_bounds(#[case] temperature: i32, #[case] ok: bool) {
        assert_eq!(check_fahrenheit("Target Temperature", temperature).is_ok(), ok);
    }

    #[rstest]
    #[case(9.0, true)]
    #[case(32.0, true)]
    #[case(21.5, true)]
    #[case(8.9, false)]
    #[case(32.1, false)]
    #[case(f32::NAN, false)]
    fn test_celsius_bounds(#[case] temperature: f32, #[case] ok: bool) {
        assert_eq!(check_celsius("Target Temperature", temperature).is_ok(), ok);
    }

    #[test]
    fn test_range_messages() {
        assert_eq!(
            check_fahrenheit("Target Low Temperature", 10).unwrap_err().to_string(),
            "Target Low Temperature must be in the range of 50 - 90"
        );
        assert_eq!(
            check_celsius("Target Temperature", 40.0).unwrap_err().to_string(),
            "Target Temperature must be in the range of 9 - 32"
        );
    }
}
