use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

/// All the data for an individual thermostat
///
/// Temperatures come in pairs: `_f` fields are whole degrees Fahrenheit,
/// `_c` fields are Celsius in half-degree steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thermostat {
    pub humidity: i32,
    pub locale: String,
    pub temperature_scale: String,
    pub is_using_emergency_heat: bool,
    pub has_fan: bool,
    pub software_version: String,
    pub has_leaf: bool,
    pub where_id: String,
    pub device_id: String,
    pub name: String,
    pub can_heat: bool,
    pub can_cool: bool,
    pub target_temperature_c: f32,
    pub target_temperature_f: i32,
    pub target_temperature_high_c: f32,
    pub target_temperature_high_f: i32,
    pub target_temperature_low_c: f32,
    pub target_temperature_low_f: i32,
    pub ambient_temperature_c: f32,
    pub ambient_temperature_f: i32,
    pub away_temperature_high_c: f32,
    pub away_temperature_high_f: i32,
    pub away_temperature_low_c: f32,
    pub away_temperature_low_f: i32,
    pub eco_temperature_high_c: f32,
    pub eco_temperature_high_f: i32,
    pub eco_temperature_low_c: f32,
    pub eco_temperature_low_f: i32,
    pub is_locked: bool,
    pub locked_temp_min_c: f32,
    pub locked_temp_min_f: i32,
    pub locked_temp_max_c: f32,
    pub locked_temp_max_f: i32,
    pub sunlight_correction_active: bool,
    pub sunlight_correction_enabled: bool,
    pub structure_id: String,
    pub fan_timer_active: bool,
    pub fan_timer_timeout: String,
    pub fan_timer_duration: i32,
    pub previous_hvac_mode: String,
    pub hvac_mode: String,
    pub time_to_target: String,
    pub time_to_target_training: String,
    pub where_name: String,
    pub label: String,
    pub name_long: String,
    pub is_online: bool,
    pub last_connection: String,
    pub hvac_state: String,
}

impl Resource for Thermostat {
    const KIND: ResourceKind = ResourceKind::Thermostats;
}
