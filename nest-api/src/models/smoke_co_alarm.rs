use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

/// All the data for an individual smoke/CO alarm
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeCoAlarm {
    pub device_id: String,
    pub locale: String,
    pub software_version: String,
    pub structure_id: String,
    pub name: String,
    pub name_long: String,
    pub last_connection: String,
    pub is_online: bool,
    pub battery_health: String,
    pub co_alarm_state: String,
    pub smoke_alarm_state: String,
    pub is_manual_test_active: bool,
    pub last_manual_test_time: String,
    pub ui_color_state: String,
    pub where_id: String,
    pub where_name: String,
}

impl Resource for SmokeCoAlarm {
    const KIND: ResourceKind = ResourceKind::SmokeCoAlarms;
}
