//! Smoke and carbon monoxide alarms are read-only through the API

use crate::client::NestClient;
use crate::models::SmokeCoAlarm;
use crate::Result;

define_field_getters! {
    kind: SmokeCoAlarms,
    prefix: smoke_co_alarm,
    fields: {
        locale: String,
        software_version: String,
        name: String,
        last_connection: String,
        is_online: bool,
        battery_health: String,
        co_alarm_state: String,
        smoke_alarm_state: String,
    }
}

impl NestClient {
    /// Fetch all smoke/CO alarms on the account
    pub fn smoke_co_alarms(&self) -> Result<Vec<SmokeCoAlarm>> {
        self.get_all()
    }

    /// Fetch one smoke/CO alarm by device ID
    pub fn smoke_co_alarm(&self, device_id: &str) -> Result<SmokeCoAlarm> {
        self.get(device_id)
    }
}
