use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decode::{keyed_or_single, null_as_default, Keyed};
use crate::resource::{Resource, ResourceKind};

/// A named location inside a structure ("Kitchen", "Hallway", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Where {
    pub where_id: String,
    pub name: String,
}

impl Keyed for Where {
    fn key(&self) -> &str {
        &self.where_id
    }
}

/// All the data for an individual structure (a home)
///
/// `thermostats`, `smoke_co_alarms` and `cameras` hold device IDs. `wheres`
/// is keyed by where ID, like the device collections; a single flat where
/// record is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    pub structure_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thermostats: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub smoke_co_alarms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cameras: Vec<String>,
    pub away: String,
    pub name: String,
    pub country_code: String,
    pub postal_code: String,
    pub peak_period_start_time: String,
    pub peak_period_end_time: String,
    pub time_zone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eta: Vec<String>,
    pub eta_begin: String,
    pub rhr_enrollment: bool,
    pub wwn_security_state: String,
    #[serde(deserialize_with = "keyed_or_single")]
    pub wheres: BTreeMap<String, Where>,
    pub co_alarm_state: String,
    pub smoke_alarm_state: String,
}

impl Resource for Structure {
    const KIND: ResourceKind = ResourceKind::Structures;
}
