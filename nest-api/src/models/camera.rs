use serde::{Deserialize, Serialize};

use crate::decode::{first_or_single, null_as_default};
use crate::resource::{Resource, ResourceKind};

/// The last event that triggered a camera notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraEvent {
    pub has_sound: bool,
    pub has_motion: bool,
    pub has_person: bool,
    pub start_time: String,
    pub end_time: String,
    pub urls_expire_time: String,
    pub web_url: String,
    pub app_url: String,
    pub image_url: String,
    pub animated_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_zone_ids: Vec<String>,
}

/// A named region of the camera image used for motion alerts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityZone {
    pub name: String,
    pub id: String,
}

/// All the data for an individual camera
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub device_id: String,
    pub software_version: String,
    pub structure_id: String,
    pub where_id: String,
    pub where_name: String,
    pub name: String,
    pub name_long: String,
    pub is_online: bool,
    pub is_streaming: bool,
    pub is_audio_input_enabled: bool,
    pub last_is_online_change: String,
    pub is_video_history_enabled: bool,
    pub web_url: String,
    pub app_url: String,
    pub is_public_share_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_zones: Vec<ActivityZone>,
    pub public_share_url: String,
    pub snapshot_url: String,
    #[serde(deserialize_with = "first_or_single")]
    pub last_event: CameraEvent,
}

impl Resource for Camera {
    const KIND: ResourceKind = ResourceKind::Cameras;
}
