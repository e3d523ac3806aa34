use crate::client::NestClient;
use crate::models::Camera;
use crate::resource::ResourceKind;
use crate::value::FieldValues;
use crate::Result;

define_field_getters! {
    kind: Cameras,
    prefix: camera,
    fields: {
        software_version: String,
        name: String,
        is_online: bool,
        is_streaming: bool,
        is_audio_input_enabled: bool,
        is_video_history_enabled: bool,
        web_url: String,
        app_url: String,
        last_event: String,
    }
}

impl NestClient {
    /// Fetch all cameras on the account
    pub fn cameras(&self) -> Result<Vec<Camera>> {
        self.get_all()
    }

    /// Fetch one camera by device ID
    pub fn camera(&self, device_id: &str) -> Result<Camera> {
        self.get(device_id)
    }

    pub fn turn_on_streaming(&self, device_id: &str) -> Result<()> {
        self.set_streaming(device_id, true)
    }

    pub fn turn_off_streaming(&self, device_id: &str) -> Result<()> {
        self.set_streaming(device_id, false)
    }

    fn set_streaming(&self, device_id: &str, enabled: bool) -> Result<()> {
        self.set_value(
            ResourceKind::Cameras,
            device_id,
            &FieldValues::new().with("is_streaming", enabled),
        )
    }
}
