use crate::client::NestClient;
use crate::models::Structure;
use crate::Result;

// Device lists come back as JSON arrays of device IDs
define_field_getters! {
    kind: Structures,
    prefix: structure,
    fields: {
        thermostats: Vec<String>,
        smoke_co_alarms: Vec<String>,
        cameras: Vec<String>,
        away: String,
        name: String,
    }
}

impl NestClient {
    /// Fetch all structures (homes) on the account
    pub fn structures(&self) -> Result<Vec<Structure>> {
        self.get_all()
    }

    /// Fetch one structure by structure ID
    pub fn structure(&self, structure_id: &str) -> Result<Structure> {
        self.get(structure_id)
    }
}
