//! Resource kinds exposed by the API and the trait tying records to them

use serde::de::DeserializeOwned;
use std::fmt;

/// The resource collections served under the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Thermostats,
    Cameras,
    SmokeCoAlarms,
    Structures,
}

impl ResourceKind {
    /// Path segment of this collection, e.g. `smoke_co_alarms`
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Thermostats => "thermostats",
            ResourceKind::Cameras => "cameras",
            ResourceKind::SmokeCoAlarms => "smoke_co_alarms",
            ResourceKind::Structures => "structures",
        }
    }

    /// Name used when a whole resource is missing, e.g. `Smoke/CO Alarm`
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Thermostats => "Thermostat",
            ResourceKind::Cameras => "Camera",
            ResourceKind::SmokeCoAlarms => "Smoke/CO Alarm",
            ResourceKind::Structures => "Structure",
        }
    }

    /// How the identifier of this kind is named in validation errors
    pub fn id_label(&self) -> &'static str {
        match self {
            ResourceKind::Structures => "Structure ID",
            _ => "Device ID",
        }
    }

    /// Title used when a single field is missing, e.g. `Smoke Co Alarm`
    pub fn title(&self) -> String {
        title_case(self.path())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A typed record that lives in one of the API's resource collections
pub trait Resource: DeserializeOwned {
    /// The collection this record is read from
    const KIND: ResourceKind;
}

/// Title-case a snake_case collection name and drop its plural `s`
///
/// `smoke_co_alarms` becomes `Smoke Co Alarm`.
pub fn title_case(name: &str) -> String {
    let words: Vec<String> = name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    words
        .join(" ")
        .trim_end_matches(|c| c == 's' || c == ' ')
        .to_string()
}
