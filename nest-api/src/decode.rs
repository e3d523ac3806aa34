//! Decoding of resource documents
//!
//! Collections are not JSON arrays: the API returns an object keyed by
//! vendor-assigned device IDs. Each value is therefore decoded on its own
//! after the outer object has been read into generic JSON values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{ApiError, Result};

/// Decode a device-ID keyed collection into typed records
///
/// An empty body or `null` stands for an empty collection. Records are
/// returned in device ID order.
pub fn decode_collection<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>> {
    if is_blank(data) {
        return Ok(Vec::new());
    }

    let documents: Option<BTreeMap<String, Value>> = serde_json::from_slice(data)?;

    documents
        .unwrap_or_default()
        .into_values()
        .map(|document| serde_json::from_value(document).map_err(ApiError::from))
        .collect()
}

/// Decode a single resource document
pub fn decode_single<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(data)?)
}

pub(crate) fn is_blank(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_whitespace)
}

/// Read JSON `null` as the type's default instead of failing
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Read a record sent either on its own or as the first element of an array
///
/// `null` and `[]` give the default.
pub(crate) fn first_or_single<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items.into_iter().next().unwrap_or_default(),
        Some(OneOrMany::One(item)) => item,
        None => T::default(),
    })
}

/// A record that carries its own key inside a keyed map
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeyedOrSingle<T> {
    Keyed(BTreeMap<String, T>),
    Single(T),
}

/// Read a map keyed by record ID, or one flat record keyed by its own ID
///
/// A flat record with every field at its default, as well as `null`, gives
/// an empty map.
pub(crate) fn keyed_or_single<'de, D, T>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq + Keyed,
{
    Ok(match Option::<KeyedOrSingle<T>>::deserialize(deserializer)? {
        Some(KeyedOrSingle::Keyed(records)) => records,
        Some(KeyedOrSingle::Single(record)) if record != T::default() => {
            BTreeMap::from([(record.key().to_string(), record)])
        }
        _ => BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Probe {
        device_id: String,
        is_online: bool,
        #[serde(deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_collection_with_one_entry() {
        let body = br#"{"abc":{"device_id":"abc","is_online":true,"tags":["x"]}}"#;
        let records: Vec<Probe> = decode_collection(body).unwrap();

        assert_eq!(
            records,
            vec![Probe {
                device_id: "abc".to_string(),
                is_online: true,
                tags: vec!["x".to_string()],
            }]
        );
    }

    #[test]
    fn test_collection_is_ordered_by_id() {
        let body = br#"{"zzz":{"device_id":"zzz"},"aaa":{"device_id":"aaa"}}"#;
        let records: Vec<Probe> = decode_collection(body).unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, vec!["aaa", "zzz"]);
    }

    #[test]
    fn test_empty_body_and_empty_object() {
        assert!(decode_collection::<Probe>(b"").unwrap().is_empty());
        assert!(decode_collection::<Probe>(b"  \n").unwrap().is_empty());
        assert!(decode_collection::<Probe>(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_null_collection_is_empty() {
        assert!(decode_collection::<Probe>(b"null").unwrap().is_empty());
        assert!(decode_collection::<Probe>(b" null\n").unwrap().is_empty());
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Zone {
        id: String,
        label: String,
    }

    impl Keyed for Zone {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "first_or_single")]
        latest: Zone,
        #[serde(deserialize_with = "keyed_or_single")]
        zones: BTreeMap<String, Zone>,
    }

    #[test]
    fn test_first_or_single_shapes() {
        let holder: Holder = serde_json::from_str(r#"{"latest":{"id":"a"}}"#).unwrap();
        assert_eq!(holder.latest.id, "a");

        let holder: Holder =
            serde_json::from_str(r#"{"latest":[{"id":"b"},{"id":"c"}]}"#).unwrap();
        assert_eq!(holder.latest.id, "b");

        for body in [r#"{"latest":[]}"#, r#"{"latest":null}"#, "{}"] {
            let holder: Holder = serde_json::from_str(body).unwrap();
            assert_eq!(holder.latest, Zone::default());
        }
    }

    #[test]
    fn test_keyed_or_single_shapes() {
        let holder: Holder =
            serde_json::from_str(r#"{"zones":{"z1":{"id":"z1","label":"Den"}}}"#).unwrap();
        assert_eq!(holder.zones["z1"].label, "Den");

        let holder: Holder =
            serde_json::from_str(r#"{"zones":{"id":"z2","label":"Hall"}}"#).unwrap();
        assert_eq!(holder.zones.len(), 1);
        assert_eq!(holder.zones["z2"].label, "Hall");

        for body in [r#"{"zones":{"id":"","label":""}}"#, r#"{"zones":null}"#, r#"{"zones":{}}"#] {
            let holder: Holder = serde_json::from_str(body).unwrap();
            assert!(holder.zones.is_empty());
        }
    }

    #[test]
    fn test_missing_unknown_and_null_fields() {
        let body = br#"{"device_id":"abc","firmware_channel":"beta","tags":null}"#;
        let record: Probe = decode_single(body).unwrap();

        assert_eq!(record.device_id, "abc");
        assert!(!record.is_online);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_malformed_outer_document() {
        let result = decode_collection::<Probe>(b"[1, 2, 3]");
        assert!(matches!(result, Err(ApiError::Decode(_))));

        let result = decode_collection::<Probe>(b"{\"abc\":");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_malformed_inner_document() {
        let result = decode_collection::<Probe>(br#"{"abc":{"is_online":"very"}}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));

        let result = decode_collection::<Probe>(br#"{"abc":42}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
