//! Structure reads against a mock API server

mod common;

use common::*;

#[test]
fn test_structures_collection() {
    let mut server = server();
    let _mock = mock_get(&mut server, "structures", &collection("structure.json"));

    let structures = client(&server).structures().unwrap();
    assert_eq!(structures.len(), 1);

    let structure = &structures[0];
    assert_eq!(structure.structure_id, "abc123");
    assert_eq!(structure.thermostats, vec!["123".to_string()]);
    assert_eq!(structure.smoke_co_alarms, vec!["456".to_string()]);
    assert_eq!(structure.cameras, vec!["789".to_string()]);
    assert_eq!(structure.away, "home");
    assert!(structure.rhr_enrollment);
    assert_eq!(structure.wheres["qwerty"].name, "Kitchen");
}

#[test]
fn test_structures_empty_response() {
    let mut server = server();
    let _mock = mock_get(&mut server, "structures", "");

    assert!(client(&server).structures().unwrap().is_empty());
}

#[test]
fn test_structure_by_id() {
    let mut server = server();
    let _mock = mock_get(&mut server, "structures/abc", &fixture("structure.json"));

    let structure = client(&server).structure("abc").unwrap();
    assert_eq!(structure.time_zone, "America/Chicago");
    assert_eq!(structure.eta, vec!["trip1".to_string()]);
}

#[test]
fn test_structure_device_lists() {
    let mut server = server();
    let _m1 = mock_get(&mut server, "structures/abc/thermostats", r#"["123"]"#);
    let _m2 = mock_get(&mut server, "structures/abc/smoke_co_alarms", r#"["456"]"#);
    let _m3 = mock_get(&mut server, "structures/abc/cameras", r#"["789","790"]"#);
    let client = client(&server);

    assert_eq!(client.structure_thermostats("abc").unwrap(), vec!["123"]);
    assert_eq!(client.structure_smoke_co_alarms("abc").unwrap(), vec!["456"]);
    assert_eq!(client.structure_cameras("abc").unwrap(), vec!["789", "790"]);
}

#[test]
fn test_structure_text_fields() {
    let mut server = server();
    let _m1 = mock_get(&mut server, "structures/abc/away", "home");
    let _m2 = mock_get(&mut server, "structures/abc/name", "test structure");
    let client = client(&server);

    assert_eq!(client.structure_away("abc").unwrap(), "home");
    assert_eq!(client.structure_name("abc").unwrap(), "test structure");
}

#[test]
fn test_structure_missing_field() {
    let mut server = server();
    let _mock = mock_get(&mut server, "structures/abc/away", "");

    let err = client(&server).structure_away("abc").unwrap_err();
    assert_eq!(err.to_string(), "Structure away not found");
}

#[test]
fn test_structure_blank_id_sends_nothing() {
    let mut server = server();
    let guards = mock_nothing(&mut server);
    let client = client(&server);

    assert_eq!(
        client.structure("").unwrap_err().to_string(),
        "Structure ID must not be empty"
    );
    assert_eq!(
        client.structure_cameras(" ").unwrap_err().to_string(),
        "Structure ID must not be empty"
    );
    assert_untouched(&guards);
}

#[test]
fn test_structures_with_flat_where_record() {
    let mut server = server();
    let _mock = mock_get(
        &mut server,
        "structures",
        r#"{"abc":{"structure_id":"abc","wheres":{"where_id":"w1","name":"Kitchen"}}}"#,
    );

    let structures = client(&server).structures().unwrap();
    assert_eq!(structures.len(), 1);
    assert_eq!(structures[0].wheres.len(), 1);
    assert_eq!(structures[0].wheres["w1"].name, "Kitchen");
}

#[test]
fn test_structures_with_blank_where_record() {
    let mut server = server();
    let _mock = mock_get(
        &mut server,
        "structures",
        r#"{"abc":{"structure_id":"abc","wheres":{"where_id":"","name":""}}}"#,
    );

    let structures = client(&server).structures().unwrap();
    assert_eq!(structures[0].structure_id, "abc");
    assert!(structures[0].wheres.is_empty());
}

#[test]
fn test_structures_null_response() {
    let mut server = server();
    let _mock = mock_get(&mut server, "structures", "null");

    assert!(client(&server).structures().unwrap().is_empty());
}
