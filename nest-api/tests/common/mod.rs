//! Shared helpers for mock-server integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use mockito::{Matcher, Mock, Server, ServerGuard};
use nest_api::NestClient;

pub const TOKEN: &str = "TEST";

/// Load a JSON document from `tests/fixtures`
pub fn fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

/// Wrap a fixture in a collection keyed by the device ID `abc`
pub fn collection(filename: &str) -> String {
    format!("{{\"abc\":{}}}", fixture(filename))
}

/// Start a fresh mock server
pub fn server() -> ServerGuard {
    Server::new()
}

/// Client pointed at `<server>/devices` with the test token
pub fn client(server: &ServerGuard) -> NestClient {
    NestClient::new(TOKEN).with_base_url(&format!("{}/devices", server.url()))
}

/// Authenticated GET under `/devices` answered with `body`
pub fn mock_get(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", format!("/devices/{}", path).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_body(body)
        .create()
}

/// Authenticated PUT under `/devices` expecting exactly `json`
pub fn mock_put(server: &mut ServerGuard, path: &str, json: &str) -> Mock {
    server
        .mock("PUT", format!("/devices/{}", path).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(json.to_string()))
        .with_status(200)
        .with_body(json)
        .create()
}

/// Catch-all mocks that must never be hit; check them with [`assert_untouched`]
pub fn mock_nothing(server: &mut ServerGuard) -> Vec<Mock> {
    ["GET", "PUT"]
        .iter()
        .map(|method| {
            server
                .mock(method, Matcher::Any)
                .with_status(200)
                .with_body("unexpected")
                .expect(0)
                .create()
        })
        .collect()
}

pub fn assert_untouched(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert();
    }
}
