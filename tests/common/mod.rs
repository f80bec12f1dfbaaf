#![allow(dead_code)]

use serde_json::{Value, json};
use siacentral::http::ClientConfig;
use url::Url;
use wiremock::MockServer;

/// Client settings pointing at `server` with an API prefix such as `/v2`.
pub fn config_for(server: &MockServer, prefix: &str) -> ClientConfig {
    ClientConfig::new(Url::parse(&format!("{}{prefix}", server.uri())).unwrap())
}

/// Success envelope with `payload`'s fields merged in.
pub fn success(payload: Value) -> Value {
    envelope("success", "", payload)
}

pub fn failure(message: &str) -> Value {
    envelope("error", message, json!({}))
}

fn envelope(kind: &str, message: &str, payload: Value) -> Value {
    let mut body = json!({ "type": kind, "message": message });
    if let (Some(body), Value::Object(fields)) = (body.as_object_mut(), payload) {
        body.extend(fields);
    }
    body
}

pub fn addresses(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{i:076x}")).collect()
}
