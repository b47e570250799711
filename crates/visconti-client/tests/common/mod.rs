//! Shared fixtures for client integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use visconti_client::ApiClient;
use wiremock::{Match, MockServer, Request};

/// Start a mock backend and a client pointed at it
pub async fn backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    // Trailing slash mirrors the default configuration
    let client = ApiClient::new(format!("{}/", server.uri()));
    (server, client)
}

/// A menu item as the backend serializes it
pub fn item(id: &str, name: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "description": format!("{name} description"),
        "price": "9.00",
        "category": category,
        "image": format!("https://cdn.example/{id}.jpg"),
        "available": true
    })
}

/// A grouped menu body with categories in the given order
///
/// Built as text because `json!` sorts object keys.
pub fn grouped_menu(categories: &[(&str, Vec<Value>)]) -> String {
    let groups: Vec<String> = categories
        .iter()
        .map(|(category, items)| format!("{}: {}", json!(category), json!(items)))
        .collect();
    format!(r#"{{"groupedItems": {{{}}}}}"#, groups.join(", "))
}

/// Matches multipart bodies that do or do not carry a part named `name`
pub struct HasPart {
    name: &'static str,
    expected: bool,
}

impl HasPart {
    pub const fn present(name: &'static str) -> Self {
        Self {
            name,
            expected: true,
        }
    }

    pub const fn absent(name: &'static str) -> Self {
        Self {
            name,
            expected: false,
        }
    }
}

impl Match for HasPart {
    fn matches(&self, request: &Request) -> bool {
        let body = String::from_utf8_lossy(&request.body);
        body.contains(&format!("name=\"{}\"", self.name)) == self.expected
    }
}

/// Matches bodies containing `needle` as raw bytes
///
/// Unlike `body_string_contains`, this also matches bodies that carry
/// binary file parts.
pub struct BodyContains(Vec<u8>);

impl BodyContains {
    pub fn text(needle: &str) -> Self {
        Self(needle.as_bytes().to_vec())
    }

    pub fn bytes(needle: &[u8]) -> Self {
        Self(needle.to_vec())
    }
}

impl Match for BodyContains {
    fn matches(&self, request: &Request) -> bool {
        !self.0.is_empty() && request.body.windows(self.0.len()).any(|w| w == self.0.as_slice())
    }
}
