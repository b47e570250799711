//! Integration tests for `ApiClient` against a mock HTTP backend

#![allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]

mod common;

use chrono::NaiveDate;
use common::{BodyContains, HasPart, backend, grouped_menu, item};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use visconti_client::{AdminApi, ApiClient, ClientError, MenuItemForm};
use visconti_core::{BadgeId, Category, ImageId, MenuItemId, NewOfferBadge, PendingFile};
use wiremock::matchers::{body_json, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

fn form(image: Option<PendingFile>) -> MenuItemForm {
    MenuItemForm {
        name: "Diavola".into(),
        description: "Spicy salami".into(),
        price: "10.50".into(),
        category: Category::PizzeSpeciali,
        image,
    }
}

#[tokio::test]
async fn test_list_menu_flattens_in_server_order() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            grouped_menu(&[
                (
                    "pizze-tradizionali",
                    vec![
                        item("a", "Margherita", "pizze-tradizionali"),
                        item("b", "Marinara", "pizze-tradizionali"),
                    ],
                ),
                ("calzoni", vec![item("c", "Calzone", "calzoni")]),
            ]),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let menu = client.list_menu().await.unwrap();
    assert_eq!(menu.total_items(), 3);

    let names: Vec<_> = menu.into_items().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Margherita", "Marinara", "Calzone"]);
}

#[tokio::test]
async fn test_malformed_menu_is_a_parse_error() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = client.list_menu().await.unwrap_err();
    match err {
        ClientError::Parse { endpoint, .. } => assert_eq!(endpoint, "api/menu"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_item_sends_multipart_with_image() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/menu"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(BodyContains::text("Diavola"))
        .and(BodyContains::text("pizze-speciali"))
        .and(HasPart::present("image"))
        .and(BodyContains::bytes(b"\x89PNG"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(item("new", "Diavola", "pizze-speciali")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let file = PendingFile::new("diavola.png", "image/png", b"\x89PNG".to_vec());
    let created = client.create_menu_item(&form(Some(file))).await.unwrap();
    assert_eq!(created.id, MenuItemId::new("new"));
    assert_eq!(created.category, Category::PizzeSpeciali);
}

#[tokio::test]
async fn test_update_without_new_image_omits_image_part() {
    let (server, client) = backend().await;
    Mock::given(method("PUT"))
        .and(path("/api/menu/abc"))
        .and(HasPart::present("price"))
        .and(HasPart::absent("image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item("abc", "Diavola", "pizze-speciali")))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .update_menu_item(&MenuItemId::new("abc"), &form(None))
        .await
        .unwrap();
    assert_eq!(updated.id, MenuItemId::new("abc"));
}

#[tokio::test]
async fn test_create_badge_posts_json() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/offer-badges"))
        .and(body_json(json!({
            "title": "Happy Hour",
            "description": "",
            "discount": 20.0,
            "expiryDate": "2025-12-31"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "b1",
            "title": "Happy Hour",
            "description": "",
            "discount": 20,
            "expiryDate": "2025-12-31T00:00:00.000Z",
            "isActive": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let badge = client
        .create_badge(&NewOfferBadge {
            title: "Happy Hour".into(),
            description: String::new(),
            discount: 20.0,
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(badge.id, BadgeId::new("b1"));
    assert_eq!(badge.expiry_date.to_string(), "2025-12-31");
}

#[tokio::test]
async fn test_upload_image_and_list() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/images"))
        .and(HasPart::present("image"))
        .and(BodyContains::text("filename=\"menu.jpg\""))
        .and(BodyContains::bytes(&[0xFF, 0xD8]))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "i1",
            "imageUrl": "https://cdn.example/menu.jpg",
            "createdAt": "2024-03-15T14:25:30Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let file = PendingFile::new("menu.jpg", "image/jpeg", vec![0xFF, 0xD8]);
    let image = client.upload_image(&file).await.unwrap();
    assert_eq!(image.id, ImageId::new("i1"));
    assert!(client.list_images().await.unwrap().is_empty());
}

#[rstest]
#[case(json!({"message": "Image exceeds limit"}), Some("Image exceeds limit"))]
#[case(json!({"error": "boom"}), None)]
#[tokio::test]
async fn test_error_status_extracts_server_message(
    #[case] body: serde_json::Value,
    #[case] expected: Option<&str>,
) {
    let (server, client) = backend().await;
    Mock::given(method("DELETE"))
        .and(path("/api/images/i1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body))
        .mount(&server)
        .await;

    let err = client.delete_image(&ImageId::new("i1")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.user_message(), expected);
}

#[tokio::test]
async fn test_delete_menu_item_accepts_empty_body() {
    let (server, client) = backend().await;
    Mock::given(method("DELETE"))
        .and(path("/api/menu/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete_menu_item(&MenuItemId::new("abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on port 9 of the loopback interface
    let client = ApiClient::new("http://127.0.0.1:9/");
    let err = client.list_badges().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_client_config() {
    let (server, _) = backend().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiBaseUrl": "https://api.visconti.example/",
            "locale": "it"
        })))
        .mount(&server)
        .await;

    let config = ApiClient::fetch_client_config(&format!("{}/config.json", server.uri()))
        .await
        .unwrap();
    assert_eq!(config.api_base_url, "https://api.visconti.example/");
    assert_eq!(config.locale, visconti_core::Locale::It);
}
