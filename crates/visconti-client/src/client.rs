//! HTTP client for communicating with the restaurant backend

use crate::{AdminApi, ClientError, ClientResult, MenuItemForm};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use visconti_core::{
    BadgeId, ClientConfig, GroupedMenu, ImageId, MenuImage, MenuItem, MenuItemId, NewOfferBadge,
    OfferBadge, PendingFile,
};

/// Body of a non-success response
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// API client for making HTTP requests to the backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client on top of an existing `reqwest` client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL every path is joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` to the base URL with exactly one `/` between them
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Fetch the runtime configuration document served next to the UI bundle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the document is malformed.
    pub async fn fetch_client_config(url: &str) -> ClientResult<ClientConfig> {
        debug!(%url, "fetching runtime configuration");
        let response = Client::new().get(url).send().await?;
        read_json(response, url).await
    }

    fn menu_form(form: &MenuItemForm) -> ClientResult<Form> {
        let fields = Form::new()
            .text("name", form.name.clone())
            .text("description", form.description.clone())
            .text("price", form.price.clone())
            .text("category", form.category.as_str());

        match &form.image {
            Some(file) => Ok(fields.part("image", file_part(file)?)),
            None => Ok(fields),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for ApiClient {
    async fn list_menu(&self) -> ClientResult<GroupedMenu> {
        let url = self.url("api/menu");
        debug!(%url, "GET");
        send_json(self.client.get(&url), "api/menu").await
    }

    async fn create_menu_item(&self, form: &MenuItemForm) -> ClientResult<MenuItem> {
        let url = self.url("api/menu");
        debug!(%url, with_image = form.image.is_some(), "POST");
        let request = self.client.post(&url).multipart(Self::menu_form(form)?);
        send_json(request, "api/menu").await
    }

    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        form: &MenuItemForm,
    ) -> ClientResult<MenuItem> {
        let endpoint = format!("api/menu/{id}");
        let url = self.url(&endpoint);
        debug!(%url, with_image = form.image.is_some(), "PUT");
        let request = self.client.put(&url).multipart(Self::menu_form(form)?);
        send_json(request, &endpoint).await
    }

    async fn delete_menu_item(&self, id: &MenuItemId) -> ClientResult<()> {
        let url = self.url(&format!("api/menu/{id}"));
        debug!(%url, "DELETE");
        send_empty(self.client.delete(&url)).await
    }

    async fn list_badges(&self) -> ClientResult<Vec<OfferBadge>> {
        let url = self.url("api/offer-badges");
        debug!(%url, "GET");
        send_json(self.client.get(&url), "api/offer-badges").await
    }

    async fn create_badge(&self, badge: &NewOfferBadge) -> ClientResult<OfferBadge> {
        let url = self.url("api/offer-badges");
        debug!(%url, "POST");
        send_json(self.client.post(&url).json(badge), "api/offer-badges").await
    }

    async fn delete_badge(&self, id: &BadgeId) -> ClientResult<()> {
        let url = self.url(&format!("api/offer-badges/{id}"));
        debug!(%url, "DELETE");
        send_empty(self.client.delete(&url)).await
    }

    async fn list_images(&self) -> ClientResult<Vec<MenuImage>> {
        let url = self.url("api/images");
        debug!(%url, "GET");
        send_json(self.client.get(&url), "api/images").await
    }

    async fn upload_image(&self, file: &PendingFile) -> ClientResult<MenuImage> {
        let url = self.url("api/images");
        debug!(%url, file = %file.file_name, size = file.size(), "POST");
        let form = Form::new().part("image", file_part(file)?);
        send_json(self.client.post(&url).multipart(form), "api/images").await
    }

    async fn delete_image(&self, id: &ImageId) -> ClientResult<()> {
        let url = self.url(&format!("api/images/{id}"));
        debug!(%url, "DELETE");
        send_empty(self.client.delete(&url)).await
    }
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
) -> ClientResult<T> {
    let response = request.send().await?;
    read_json(response, endpoint).await
}

async fn send_empty(request: RequestBuilder) -> ClientResult<()> {
    let response = request.send().await?;
    check_status(response).await.map(drop)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn file_part(file: &PendingFile) -> ClientResult<Part> {
    Part::bytes(file.bytes.to_vec())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| {
            ClientError::InvalidRequest(format!(
                "invalid content type '{}': {e}",
                file.content_type
            ))
        })
}

async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .and_then(|body| body.message);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    endpoint: &str,
) -> ClientResult<T> {
    let body = check_status(response).await?.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::Parse {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:5000/", "api/menu")]
    #[case("http://localhost:5000", "api/menu")]
    #[case("http://localhost:5000//", "/api/menu")]
    #[case("http://localhost:5000", "/api/menu")]
    fn test_url_join_uses_single_slash(#[case] base: &str, #[case] path: &str) {
        let client = ApiClient::new(base);
        assert_eq!(client.url(path), "http://localhost:5000/api/menu");
    }

    #[test]
    fn test_menu_form_without_image_has_no_image_part() {
        let form = MenuItemForm {
            name: "Margherita".into(),
            description: String::new(),
            price: "8.50".into(),
            category: visconti_core::Category::PizzeTradizionali,
            image: None,
        };
        assert!(ApiClient::menu_form(&form).is_ok());
    }
}
