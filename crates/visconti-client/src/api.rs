//! The backend seam every view talks through

use crate::ClientResult;
use async_trait::async_trait;
use visconti_core::{
    BadgeId, Category, GroupedMenu, ImageId, MenuImage, MenuItem, MenuItemId, NewOfferBadge,
    OfferBadge, PendingFile,
};

/// Fields submitted when creating or updating a menu item
///
/// Sent as multipart. `image` is only attached when a new file was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemForm {
    /// Dish name
    pub name: String,
    /// Dish description
    pub description: String,
    /// Price as typed
    pub price: String,
    /// Menu category
    pub category: Category,
    /// Freshly selected photo
    pub image: Option<PendingFile>,
}

/// Operations offered by the restaurant backend
///
/// Views run on a single thread, so the futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait AdminApi {
    /// `GET api/menu`
    async fn list_menu(&self) -> ClientResult<GroupedMenu>;

    /// `POST api/menu`
    async fn create_menu_item(&self, form: &MenuItemForm) -> ClientResult<MenuItem>;

    /// `PUT api/menu/{id}`
    async fn update_menu_item(&self, id: &MenuItemId, form: &MenuItemForm)
    -> ClientResult<MenuItem>;

    /// `DELETE api/menu/{id}`
    async fn delete_menu_item(&self, id: &MenuItemId) -> ClientResult<()>;

    /// `GET api/offer-badges`
    async fn list_badges(&self) -> ClientResult<Vec<OfferBadge>>;

    /// `POST api/offer-badges`
    async fn create_badge(&self, badge: &NewOfferBadge) -> ClientResult<OfferBadge>;

    /// `DELETE api/offer-badges/{id}`
    async fn delete_badge(&self, id: &BadgeId) -> ClientResult<()>;

    /// `GET api/images`
    async fn list_images(&self) -> ClientResult<Vec<MenuImage>>;

    /// `POST api/images`
    async fn upload_image(&self, file: &PendingFile) -> ClientResult<MenuImage>;

    /// `DELETE api/images/{id}`
    async fn delete_image(&self, id: &ImageId) -> ClientResult<()>;
}
