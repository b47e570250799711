//! In-memory backend for exercising views without a server

use crate::{AdminApi, ClientError, ClientResult, MenuItemForm};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use visconti_core::{
    BadgeId, GroupedMenu, ImageId, MenuImage, MenuItem, MenuItemId, NewOfferBadge, OfferBadge,
    PendingFile,
};

/// Backend operations, used to script failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List menu
    ListMenu,
    /// Create item
    CreateMenuItem,
    /// Update item
    UpdateMenuItem,
    /// Delete item
    DeleteMenuItem,
    /// List badges
    ListBadges,
    /// Create badge
    CreateBadge,
    /// Delete badge
    DeleteBadge,
    /// List images
    ListImages,
    /// Upload image
    UploadImage,
    /// Delete image
    DeleteImage,
}

/// A request received by the mock, with its payload
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `GET api/menu`
    ListMenu,
    /// `POST api/menu`
    CreateMenuItem(MenuItemForm),
    /// `PUT api/menu/{id}`
    UpdateMenuItem(MenuItemId, MenuItemForm),
    /// `DELETE api/menu/{id}`
    DeleteMenuItem(MenuItemId),
    /// `GET api/offer-badges`
    ListBadges,
    /// `POST api/offer-badges`
    CreateBadge(NewOfferBadge),
    /// `DELETE api/offer-badges/{id}`
    DeleteBadge(BadgeId),
    /// `GET api/images`
    ListImages,
    /// `POST api/images`
    UploadImage(PendingFile),
    /// `DELETE api/images/{id}`
    DeleteImage(ImageId),
}

impl Call {
    /// The operation this call performs
    pub const fn operation(&self) -> Operation {
        match self {
            Self::ListMenu => Operation::ListMenu,
            Self::CreateMenuItem(_) => Operation::CreateMenuItem,
            Self::UpdateMenuItem(..) => Operation::UpdateMenuItem,
            Self::DeleteMenuItem(_) => Operation::DeleteMenuItem,
            Self::ListBadges => Operation::ListBadges,
            Self::CreateBadge(_) => Operation::CreateBadge,
            Self::DeleteBadge(_) => Operation::DeleteBadge,
            Self::ListImages => Operation::ListImages,
            Self::UploadImage(_) => Operation::UploadImage,
            Self::DeleteImage(_) => Operation::DeleteImage,
        }
    }
}

#[derive(Debug, Default)]
struct Backend {
    menu: IndexMap<String, Vec<MenuItem>>,
    badges: Vec<OfferBadge>,
    images: Vec<MenuImage>,
    failures: HashMap<Operation, (u16, Option<String>)>,
    calls: Vec<Call>,
    next_id: u64,
}

impl Backend {
    fn record(&mut self, call: Call) -> ClientResult<()> {
        let operation = call.operation();
        self.calls.push(call);
        match self.failures.get(&operation) {
            Some((status, message)) => Err(ClientError::status(*status, message.clone())),
            None => Ok(()),
        }
    }

    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn find_item_mut(&mut self, id: &MenuItemId) -> Option<&mut MenuItem> {
        self.menu
            .values_mut()
            .flat_map(|items| items.iter_mut())
            .find(|item| &item.id == id)
    }
}

fn not_found() -> ClientError {
    ClientError::status(404, Some("Not found"))
}

fn stored_url(file: &PendingFile) -> String {
    format!("https://images.invalid/{}", file.file_name)
}

/// Mock backend for testing
///
/// Keeps the menu, badges and images in memory, records every call, and can
/// be told to fail any operation with a given status.
#[derive(Debug, Default)]
pub struct MockAdminApi {
    backend: Mutex<Backend>,
}

impl MockAdminApi {
    /// Create an empty mock backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the menu
    #[must_use]
    pub fn with_menu(self, menu: GroupedMenu) -> Self {
        self.lock().menu = menu.grouped_items;
        self
    }

    /// Seed the badge list
    #[must_use]
    pub fn with_badges(self, badges: Vec<OfferBadge>) -> Self {
        self.lock().badges = badges;
        self
    }

    /// Seed the image gallery
    #[must_use]
    pub fn with_images(self, images: Vec<MenuImage>) -> Self {
        self.lock().images = images;
        self
    }

    /// Make `operation` fail with `status` and an optional server message
    #[must_use]
    pub fn with_failure(self, operation: Operation, status: u16, message: Option<&str>) -> Self {
        self.fail(operation, status, message);
        self
    }

    /// Make `operation` fail from now on
    pub fn fail(&self, operation: Operation, status: u16, message: Option<&str>) {
        self.lock()
            .failures
            .insert(operation, (status, message.map(ToString::to_string)));
    }

    /// Let `operation` succeed again
    pub fn recover(&self, operation: Operation) {
        self.lock().failures.remove(&operation);
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Number of calls received for `operation`
    pub fn count(&self, operation: Operation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Current menu contents
    pub fn menu(&self) -> GroupedMenu {
        GroupedMenu {
            grouped_items: self.lock().menu.clone(),
        }
    }

    /// Current images
    pub fn images(&self) -> Vec<MenuImage> {
        self.lock().images.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait(?Send)]
impl AdminApi for MockAdminApi {
    async fn list_menu(&self) -> ClientResult<GroupedMenu> {
        let mut backend = self.lock();
        backend.record(Call::ListMenu)?;
        Ok(GroupedMenu {
            grouped_items: backend.menu.clone(),
        })
    }

    async fn create_menu_item(&self, form: &MenuItemForm) -> ClientResult<MenuItem> {
        let mut backend = self.lock();
        backend.record(Call::CreateMenuItem(form.clone()))?;

        let item = MenuItem {
            id: MenuItemId::new(backend.issue_id("item")),
            name: form.name.clone(),
            description: form.description.clone(),
            price: form.price.clone(),
            category: form.category,
            image: form.image.as_ref().map(stored_url).unwrap_or_default(),
            available: true,
        };
        backend
            .menu
            .entry(form.category.as_str().to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        form: &MenuItemForm,
    ) -> ClientResult<MenuItem> {
        let mut backend = self.lock();
        backend.record(Call::UpdateMenuItem(id.clone(), form.clone()))?;

        let item = backend.find_item_mut(id).ok_or_else(not_found)?;
        item.name.clone_from(&form.name);
        item.description.clone_from(&form.description);
        item.price.clone_from(&form.price);
        item.category = form.category;
        if let Some(file) = &form.image {
            item.image = stored_url(file);
        }
        Ok(item.clone())
    }

    async fn delete_menu_item(&self, id: &MenuItemId) -> ClientResult<()> {
        let mut backend = self.lock();
        backend.record(Call::DeleteMenuItem(id.clone()))?;

        let before: usize = backend.menu.values().map(Vec::len).sum();
        for items in backend.menu.values_mut() {
            items.retain(|item| &item.id != id);
        }
        let after: usize = backend.menu.values().map(Vec::len).sum();
        if before == after {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_badges(&self) -> ClientResult<Vec<OfferBadge>> {
        let mut backend = self.lock();
        backend.record(Call::ListBadges)?;
        Ok(backend.badges.clone())
    }

    async fn create_badge(&self, badge: &NewOfferBadge) -> ClientResult<OfferBadge> {
        let mut backend = self.lock();
        backend.record(Call::CreateBadge(badge.clone()))?;

        let created = OfferBadge {
            id: BadgeId::new(backend.issue_id("badge")),
            title: badge.title.clone(),
            description: Some(badge.description.clone()).filter(|d| !d.is_empty()),
            discount: badge.discount,
            expiry_date: badge.expiry_date,
            is_active: badge.expiry_date >= Utc::now().date_naive(),
        };
        backend.badges.push(created.clone());
        Ok(created)
    }

    async fn delete_badge(&self, id: &BadgeId) -> ClientResult<()> {
        let mut backend = self.lock();
        backend.record(Call::DeleteBadge(id.clone()))?;

        let before = backend.badges.len();
        backend.badges.retain(|badge| &badge.id != id);
        if backend.badges.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_images(&self) -> ClientResult<Vec<MenuImage>> {
        let mut backend = self.lock();
        backend.record(Call::ListImages)?;
        Ok(backend.images.clone())
    }

    async fn upload_image(&self, file: &PendingFile) -> ClientResult<MenuImage> {
        let mut backend = self.lock();
        backend.record(Call::UploadImage(file.clone()))?;

        let image = MenuImage {
            id: ImageId::new(backend.issue_id("image")),
            image_url: stored_url(file),
            created_at: Utc::now(),
        };
        backend.images.insert(0, image.clone());
        Ok(image)
    }

    async fn delete_image(&self, id: &ImageId) -> ClientResult<()> {
        let mut backend = self.lock();
        backend.record(Call::DeleteImage(id.clone()))?;

        let before = backend.images.len();
        backend.images.retain(|image| &image.id != id);
        if backend.images.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
