//! Menu management state
//!
//! One item form at a time:
//!
//! ```text
//! closed -> editing(new | existing) -> submitting -> closed   (success)
//!                                                 -> editing  (failure)
//! ```
//!
//! Deletion asks for confirmation and removes the item only once the backend
//! acknowledges it.

use super::pagination::Pager;
use super::{Confirm, StateCell, ViewScope};
use tracing::{error, info, warn};
use visconti_client::{AdminApi, ClientResult, MenuItemForm};
use visconti_core::{Category, MenuItem, MenuItemId, PendingFile};

/// Which categories are listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    /// Selector value of the "all" option
    pub const ALL_VALUE: &'static str = "all";

    /// Whether `item` passes the filter
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == category,
        }
    }

    /// Value used by the category selector
    pub const fn value(self) -> &'static str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Parse a selector value; unknown values select everything
    pub fn from_value(value: &str) -> Self {
        value.parse().map_or(Self::All, Self::Only)
    }
}

/// Image attached to the item form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DraftImage {
    /// No image
    #[default]
    Empty,
    /// The item's current image URL
    Stored(String),
    /// A newly chosen file and its inline preview
    Pending {
        /// File to upload
        file: PendingFile,
        /// `data:` URL for display
        preview: String,
    },
}

impl DraftImage {
    /// URL to show in the form preview
    pub fn preview(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Stored(url) => Some(url).filter(|url| !url.is_empty()).map(String::as_str),
            Self::Pending { preview, .. } => Some(preview),
        }
    }

    /// The file to send, if one was chosen
    pub const fn pending(&self) -> Option<&PendingFile> {
        match self {
            Self::Pending { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Working copy of the item being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDraft {
    /// Set when editing an existing item
    pub id: Option<MenuItemId>,
    /// Dish name
    pub name: String,
    /// Dish description
    pub description: String,
    /// Price as typed
    pub price: String,
    /// Menu category
    pub category: Category,
    /// Attached image
    pub image: DraftImage,
}

impl MenuDraft {
    /// Draft pre-filled from an existing item
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            category: item.category,
            image: if item.image.is_empty() {
                DraftImage::Empty
            } else {
                DraftImage::Stored(item.image.clone())
            },
        }
    }

    /// Whether submitting updates an existing item
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Price as shown on the preview card
    pub fn price_label(&self) -> String {
        let price = self.price.trim();
        if price.is_empty() {
            "£0.00".to_string()
        } else {
            format!("£{price}")
        }
    }

    /// Fields to submit
    pub fn to_form(&self) -> MenuItemForm {
        MenuItemForm {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category,
            image: self.image.pending().cloned(),
        }
    }
}

/// A submission ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Item to update; `None` creates a new one
    pub id: Option<MenuItemId>,
    /// Fields to send
    pub form: MenuItemForm,
}

/// Menu management view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Every item, flattened in server order
    pub items: Vec<MenuItem>,
    /// First fetch still in flight
    pub loading: bool,
    /// Active category filter
    pub filter: CategoryFilter,
    /// Page cursor over the filtered items
    pub pager: Pager,
    /// Open item form
    pub draft: Option<MenuDraft>,
    /// Create or update in flight
    pub submitting: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            filter: CategoryFilter::All,
            pager: Pager::default(),
            draft: None,
            submitting: false,
        }
    }
}

impl MenuState {
    /// Replace the working set with a fresh fetch
    pub fn apply_list(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.loading = false;
        self.pager.clamp(self.filtered_len());
    }

    /// Items passing the filter
    pub fn filtered(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Number of items passing the filter
    pub fn filtered_len(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .count()
    }

    /// Whether anything passes the filter; otherwise the empty state shows
    pub fn has_visible_items(&self) -> bool {
        self.items.iter().any(|item| self.filter.matches(item))
    }

    /// Items on the current page
    pub fn page_items(&self) -> Vec<MenuItem> {
        self.pager
            .slice(&self.filtered())
            .iter()
            .map(|&item| item.clone())
            .collect()
    }

    /// Change the filter and go back to the first page
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.pager.reset();
    }

    /// Move to the next page if there is one
    pub fn next_page(&mut self) {
        let len = self.filtered_len();
        self.pager.next(len);
    }

    /// Move to the previous page if there is one
    pub const fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Open an empty form
    pub fn open_new(&mut self) {
        self.draft = Some(MenuDraft::default());
    }

    /// Open the form for the item with `id`; `false` if it is not listed
    pub fn open_edit(&mut self, id: &MenuItemId) -> bool {
        let draft = self
            .items
            .iter()
            .find(|item| &item.id == id)
            .map(MenuDraft::from_item);
        let found = draft.is_some();
        if found {
            self.draft = draft;
        }
        found
    }

    /// Close and discard the form
    pub fn close_form(&mut self) {
        self.draft = None;
    }

    /// Attach a newly chosen file, replacing any earlier choice
    pub fn select_image(&mut self, file: PendingFile) {
        if let Some(draft) = self.draft.as_mut() {
            let preview = file.to_data_url();
            draft.image = DraftImage::Pending { file, preview };
        }
    }

    /// Start a submission; `None` when there is no form or one is in flight
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.submitting {
            return None;
        }
        let draft = self.draft.as_ref()?;
        let request = SubmitRequest {
            id: draft.id.clone(),
            form: draft.to_form(),
        };
        self.submitting = true;
        Some(request)
    }

    /// Apply the backend's answer to a submission
    ///
    /// On success the returned item replaces its namesake or is appended, and
    /// the form closes. On failure the form stays open with its input.
    pub fn finish_submit(&mut self, result: ClientResult<MenuItem>) {
        self.submitting = false;
        match result {
            Ok(saved) => {
                if let Some(existing) = self.items.iter_mut().find(|item| item.id == saved.id) {
                    *existing = saved;
                } else {
                    self.items.push(saved);
                }
                let len = self.filtered_len();
                self.pager.clamp(len);
                self.draft = None;
            }
            Err(e) => error!(error = %e, "failed to save menu item"),
        }
    }

    /// Drop the item with `id`; `false` if it was not listed
    pub fn remove_item(&mut self, id: &MenuItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        if removed {
            let len = self.filtered_len();
            self.pager.clamp(len);
        }
        removed
    }
}

/// Fetch the grouped menu and flatten it into the working set
pub async fn load<C: StateCell<MenuState>>(cell: &C, api: &dyn AdminApi, scope: &ViewScope) {
    let Some(result) = scope.run(api.list_menu()).await else {
        return;
    };

    match result {
        Ok(menu) => {
            let items = menu.into_items();
            info!(count = items.len(), "menu items loaded");
            cell.with_state(|state| state.apply_list(items));
        }
        Err(e) => {
            error!(error = %e, "failed to fetch menu items");
            cell.with_state(|state| state.loading = false);
        }
    }
}

/// Send the open form as a create or update
pub async fn submit<C: StateCell<MenuState>>(cell: &C, api: &dyn AdminApi) {
    let Some(request) = cell.with_state(MenuState::begin_submit).flatten() else {
        warn!("menu item submission refused");
        return;
    };

    let result = match &request.id {
        Some(id) => api.update_menu_item(id, &request.form).await,
        None => api.create_menu_item(&request.form).await,
    };
    if let Ok(item) = &result {
        info!(id = %item.id, updated = request.id.is_some(), "menu item saved");
    }

    cell.with_state(|state| state.finish_submit(result));
}

/// Delete an item after confirmation; `true` when it was removed
pub async fn delete<C: StateCell<MenuState>>(
    cell: &C,
    api: &dyn AdminApi,
    confirm: &dyn Confirm,
    prompt: &str,
    id: MenuItemId,
) -> bool {
    if !confirm.confirm(prompt) {
        return false;
    }

    match api.delete_menu_item(&id).await {
        Ok(()) => {
            info!(%id, "menu item deleted");
            cell.with_state(|state| state.remove_item(&id))
                .unwrap_or(false)
        }
        Err(e) => {
            error!(%id, error = %e, "failed to delete menu item");
            false
        }
    }
}
