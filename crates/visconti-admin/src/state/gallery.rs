//! Menu image gallery: validated selection, upload, delete

use super::{Confirm, StateCell, ViewScope};
use tracing::{error, info, warn};
use visconti_client::{AdminApi, ClientError, ClientResult};
use visconti_core::{Error, ImageId, MAX_IMAGE_BYTES, MenuImage, PendingFile, Strings};

/// How long success notices stay up, in milliseconds
pub const NOTICE_TTL_MS: u32 = 3_000;

/// Inline status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The chosen file is not an image
    SelectImageFile,
    /// The chosen image is over the size limit
    ImageTooLarge,
    /// Upload pressed with nothing selected
    SelectFirst,
    /// Upload succeeded
    Uploaded,
    /// Upload failed, with the server's message if it sent one
    UploadFailed(Option<String>),
    /// Delete succeeded
    Deleted,
    /// Delete failed, with the server's message if it sent one
    DeleteFailed(Option<String>),
    /// The gallery could not be fetched
    FetchFailed,
}

impl Notice {
    /// Whether this reports a problem
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Uploaded | Self::Deleted)
    }

    /// Text in the active language
    pub fn text(&self, strings: &Strings) -> String {
        match self {
            Self::SelectImageFile => strings.msg_select_image_file.to_string(),
            Self::ImageTooLarge => strings.msg_image_too_large.to_string(),
            Self::SelectFirst => strings.msg_select_first.to_string(),
            Self::Uploaded => strings.msg_upload_success.to_string(),
            Self::UploadFailed(message) => message
                .clone()
                .unwrap_or_else(|| strings.msg_upload_failed.to_string()),
            Self::Deleted => strings.msg_delete_success.to_string(),
            Self::DeleteFailed(message) => message
                .clone()
                .unwrap_or_else(|| strings.msg_delete_failed.to_string()),
            Self::FetchFailed => strings.msg_fetch_failed.to_string(),
        }
    }
}

/// Gallery view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    /// Listed images
    pub images: Vec<MenuImage>,
    /// First fetch still in flight
    pub loading: bool,
    /// Selected file awaiting upload
    pub pending: Option<PendingFile>,
    /// `data:` URL of the selected file
    pub preview: Option<String>,
    /// Upload in flight
    pub uploading: bool,
    /// Image whose delete is in flight
    pub deleting: Option<ImageId>,
    /// Current status message
    pub notice: Option<Notice>,
    notice_seq: u64,
    clear_selection_at: Option<u64>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            loading: true,
            pending: None,
            preview: None,
            uploading: false,
            deleting: None,
            notice: None,
            notice_seq: 0,
            clear_selection_at: None,
        }
    }
}

impl GalleryState {
    /// Replace the list with a fresh fetch
    pub fn apply_list(&mut self, images: Vec<MenuImage>) {
        self.images = images;
        self.loading = false;
    }

    /// Show `notice` and return its ticket for [`GalleryState::expire_notice`]
    pub fn show_notice(&mut self, notice: Notice) -> u64 {
        self.replace_notice(Some(notice))
    }

    fn replace_notice(&mut self, notice: Option<Notice>) -> u64 {
        self.notice_seq += 1;
        self.notice = notice;
        self.clear_selection_at = None;
        self.notice_seq
    }

    /// Take down the notice behind `ticket` unless a newer one replaced it
    ///
    /// After a successful upload this also clears the uploaded selection.
    pub fn expire_notice(&mut self, ticket: u64) {
        if ticket != self.notice_seq {
            return;
        }
        self.notice = None;
        if self.clear_selection_at.take() == Some(ticket) {
            self.pending = None;
            self.preview = None;
        }
    }

    /// Validate and keep a chosen file; `false` when it was rejected
    ///
    /// A rejected file leaves any earlier selection in place.
    pub fn select_file(&mut self, file: PendingFile) -> bool {
        match file.validate_image(MAX_IMAGE_BYTES) {
            Ok(()) => {
                self.preview = Some(file.to_data_url());
                self.pending = Some(file);
                self.replace_notice(None);
                true
            }
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "image selection rejected");
                let notice = match e {
                    Error::FileSizeExceeded { .. } => Notice::ImageTooLarge,
                    _ => Notice::SelectImageFile,
                };
                self.show_notice(notice);
                false
            }
        }
    }

    /// Report a failed fetch
    ///
    /// An upload still waiting for its notice to expire has its selection
    /// cleared now, since the failure notice replaces the one it waited on.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
        if self.clear_selection_at.is_some() {
            self.pending = None;
            self.preview = None;
        }
        self.show_notice(Notice::FetchFailed);
    }

    /// Forget the selection and its status
    pub fn clear_selection(&mut self) {
        self.pending = None;
        self.preview = None;
        self.replace_notice(None);
    }

    /// Start an upload of the selection
    pub fn begin_upload(&mut self) -> Option<PendingFile> {
        if self.uploading {
            return None;
        }
        let Some(file) = self.pending.clone() else {
            self.show_notice(Notice::SelectFirst);
            return None;
        };
        self.uploading = true;
        Some(file)
    }

    /// Apply the backend's answer to an upload; the success notice's ticket
    pub fn finish_upload(&mut self, result: ClientResult<MenuImage>) -> Option<u64> {
        self.uploading = false;
        match result {
            Ok(image) => {
                info!(id = %image.id, "menu image uploaded");
                let ticket = self.show_notice(Notice::Uploaded);
                self.clear_selection_at = Some(ticket);
                Some(ticket)
            }
            Err(e) => {
                error!(error = %e, "menu image upload failed");
                self.show_notice(Notice::UploadFailed(server_message(&e)));
                None
            }
        }
    }

    /// Mark `id` as being deleted; `false` while another delete is in flight
    pub fn begin_delete(&mut self, id: &ImageId) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id.clone());
        true
    }

    /// Apply the backend's answer to a delete; the success notice's ticket
    pub fn finish_delete(&mut self, result: ClientResult<()>) -> Option<u64> {
        let id = self.deleting.take();
        match result {
            Ok(()) => {
                info!(id = ?id, "menu image deleted");
                Some(self.show_notice(Notice::Deleted))
            }
            Err(e) => {
                error!(id = ?id, error = %e, "menu image delete failed");
                self.show_notice(Notice::DeleteFailed(server_message(&e)));
                None
            }
        }
    }
}

fn server_message(error: &ClientError) -> Option<String> {
    error.user_message().map(ToString::to_string)
}

/// Fetch the gallery
pub async fn load<C: StateCell<GalleryState>>(cell: &C, api: &dyn AdminApi, scope: &ViewScope) {
    let Some(result) = scope.run(api.list_images()).await else {
        return;
    };

    match result {
        Ok(images) => {
            info!(count = images.len(), "menu images loaded");
            cell.with_state(|state| state.apply_list(images));
        }
        Err(e) => {
            error!(error = %e, "failed to fetch menu images");
            cell.with_state(GalleryState::fetch_failed);
        }
    }
}

/// Upload the selection and refresh the gallery
///
/// Returns the ticket of the success notice; pass it to
/// [`GalleryState::expire_notice`] after [`NOTICE_TTL_MS`].
pub async fn upload<C: StateCell<GalleryState>>(
    cell: &C,
    api: &dyn AdminApi,
    scope: &ViewScope,
) -> Option<u64> {
    let file = cell.with_state(GalleryState::begin_upload).flatten()?;

    let result = api.upload_image(&file).await;
    let ticket = cell.with_state(|state| state.finish_upload(result)).flatten()?;
    load(cell, api, scope).await;
    Some(ticket)
}

/// Delete an image after confirmation and refresh the gallery
///
/// Returns the ticket of the success notice.
pub async fn delete<C: StateCell<GalleryState>>(
    cell: &C,
    api: &dyn AdminApi,
    confirm: &dyn Confirm,
    prompt: &str,
    id: ImageId,
    scope: &ViewScope,
) -> Option<u64> {
    if !confirm.confirm(prompt) {
        return None;
    }
    if !cell.with_state(|state| state.begin_delete(&id)).unwrap_or(false) {
        return None;
    }

    let result = api.delete_image(&id).await;
    let ticket = cell.with_state(|state| state.finish_delete(result)).flatten()?;
    load(cell, api, scope).await;
    Some(ticket)
}
