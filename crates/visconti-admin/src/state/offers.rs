//! Offer badge list and creation form
//!
//! Badges are created and deleted; there is no update.

use super::{Confirm, StateCell, ViewScope};
use chrono::NaiveDate;
use tracing::{error, info, warn};
use validator::Validate;
use visconti_client::{AdminApi, ClientResult};
use visconti_core::{BadgeId, Error, NewOfferBadge, OfferBadge, Result};

/// Raw form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeDraft {
    /// Headline
    pub title: String,
    /// Detail line; may stay empty
    pub description: String,
    /// Discount as typed
    pub discount: String,
    /// Expiry date as `YYYY-MM-DD`
    pub expiry_date: String,
}

impl BadgeDraft {
    /// Turn the input into a request body
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first missing or malformed field.
    pub fn to_new_badge(&self) -> Result<NewOfferBadge> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::validation("title", "title is required"));
        }

        let discount = self.discount.trim();
        if discount.is_empty() {
            return Err(Error::validation("discount", "discount is required"));
        }
        let discount: f64 = discount
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| Error::validation("discount", format!("'{discount}' is not a number")))?;

        let expiry = self.expiry_date.trim();
        if expiry.is_empty() {
            return Err(Error::validation("expiryDate", "expiry date is required"));
        }
        let expiry_date = NaiveDate::parse_from_str(expiry, "%Y-%m-%d")
            .map_err(|e| Error::validation("expiryDate", e.to_string()))?;

        let badge = NewOfferBadge {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            discount,
            expiry_date,
        };
        badge.validate()?;
        Ok(badge)
    }
}

/// Offer badges view state
#[derive(Debug, Clone, PartialEq)]
pub struct OffersState {
    /// Listed badges, newest creation first
    pub badges: Vec<OfferBadge>,
    /// First fetch still in flight
    pub loading: bool,
    /// Form input
    pub draft: BadgeDraft,
    /// Create in flight
    pub submitting: bool,
    /// Last submission attempt was refused before reaching the backend
    pub invalid: bool,
}

impl Default for OffersState {
    fn default() -> Self {
        Self {
            badges: Vec::new(),
            loading: true,
            draft: BadgeDraft::default(),
            submitting: false,
            invalid: false,
        }
    }
}

impl OffersState {
    /// Replace the list with a fresh fetch
    pub fn apply_list(&mut self, badges: Vec<OfferBadge>) {
        self.badges = badges;
        self.loading = false;
    }

    /// Validate the form and mark a create in flight
    pub fn begin_create(&mut self) -> Option<NewOfferBadge> {
        if self.submitting {
            return None;
        }
        match self.draft.to_new_badge() {
            Ok(badge) => {
                self.invalid = false;
                self.submitting = true;
                Some(badge)
            }
            Err(e) => {
                warn!(error = %e, "offer badge form refused");
                self.invalid = true;
                None
            }
        }
    }

    /// Apply the backend's answer to a create
    pub fn finish_create(&mut self, result: ClientResult<OfferBadge>) {
        self.submitting = false;
        match result {
            Ok(badge) => {
                self.badges.insert(0, badge);
                self.draft = BadgeDraft::default();
            }
            Err(e) => error!(error = %e, "failed to create offer badge"),
        }
    }

    /// Drop the badge with `id`; `false` if it was not listed
    pub fn remove_badge(&mut self, id: &BadgeId) -> bool {
        let before = self.badges.len();
        self.badges.retain(|badge| &badge.id != id);
        self.badges.len() != before
    }
}

/// Fetch every badge
pub async fn load<C: StateCell<OffersState>>(cell: &C, api: &dyn AdminApi, scope: &ViewScope) {
    let Some(result) = scope.run(api.list_badges()).await else {
        return;
    };

    match result {
        Ok(badges) => {
            info!(count = badges.len(), "offer badges loaded");
            cell.with_state(|state| state.apply_list(badges));
        }
        Err(e) => {
            error!(error = %e, "failed to fetch offer badges");
            cell.with_state(|state| state.loading = false);
        }
    }
}

/// Submit the form as a new badge
pub async fn create<C: StateCell<OffersState>>(cell: &C, api: &dyn AdminApi) {
    let Some(badge) = cell.with_state(OffersState::begin_create).flatten() else {
        return;
    };

    let result = api.create_badge(&badge).await;
    if let Ok(created) = &result {
        info!(id = %created.id, title = %created.title, "offer badge created");
    }
    cell.with_state(|state| state.finish_create(result));
}

/// Delete a badge after confirmation; `true` when it was removed
pub async fn delete<C: StateCell<OffersState>>(
    cell: &C,
    api: &dyn AdminApi,
    confirm: &dyn Confirm,
    prompt: &str,
    id: BadgeId,
) -> bool {
    if !confirm.confirm(prompt) {
        return false;
    }

    match api.delete_badge(&id).await {
        Ok(()) => {
            info!(%id, "offer badge deleted");
            cell.with_state(|state| state.remove_badge(&id))
                .unwrap_or(false)
        }
        Err(e) => {
            error!(%id, error = %e, "failed to delete offer badge");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn draft(title: &str, discount: &str, expiry: &str) -> BadgeDraft {
        BadgeDraft {
            title: title.into(),
            description: String::new(),
            discount: discount.into(),
            expiry_date: expiry.into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let badge = draft("Happy Hour", "20", "2025-12-31").to_new_badge().unwrap();
        assert_eq!(badge.title, "Happy Hour");
        assert!((badge.discount - 20.0).abs() < f64::EPSILON);
        assert_eq!(badge.expiry_date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(badge.description, "");
    }

    #[rstest]
    #[case(draft("", "20", "2025-12-31"), "title")]
    #[case(draft("Lunch", "", "2025-12-31"), "discount")]
    #[case(draft("Lunch", "twenty", "2025-12-31"), "discount")]
    #[case(draft("Lunch", "20", ""), "expiryDate")]
    #[case(draft("Lunch", "20", "31/12/2025"), "expiryDate")]
    #[case(draft("Lunch", "NaN", "2025-12-31"), "discount")]
    fn test_invalid_draft_names_field(#[case] input: BadgeDraft, #[case] expected: &str) {
        match input.to_new_badge().unwrap_err() {
            Error::Validation { field, .. } => assert_eq!(field, expected),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[rstest]
    #[case("120")]
    #[case("-5")]
    #[case("12.5")]
    fn test_any_numeric_discount_accepted(#[case] discount: &str) {
        let badge = draft("Lunch", discount, "2025-12-31").to_new_badge().unwrap();
        assert!((badge.discount - discount.parse::<f64>().unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_refused_form_marks_invalid_and_keeps_input() {
        let mut state = OffersState {
            draft: draft("", "20", "2025-12-31"),
            ..OffersState::default()
        };
        assert!(state.begin_create().is_none());
        assert!(state.invalid);
        assert!(!state.submitting);
        assert_eq!(state.draft.discount, "20");
    }
}
