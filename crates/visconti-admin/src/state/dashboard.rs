//! Dashboard metrics

use super::{StateCell, ViewScope};
use tracing::{error, info};
use visconti_client::AdminApi;

/// Dashboard view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Fetch in flight
    pub loading: bool,
    /// Number of menu items, unset until a fetch succeeds
    pub menu_items: Option<usize>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: true,
            menu_items: None,
        }
    }
}

impl DashboardState {
    /// Count to display; `0` when unknown
    pub fn menu_items_display(&self) -> usize {
        self.menu_items.unwrap_or_default()
    }
}

/// Fetch the menu once and derive the item count
///
/// Failures are logged and leave the count unset.
pub async fn load<C: StateCell<DashboardState>>(cell: &C, api: &dyn AdminApi, scope: &ViewScope) {
    cell.with_state(|state| state.loading = true);

    let Some(result) = scope.run(api.list_menu()).await else {
        return;
    };

    let count = match result {
        Ok(menu) => {
            let total = menu.total_items();
            info!(total, "menu item count loaded");
            Some(total)
        }
        Err(e) => {
            error!(error = %e, "failed to fetch menu items for dashboard");
            None
        }
    };

    cell.with_state(|state| {
        state.loading = false;
        state.menu_items = count;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_without_count() {
        let state = DashboardState::default();
        assert!(state.loading);
        assert_eq!(state.menu_items, None);
        assert_eq!(state.menu_items_display(), 0);
    }
}
