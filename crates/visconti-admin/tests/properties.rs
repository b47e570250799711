//! Property checks for filtering and pagination

#![allow(clippy::indexing_slicing)]

use proptest::prelude::*;
use visconti_admin::state::menu::{CategoryFilter, MenuState};
use visconti_admin::state::pagination::{PAGE_SIZE, Pager};
use visconti_core::{Category, MenuItem, MenuItemId};

fn category() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

fn items() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(category(), 0..40).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| MenuItem {
                id: MenuItemId::new(format!("item-{i}")),
                name: format!("Dish {i}"),
                description: String::new(),
                price: "1.00".into(),
                category,
                image: String::new(),
                available: true,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_is_an_ordered_subset(items in items(), chosen in category()) {
        let mut state = MenuState::default();
        state.apply_list(items.clone());
        state.set_filter(CategoryFilter::Only(chosen));

        let filtered: Vec<_> = state.filtered().into_iter().cloned().collect();
        let expected: Vec<_> = items.into_iter().filter(|i| i.category == chosen).collect();
        prop_assert_eq!(filtered, expected);
        prop_assert_eq!(state.pager.page(), 0);
    }

    #[test]
    fn paging_never_leaves_range(items in items(), steps in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut state = MenuState::default();
        state.apply_list(items);
        let len = state.filtered_len();

        for forward in steps {
            if forward { state.next_page() } else { state.prev_page() }
            prop_assert!(state.pager.page() < Pager::total_pages(len));
            prop_assert!(state.page_items().len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn page_bounds_agree_with_total(len in 0_usize..200) {
        let total = Pager::total_pages(len);
        prop_assert!(total >= 1);

        let mut pager = Pager::default();
        prop_assert!(!pager.has_prev());
        for _ in 1..total {
            prop_assert!(pager.has_next(len));
            pager.next(len);
        }
        prop_assert_eq!(pager.page(), total - 1);
        prop_assert!(!pager.has_next(len));
        prop_assert_eq!(pager.has_prev(), total > 1);
    }
}
