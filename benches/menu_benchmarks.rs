//! Benchmarks for menu flattening, filtering and pagination

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use indexmap::IndexMap;
use visconti_admin::state::menu::{CategoryFilter, MenuState};
use visconti_core::{Category, GroupedMenu, MenuItem, MenuItemId};

/// A grouped menu with `per_category` items in every category
fn grouped_menu(per_category: usize) -> GroupedMenu {
    let grouped_items: IndexMap<_, _> = Category::ALL
        .into_iter()
        .map(|category| {
            let items = (0..per_category)
                .map(|i| MenuItem {
                    id: MenuItemId::new(format!("{}-{i}", category.as_str())),
                    name: format!("{} {i}", category.label()),
                    description: "House speciality".to_string(),
                    price: format!("{}.50", 5 + i % 10),
                    category,
                    image: String::new(),
                    available: i % 7 != 0,
                })
                .collect::<Vec<_>>();
            (category.as_str().to_string(), items)
        })
        .collect();
    GroupedMenu { grouped_items }
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_flatten");

    for per_category in [10, 100, 1_000] {
        let menu = grouped_menu(per_category);
        group.throughput(Throughput::Elements(menu.total_items() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_category), &menu, |b, menu| {
            b.iter(|| black_box(menu.clone().into_items()));
        });
    }

    group.finish();
}

fn bench_filter_and_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_filter_page");

    for per_category in [10, 100, 1_000] {
        let mut state = MenuState::default();
        state.apply_list(grouped_menu(per_category).into_items());

        group.bench_with_input(
            BenchmarkId::new("all", per_category),
            &state,
            |b, state| b.iter(|| black_box(state.page_items())),
        );

        let mut calzoni = state.clone();
        calzoni.set_filter(CategoryFilter::Only(Category::Calzoni));
        group.bench_with_input(
            BenchmarkId::new("one_category_last_page", per_category),
            &calzoni,
            |b, state| {
                b.iter(|| {
                    let mut state = state.clone();
                    for _ in 0..per_category {
                        state.next_page();
                    }
                    black_box(state.page_items())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_filter_and_page);
criterion_main!(benches);
