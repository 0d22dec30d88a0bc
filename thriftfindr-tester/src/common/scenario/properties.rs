//! Property sweeps over generated inventories.
use anyhow::{Result, ensure};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cell::Cell;
use std::rc::Rc;
use thriftfindr_core::constants::{CAROUSEL_SCROLL_STEP, ITEM_PAGE_SIZE, STORE_PAGE_SIZE};
use thriftfindr_core::{
    BrowseState, CategoryFilter, ModalAction, ModalController, PageMarker, PagerState,
    ScrollAffordance, ScrollDirection, ScrollLock, ScrollMetrics, filter_visible, matches_category,
    matches_search, page_markers, scroll_target, store_items_url,
};

use super::PropertyScenario;
use crate::logic::{Inventory, InventoryShape, SEARCH_TERMS, SweepPlan};

const WALK_STEPS: usize = 40;

pub fn pagination_window() -> PropertyScenario {
    PropertyScenario::new(
        "Pagination Window",
        SweepPlan::default().with_expectation(pagination_window_expectation),
    )
}

pub fn category_toggle() -> PropertyScenario {
    PropertyScenario::new(
        "Category Toggle Walk",
        SweepPlan::default().with_expectation(category_toggle_expectation),
    )
}

pub fn modal_exclusivity() -> PropertyScenario {
    PropertyScenario::new(
        "Modal Exclusivity and Scroll Lock",
        SweepPlan::new(InventoryShape {
            invalid_percent: 0,
            ..InventoryShape::default()
        })
        .with_expectation(modal_exclusivity_expectation),
    )
}

pub fn carousel_affordance() -> PropertyScenario {
    PropertyScenario::new(
        "Carousel Scroll Affordances",
        SweepPlan::new(InventoryShape::empty()).with_expectation(carousel_affordance_expectation),
    )
}

pub fn normalization() -> PropertyScenario {
    PropertyScenario::new(
        "Record Normalization",
        SweepPlan::new(InventoryShape {
            invalid_percent: 25,
            ..InventoryShape::default()
        })
        .with_expectation(normalization_expectation),
    )
}

/// Random subset of the detail page pill names.
fn random_pills(rng: &mut impl Rng) -> Vec<String> {
    let names: Vec<String> = CategoryFilter::store_detail()
        .pills()
        .iter()
        .map(|pill| pill.name.clone())
        .collect();
    let count = rng.gen_range(0..=2);
    names.choose_multiple(rng, count).cloned().collect()
}

/// Paging through every page reproduces the filtered list exactly.
pub fn pipeline_expectation(inventory: &Inventory) -> Result<()> {
    let mut rng = inventory.walk_rng(0x5EA_2C4);
    for term in SEARCH_TERMS {
        let pills = random_pills(&mut rng);
        let mut state = BrowseState::store_detail(ITEM_PAGE_SIZE);
        state.set_search_term(*term);
        for pill in &pills {
            state.toggle_category(pill);
        }

        let expected = filter_visible(&inventory.items, term, &pills);
        let first = state.apply(&inventory.items);
        ensure!(
            first.total_matches == expected.len(),
            "term '{term}' pills {pills:?}: {} matches, expected {}",
            first.total_matches,
            expected.len()
        );
        ensure!(
            first.total_pages == expected.len().div_ceil(ITEM_PAGE_SIZE),
            "term '{term}': {} pages for {} matches",
            first.total_pages,
            expected.len()
        );

        let mut seen = Vec::with_capacity(expected.len());
        for page in 1..=first.total_pages {
            state.go_to_page(page, first.total_pages);
            let slice = state.apply(&inventory.items);
            ensure!(
                slice.items.len() <= ITEM_PAGE_SIZE,
                "page {page} holds {} items",
                slice.items.len()
            );
            if page < first.total_pages {
                ensure!(
                    slice.items.len() == ITEM_PAGE_SIZE,
                    "non-final page {page} holds {} items",
                    slice.items.len()
                );
            }
            for item in &slice.items {
                ensure!(
                    matches_search(*item, term) && matches_category(*item, &pills),
                    "item {} leaked through term '{term}' pills {pills:?}",
                    item.id
                );
            }
            seen.extend(slice.items.iter().map(|item| item.id));
        }
        let expected_ids: Vec<u64> = expected.iter().map(|item| item.id).collect();
        ensure!(
            seen == expected_ids,
            "term '{term}': paging reordered or dropped items"
        );
    }

    let mut listing = BrowseState::store_listing(STORE_PAGE_SIZE);
    listing.toggle_category("Books");
    let page = listing.apply(&inventory.stores);
    ensure!(
        page.total_matches == inventory.stores.len(),
        "listing pills must not filter stores ({} of {})",
        page.total_matches,
        inventory.stores.len()
    );
    Ok(())
}

fn pagination_window_expectation(inventory: &Inventory) -> Result<()> {
    let mut rng = inventory.walk_rng(0x9A6E);
    let mut totals = vec![
        0,
        1,
        2,
        inventory.items.len().div_ceil(ITEM_PAGE_SIZE),
    ];
    totals.extend((0..4).map(|_| rng.gen_range(3..=60)));

    for total in totals {
        for current in 1..=total.max(1) {
            let markers = page_markers(current, total);
            let pager = PagerState::new(current, total);
            ensure!(
                pager.is_visible() == (total > 1),
                "pager visibility wrong for {total} pages"
            );
            if total <= 1 {
                ensure!(markers.is_empty(), "{total} pages should render no markers");
                continue;
            }
            ensure!(markers.len() <= 9, "({current}, {total}) has {} markers", markers.len());
            ensure!(
                markers.first() == Some(&PageMarker::Page(1))
                    && markers.last() == Some(&PageMarker::Page(total)),
                "({current}, {total}) must start at 1 and end at {total}"
            );

            let mut previous: Option<usize> = None;
            let mut gap_pending = false;
            for marker in &markers {
                match *marker {
                    PageMarker::Ellipsis => {
                        ensure!(!gap_pending, "({current}, {total}) has adjacent gaps");
                        gap_pending = true;
                    }
                    PageMarker::Page(page) => {
                        if let Some(last) = previous {
                            ensure!(page > last, "({current}, {total}) is not increasing");
                            if gap_pending {
                                ensure!(
                                    page - last > 2,
                                    "({current}, {total}) hides a single page behind a gap"
                                );
                            } else {
                                ensure!(page == last + 1, "({current}, {total}) skips pages");
                            }
                        }
                        previous = Some(page);
                        gap_pending = false;
                    }
                }
            }

            let low = current.saturating_sub(2).max(1);
            let high = (current + 2).min(total);
            for page in low..=high {
                ensure!(
                    markers.contains(&PageMarker::Page(page)),
                    "({current}, {total}) is missing neighbour {page}"
                );
            }
        }
    }
    Ok(())
}

fn category_toggle_expectation(inventory: &Inventory) -> Result<()> {
    let mut rng = inventory.walk_rng(0xCA7);
    let names: Vec<String> = CategoryFilter::store_detail()
        .pills()
        .iter()
        .map(|pill| pill.name.clone())
        .collect();
    let mut state = BrowseState::store_detail(ITEM_PAGE_SIZE);

    for _ in 0..WALK_STEPS {
        let total = state.apply(&inventory.items).total_pages;
        state.go_to_page(rng.gen_range(0..=total + 2), total);
        ensure!(
            (1..=total.max(1)).contains(&state.current_page()),
            "page {} escaped [1, {}]",
            state.current_page(),
            total.max(1)
        );

        let before = state.categories().active_names();
        let page_before = state.current_page();
        if rng.gen_ratio(1, 8) {
            ensure!(
                !state.toggle_category("Furniture"),
                "unknown pill reported a toggle"
            );
            ensure!(
                state.categories().active_names() == before,
                "unknown pill changed the active set"
            );
            ensure!(
                state.current_page() == page_before,
                "unknown pill moved the page from {page_before}"
            );
        } else if let Some(name) = names.choose(&mut rng) {
            ensure!(state.toggle_category(name), "known pill {name} not toggled");
            let now_active = state.categories().active_names().contains(name);
            ensure!(
                now_active != before.contains(name),
                "pill {name} did not flip"
            );
            ensure!(state.current_page() == 1, "toggle must reset to page 1");
        }

        let page = state.apply(&inventory.items);
        let active = state.categories().active_names();
        ensure!(
            page.items.iter().all(|item| matches_category(*item, &active)),
            "visible item outside active pills {active:?}"
        );
    }
    Ok(())
}

#[derive(Clone, Default)]
struct TrackingLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock for TrackingLock {
    fn lock(&self) {
        self.locked.set(true);
    }

    fn unlock(&self) {
        self.locked.set(false);
    }
}

fn modal_exclusivity_expectation(inventory: &Inventory) -> Result<()> {
    let mut rng = inventory.walk_rng(0x30DA1);
    let lock = TrackingLock::default();
    let mut modals = ModalController::new(lock.clone());

    for step in 0..WALK_STEPS {
        let action = match rng.gen_range(0..6) {
            0 => match inventory.items.choose(&mut rng) {
                Some(item) => ModalAction::OpenItemDetail(item.clone()),
                None => ModalAction::OpenNewItem,
            },
            1 => ModalAction::OpenNewItem,
            2 => ModalAction::OpenStoreRegistration,
            3 => ModalAction::Close,
            4 => ModalAction::Key("Escape".to_string()),
            _ => ModalAction::Key("Enter".to_string()),
        };
        let was_open = modals.state().is_open();
        let label = format!("{action:?}");
        let changed = modals.apply(action.clone());

        match action {
            ModalAction::Close | ModalAction::Key(_) if !was_open => {
                ensure!(!changed, "step {step}: {label} changed a closed controller");
            }
            ModalAction::Key(ref key) if key != "Escape" => {
                ensure!(!changed, "step {step}: {label} should be ignored");
            }
            ModalAction::Close | ModalAction::Key(_) => {
                ensure!(!modals.state().is_open(), "step {step}: {label} left a modal open");
            }
            _ => ensure!(modals.state().is_open(), "step {step}: {label} did not open"),
        }
        ensure!(
            lock.locked.get() == modals.state().is_open(),
            "step {step}: scroll lock {} while modal open {}",
            lock.locked.get(),
            modals.state().is_open()
        );
        ensure!(
            modals.is_scroll_locked() == modals.state().is_open(),
            "step {step}: guard out of sync"
        );
    }

    drop(modals);
    ensure!(!lock.locked.get(), "dropping the controller must release the lock");
    Ok(())
}

fn carousel_affordance_expectation(inventory: &Inventory) -> Result<()> {
    let mut rng = inventory.walk_rng(0xCA20);
    for _ in 0..WALK_STEPS {
        let client_width = f64::from(rng.gen_range(100_u32..1_200));
        let scroll_width = client_width + f64::from(rng.gen_range(0_u32..3_000));
        let max = scroll_width - client_width;

        let mut metrics = ScrollMetrics::new(0.0, scroll_width, client_width);
        let start = ScrollAffordance::from_metrics(metrics);
        ensure!(!start.can_scroll_left, "left arrow shown at offset 0");
        ensure!(
            start.can_scroll_right == (max > 1.0),
            "right arrow wrong at offset 0 with {max}px overflow"
        );

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_steps = (max / CAROUSEL_SCROLL_STEP).ceil() as usize + 1;
        for _ in 0..max_steps {
            let target = scroll_target(metrics, ScrollDirection::Right);
            ensure!(
                (0.0..=max).contains(&target),
                "target {target} outside [0, {max}]"
            );
            metrics.offset = target;
        }
        let end = ScrollAffordance::from_metrics(metrics);
        ensure!(
            (metrics.offset - max).abs() < f64::EPSILON,
            "scrolling right never reached the end"
        );
        ensure!(!end.can_scroll_right, "right arrow shown at the end");
        ensure!(end.can_scroll_left == (max > 0.0), "left arrow wrong at the end");

        let back = scroll_target(metrics, ScrollDirection::Left);
        ensure!(
            (back - (max - CAROUSEL_SCROLL_STEP).max(0.0)).abs() < f64::EPSILON,
            "scrolling left from {max} landed on {back}"
        );
    }
    Ok(())
}

fn normalization_expectation(inventory: &Inventory) -> Result<()> {
    ensure!(
        inventory.items.len() + inventory.rejected_items() == inventory.raw_items.len(),
        "normalization lost track of items"
    );
    let valid_raw = inventory
        .raw_items
        .iter()
        .filter(|raw| !raw.name.trim().is_empty() && raw.price >= 0.0)
        .count();
    ensure!(
        valid_raw == inventory.items.len(),
        "{} valid payloads but {} records",
        valid_raw,
        inventory.items.len()
    );

    for item in &inventory.items {
        let price = item.display_price();
        let (dollars, cents) = price
            .strip_prefix('$')
            .and_then(|rest| rest.split_once('.'))
            .ok_or_else(|| anyhow::anyhow!("item {} price '{price}' malformed", item.id))?;
        ensure!(
            !dollars.is_empty()
                && dollars.chars().all(|c| c.is_ascii_digit())
                && cents.len() == 2
                && cents.chars().all(|c| c.is_ascii_digit()),
            "item {} price '{price}' malformed",
            item.id
        );
        ensure!(
            item.tags.iter().all(|tag| !tag.is_empty() && tag.trim() == tag),
            "item {} has untrimmed tags {:?}",
            item.id,
            item.tags
        );
        ensure!(!item.image_url.is_empty(), "item {} has no image", item.id);
    }

    ensure!(
        inventory.stores.len() == inventory.raw_stores.len(),
        "named stores were dropped"
    );
    for store in &inventory.stores {
        ensure!(
            store.image_url.contains(&store.id.to_string()),
            "store {} image '{}' does not use its id",
            store.id,
            store.image_url
        );
        ensure!(
            store_items_url("", store.id) == format!("/api/stores/{}/items", store.id),
            "store {} items url wrong",
            store.id
        );
    }
    Ok(())
}
