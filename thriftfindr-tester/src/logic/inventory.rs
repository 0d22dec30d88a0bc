//! Seeded store and item inventories for the property sweeps.
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thriftfindr_core::{
    ApiItem, ApiStore, ItemRecord, StoreRecord, normalize_items, normalize_stores,
};

const ITEM_ADJECTIVES: &[&str] = &[
    "Blue", "Vintage", "Wool", "Retro", "Denim", "Brass", "Linen", "Velvet",
];
const ITEM_NOUNS: &[&str] = &[
    "Jacket", "Dress", "Lamp", "Record", "Novel", "Scarf", "Boots", "Vase", "Cardigan", "Armchair",
];
const ITEM_TAGS: &[&str] = &[
    "Clothing", "Decor", "Music", "Books", "vintage", "denim", "blue", "outerwear", "retro",
    "vinyl",
];
const STORE_PREFIXES: &[&str] = &["Second", "Golden", "Old Town", "Corner", "Hidden"];
const STORE_SUFFIXES: &[&str] = &["Finds", "Thrift", "Vintage", "Emporium", "Attic"];
const STREETS: &[&str] = &["Mill Lane", "High Street", "Elm Avenue", "Harbor Road"];

/// Terms the sweeps type into the search box, including mixed case and a miss.
pub const SEARCH_TERMS: &[&str] = &[
    "", "blue", "JACKET", "vintage", "Denim", "lamp", "main", "zzz-no-match",
];

/// How large a generated inventory is and how much of it is junk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryShape {
    pub stores: usize,
    pub max_items: usize,
    /// Chance in percent that a raw item is malformed.
    pub invalid_percent: u32,
}

impl Default for InventoryShape {
    fn default() -> Self {
        Self {
            stores: 12,
            max_items: 40,
            invalid_percent: 10,
        }
    }
}

impl InventoryShape {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            stores: 0,
            max_items: 0,
            invalid_percent: 0,
        }
    }
}

/// Raw payloads plus their normalized records for one seed.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub seed: u64,
    pub raw_stores: Vec<ApiStore>,
    pub raw_items: Vec<ApiItem>,
    pub stores: Vec<StoreRecord>,
    pub items: Vec<ItemRecord>,
}

impl Inventory {
    #[must_use]
    pub fn generate(seed: u64, shape: InventoryShape) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let raw_stores: Vec<ApiStore> = (1..=shape.stores as u64)
            .map(|id| random_store(&mut rng, id))
            .collect();
        let item_count = if shape.max_items == 0 {
            0
        } else {
            rng.gen_range(0..=shape.max_items)
        };
        let raw_items: Vec<ApiItem> = (1..=item_count as u64)
            .map(|id| random_item(&mut rng, id, shape.invalid_percent))
            .collect();

        Self {
            seed,
            stores: normalize_stores(raw_stores.clone()),
            items: normalize_items(raw_items.clone()),
            raw_stores,
            raw_items,
        }
    }

    /// A second generator for expectations that need their own random walk.
    #[must_use]
    pub fn walk_rng(&self, salt: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed ^ salt.rotate_left(17))
    }

    #[must_use]
    pub fn rejected_items(&self) -> usize {
        self.raw_items.len() - self.items.len()
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn random_store(rng: &mut ChaCha8Rng, id: u64) -> ApiStore {
    ApiStore {
        id,
        name: format!("{} {}", pick(rng, STORE_PREFIXES), pick(rng, STORE_SUFFIXES)),
        address: Some(format!("{} {}", rng.gen_range(1..400), pick(rng, STREETS))),
        hours: rng.gen_bool(0.8).then(|| "10am-6pm".to_string()),
        image_url: None,
    }
}

fn random_item(rng: &mut ChaCha8Rng, id: u64, invalid_percent: u32) -> ApiItem {
    let tag_count = rng.gen_range(0..=3);
    let tags: Vec<&str> = ITEM_TAGS.choose_multiple(rng, tag_count).copied().collect();
    let mut item = ApiItem {
        id,
        store_id: Some(rng.gen_range(1..=5)),
        name: format!("{} {}", pick(rng, ITEM_ADJECTIVES), pick(rng, ITEM_NOUNS)),
        brand: rng.gen_bool(0.3).then(|| "Levi's".to_string()),
        price: f64::from(rng.gen_range(0_u32..20_000)) / 100.0,
        original_price: None,
        tags: (!tags.is_empty()).then(|| format!(" {} ,", tags.join(" , "))),
        image_url: None,
        description: rng.gen_bool(0.5).then(|| "Gently used.".to_string()),
    };
    if rng.gen_ratio(invalid_percent.min(100), 100) {
        if rng.gen_bool(0.5) {
            item.name = "   ".to_string();
        } else {
            item.price = -1.0;
        }
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_inventory() {
        let a = Inventory::generate(42, InventoryShape::default());
        let b = Inventory::generate(42, InventoryShape::default());
        assert_eq!(a.raw_items, b.raw_items);
        assert_eq!(a.items, b.items);
        assert_eq!(a.stores, b.stores);
    }

    #[test]
    fn junk_items_are_dropped() {
        let shape = InventoryShape {
            stores: 1,
            max_items: 60,
            invalid_percent: 100,
        };
        let inventory = Inventory::generate(7, shape);
        assert!(inventory.items.is_empty());
        assert_eq!(inventory.rejected_items(), inventory.raw_items.len());
    }

    #[test]
    fn empty_shape_generates_nothing() {
        let inventory = Inventory::generate(1, InventoryShape::empty());
        assert!(inventory.raw_items.is_empty());
        assert!(inventory.stores.is_empty());
    }
}
