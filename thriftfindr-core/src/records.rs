//! Raw API payloads and the display-ready records built from them.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    CURRENCY_PREFIX, ITEM_IMAGE_PLACEHOLDER, NO_DESCRIPTION_LABEL, NO_TAGS_LABEL,
    STORE_DEFAULT_CATEGORY, STORE_DISTANCE_UNKNOWN, STORE_IMAGE_TEMPLATE_PREFIX,
    STORE_IMAGE_TEMPLATE_SUFFIX,
};

/// Store entry as returned by `GET /api/stores`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiStore {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Item entry as returned by `GET /api/stores/{id}/items`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiItem {
    pub id: u64,
    #[serde(default)]
    pub store_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Why a decoded payload entry was left out of the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("record {id} has a blank name")]
    BlankName { id: u64 },
    #[error("record {id} has an invalid price")]
    InvalidPrice { id: u64 },
}

/// Display-ready item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u64,
    pub store_id: u64,
    pub name: String,
    pub brand: Option<String>,
    /// Price in cents to avoid floating-point drift in display
    pub price_cents: u64,
    pub original_price_cents: Option<u64>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub image_url: String,
}

impl ItemRecord {
    /// Build a record directly from already-clean values.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, price_cents: u64, raw_tags: &str) -> Self {
        Self {
            id,
            store_id: 0,
            name: name.into(),
            brand: None,
            price_cents,
            original_price_cents: None,
            tags: parse_tags(raw_tags),
            description: None,
            image_url: ITEM_IMAGE_PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub fn display_price(&self) -> String {
        format_price_cents(self.price_cents)
    }

    #[must_use]
    pub fn display_original_price(&self) -> Option<String> {
        self.original_price_cents.map(format_price_cents)
    }

    /// Normalized tags joined with `", "`.
    #[must_use]
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }

    /// Tag line for cards, with a label when the item has none.
    #[must_use]
    pub fn tag_summary(&self) -> String {
        if self.tags.is_empty() {
            NO_TAGS_LABEL.to_string()
        } else {
            self.tag_line()
        }
    }

    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION_LABEL)
    }
}

/// Display-ready store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub hours: String,
    pub image_url: String,
}

impl StoreRecord {
    #[must_use]
    pub fn description(&self) -> String {
        format!("Hours: {}. Visit us for great finds!", self.hours)
    }

    #[must_use]
    pub const fn categories(&self) -> &'static [&'static str] {
        &[STORE_DEFAULT_CATEGORY]
    }

    #[must_use]
    pub const fn distance_label(&self) -> &'static str {
        STORE_DISTANCE_UNKNOWN
    }
}

/// Format a cent amount as `$` plus exactly two decimals.
#[must_use]
pub fn format_price_cents(cents: u64) -> String {
    format!("{CURRENCY_PREFIX}{}.{:02}", cents / 100, cents % 100)
}

/// Convert an API price into cents, rounding half away from zero.
///
/// Negative and non-finite prices have no cent value.
#[must_use]
pub fn price_to_cents(price: f64) -> Option<u64> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    // Round the exact binary value to two places, the way the price is displayed.
    let fixed = format!("{price:.2}");
    let (whole, fraction) = fixed.split_once('.')?;
    let whole: u64 = whole.parse().ok()?;
    let fraction: u64 = fraction.parse().ok()?;
    whole.checked_mul(100)?.checked_add(fraction)
}

/// Split a comma-separated tag string, trimming and dropping empty entries.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn store_image_url(store_id: u64) -> String {
    format!("{STORE_IMAGE_TEMPLATE_PREFIX}{store_id}{STORE_IMAGE_TEMPLATE_SUFFIX}")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Normalize one item payload.
///
/// # Errors
///
/// Returns a [`RecordRejection`] when the name is blank or the price is
/// negative or not finite.
pub fn normalize_item(raw: ApiItem) -> Result<ItemRecord, RecordRejection> {
    if raw.name.trim().is_empty() {
        return Err(RecordRejection::BlankName { id: raw.id });
    }
    let price_cents = price_to_cents(raw.price).ok_or(RecordRejection::InvalidPrice { id: raw.id })?;
    Ok(ItemRecord {
        id: raw.id,
        store_id: raw.store_id.unwrap_or_default(),
        name: raw.name,
        brand: non_blank(raw.brand),
        price_cents,
        original_price_cents: raw.original_price.and_then(price_to_cents),
        tags: raw.tags.as_deref().map(parse_tags).unwrap_or_default(),
        description: non_blank(raw.description),
        image_url: non_blank(raw.image_url).unwrap_or_else(|| ITEM_IMAGE_PLACEHOLDER.to_string()),
    })
}

/// Normalize one store payload.
///
/// # Errors
///
/// Returns [`RecordRejection::BlankName`] when the store has no usable name.
pub fn normalize_store(raw: ApiStore) -> Result<StoreRecord, RecordRejection> {
    if raw.name.trim().is_empty() {
        return Err(RecordRejection::BlankName { id: raw.id });
    }
    Ok(StoreRecord {
        id: raw.id,
        name: raw.name,
        address: raw.address.unwrap_or_default(),
        hours: raw.hours.unwrap_or_default(),
        image_url: non_blank(raw.image_url).unwrap_or_else(|| store_image_url(raw.id)),
    })
}

/// Normalize a payload list, dropping and logging rejected entries.
#[must_use]
pub fn normalize_items(raw: Vec<ApiItem>) -> Vec<ItemRecord> {
    raw.into_iter()
        .filter_map(|item| {
            normalize_item(item)
                .map_err(|err| log::warn!("Dropping item: {err}"))
                .ok()
        })
        .collect()
}

#[must_use]
pub fn normalize_stores(raw: Vec<ApiStore>) -> Vec<StoreRecord> {
    raw.into_iter()
        .filter_map(|store| {
            normalize_store(store)
                .map_err(|err| log::warn!("Dropping store: {err}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(id: u64, name: &str, price: f64) -> ApiItem {
        ApiItem {
            id,
            store_id: Some(1),
            name: name.to_string(),
            brand: None,
            price,
            original_price: None,
            tags: None,
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn price_always_has_two_decimals() {
        assert_eq!(format_price_cents(2999), "$29.99");
        assert_eq!(format_price_cents(500), "$5.00");
        assert_eq!(format_price_cents(7), "$0.07");
        assert_eq!(price_to_cents(12.5), Some(1250));
        assert_eq!(price_to_cents(19.99), Some(1999));
    }

    #[test]
    fn cents_follow_two_place_display_of_binary_value() {
        // 0.105 is stored just below the midpoint, so it displays as 0.10.
        assert_eq!(price_to_cents(0.105), Some(10));
        assert_eq!(format_price_cents(price_to_cents(0.105).unwrap_or_default()), "$0.10");
        assert_eq!(price_to_cents(1.005), Some(100));
        assert_eq!(price_to_cents(2.675), Some(267));
        assert_eq!(price_to_cents(0.0), Some(0));
        assert_eq!(price_to_cents(1e300), None);
    }

    #[test]
    fn invalid_prices_have_no_cents() {
        assert_eq!(price_to_cents(-1.0), None);
        assert_eq!(price_to_cents(f64::NAN), None);
        assert_eq!(price_to_cents(f64::INFINITY), None);
    }

    #[test]
    fn tags_are_trimmed_and_compacted() {
        assert_eq!(
            parse_tags(" denim, ,vintage ,, 90s "),
            vec!["denim", "vintage", "90s"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn missing_image_gets_placeholder() {
        let mut raw = raw_item(3, "Lamp", 10.0);
        raw.image_url = Some("   ".to_string());
        let item = normalize_item(raw).unwrap();
        assert_eq!(item.image_url, ITEM_IMAGE_PLACEHOLDER);
        assert_eq!(item.tag_summary(), NO_TAGS_LABEL);
        assert_eq!(item.description_or_default(), NO_DESCRIPTION_LABEL);
    }

    #[test]
    fn blank_names_and_bad_prices_are_dropped() {
        let raws = vec![
            raw_item(1, "Jacket", 40.0),
            raw_item(2, "  ", 5.0),
            raw_item(3, "Boots", -3.0),
            raw_item(4, "Scarf", 12.25),
        ];
        let ids: Vec<u64> = normalize_items(raws).iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn store_image_is_synthesized_when_absent() {
        let store = normalize_store(ApiStore {
            id: 42,
            name: "Second Chance".to_string(),
            address: Some("1 Main St".to_string()),
            hours: Some("9-5".to_string()),
            image_url: None,
        })
        .unwrap();
        assert_eq!(store.image_url, "https://picsum.photos/seed/42/400/250");
        assert_eq!(store.description(), "Hours: 9-5. Visit us for great finds!");
        assert_eq!(store.categories(), &["General"]);
        assert_eq!(store.distance_label(), "N/A");
    }

    #[test]
    fn tag_line_joins_normalized_tags() {
        let item = ItemRecord::new(1, "Blue Jacket", 4500, "clothing,winter");
        assert_eq!(item.tag_line(), "clothing, winter");
        assert_eq!(item.display_price(), "$45.00");
    }
}
