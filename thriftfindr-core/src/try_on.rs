//! Hand-off of a selected item to the try-on page.
use serde::{Deserialize, Serialize};

use crate::records::ItemRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryOnItem {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl From<&ItemRecord> for TryOnItem {
    fn from(item: &ItemRecord) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            price: item.display_price(),
            description: item.description.clone(),
            tags: item.tags.clone(),
        }
    }
}

/// What the try-on page renders for its navigation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnView {
    Missing,
    Ready(TryOnItem),
}

impl TryOnView {
    #[must_use]
    pub fn from_state(state: Option<TryOnItem>) -> Self {
        state.map_or(Self::Missing, Self::Ready)
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Missing => "No Item Selected for AR Try-On".to_string(),
            Self::Ready(item) => format!("Try On: {}", item.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_renders_fallback() {
        assert_eq!(TryOnView::from_state(None), TryOnView::Missing);
        assert_eq!(TryOnView::Missing.title(), "No Item Selected for AR Try-On");
    }

    #[test]
    fn item_carries_display_price() {
        let item = ItemRecord::new(9, "Silk Scarf", 1850, "accessories");
        let view = TryOnView::from_state(Some(TryOnItem::from(&item)));
        let TryOnView::Ready(carried) = &view else {
            panic!("expected a ready view");
        };
        assert_eq!(carried.price, "$18.50");
        assert_eq!(carried.tags, vec!["accessories"]);
        assert_eq!(view.title(), "Try On: Silk Scarf");
    }
}
