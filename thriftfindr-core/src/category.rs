//! Category pill toggle state.
use serde::{Deserialize, Serialize};

/// Accent color of a pill when it is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Pink,
    Teal,
    Other(String),
}

impl ColorTag {
    /// CSS modifier class for the pill.
    #[must_use]
    pub fn css_class(&self) -> String {
        match self {
            Self::Pink => "pill-pink".to_string(),
            Self::Teal => "pill-teal".to_string(),
            Self::Other(name) => format!("pill-{}", name.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPill {
    pub name: String,
    pub active: bool,
    pub color: Option<ColorTag>,
}

impl CategoryPill {
    #[must_use]
    pub fn new(name: impl Into<String>, active: bool, color: Option<ColorTag>) -> Self {
        Self {
            name: name.into(),
            active,
            color,
        }
    }
}

/// Ordered set of pills with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryFilter {
    pills: Vec<CategoryPill>,
}

impl CategoryFilter {
    /// Build a filter, keeping the first pill for any repeated name.
    #[must_use]
    pub fn new(pills: impl IntoIterator<Item = CategoryPill>) -> Self {
        let mut unique: Vec<CategoryPill> = Vec::new();
        for pill in pills {
            if unique.iter().any(|existing| existing.name == pill.name) {
                log::warn!("Ignoring duplicate category pill '{}'", pill.name);
                continue;
            }
            unique.push(pill);
        }
        Self { pills: unique }
    }

    /// Pills shown on the store listing page.
    #[must_use]
    pub fn store_listing() -> Self {
        Self::new([
            CategoryPill::new("Clothes", true, Some(ColorTag::Pink)),
            CategoryPill::new("Antique Decor", true, Some(ColorTag::Teal)),
            CategoryPill::new("Vinyl & Music", false, None),
            CategoryPill::new("Books", false, None),
        ])
    }

    /// Pills shown on the store detail page.
    #[must_use]
    pub fn store_detail() -> Self {
        Self::new(
            ["Clothing", "Decor", "Music", "Books"]
                .into_iter()
                .map(|name| CategoryPill::new(name, false, None)),
        )
    }

    #[must_use]
    pub fn pills(&self) -> &[CategoryPill] {
        &self.pills
    }

    /// Flip the pill called `name`.
    ///
    /// Returns `false` and leaves the state untouched when no pill matches.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.pills.iter_mut().find(|pill| pill.name == name) {
            Some(pill) => {
                pill.active = !pill.active;
                true
            }
            None => {
                log::warn!("Ignoring toggle for unknown category '{name}'");
                false
            }
        }
    }

    #[must_use]
    pub fn active_names(&self) -> Vec<String> {
        self.pills
            .iter()
            .filter(|pill| pill.active)
            .map(|pill| pill.name.clone())
            .collect()
    }

    #[must_use]
    pub fn any_active(&self) -> bool {
        self.pills.iter().any(|pill| pill.active)
    }

    pub fn clear(&mut self) {
        for pill in &mut self.pills {
            pill.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_seed_has_two_active_pills() {
        let filter = CategoryFilter::store_listing();
        assert_eq!(filter.active_names(), vec!["Clothes", "Antique Decor"]);
        assert_eq!(filter.pills()[0].color, Some(ColorTag::Pink));
        assert_eq!(filter.pills()[1].color, Some(ColorTag::Teal));
    }

    #[test]
    fn detail_seed_starts_inactive() {
        let filter = CategoryFilter::store_detail();
        assert_eq!(filter.pills().len(), 4);
        assert!(!filter.any_active());
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut filter = CategoryFilter::store_detail();
        let before = filter.clone();
        assert!(filter.toggle("Clothing"));
        assert_eq!(filter.active_names(), vec!["Clothing"]);
        assert!(filter.toggle("Clothing"));
        assert_eq!(filter, before);
    }

    #[test]
    fn unknown_toggle_is_a_no_op() {
        let mut filter = CategoryFilter::store_listing();
        let before = filter.clone();
        assert!(!filter.toggle("Furniture"));
        assert_eq!(filter, before);
    }

    #[test]
    fn duplicate_names_collapse() {
        let filter = CategoryFilter::new([
            CategoryPill::new("Books", true, None),
            CategoryPill::new("Books", false, None),
        ]);
        assert_eq!(filter.pills().len(), 1);
        assert!(filter.pills()[0].active);
    }

    #[test]
    fn clear_deactivates_everything() {
        let mut filter = CategoryFilter::store_listing();
        filter.clear();
        assert!(filter.active_names().is_empty());
        assert_eq!(ColorTag::Other("Gold".into()).css_class(), "pill-gold");
    }
}
