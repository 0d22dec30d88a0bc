//! Fixed storefront values shared by the pages, the pipeline and the tester.
//!
//! Page sizes and strip lengths here are the defaults; `StorefrontConfig`
//! can override them at startup.

// Paging -------------------------------------------------------------------
pub const STORE_PAGE_SIZE: usize = 9;
pub const ITEM_PAGE_SIZE: usize = 8;
pub const PAGINATION_DELTA: usize = 2;

// Page strips --------------------------------------------------------------
pub const FEATURED_ITEM_COUNT: usize = 4;
pub const CAROUSEL_ITEM_COUNT: usize = 5;
pub const HOME_FEED_STORE_ID: u64 = 1;

// Carousel -----------------------------------------------------------------
pub const CAROUSEL_SCROLL_STEP: f64 = 300.0;
pub const SCROLL_EPSILON: f64 = 1.0;

// API ----------------------------------------------------------------------
pub const STORES_ENDPOINT: &str = "/api/stores";

// Display fallbacks --------------------------------------------------------
pub const CURRENCY_PREFIX: &str = "$";
pub const ITEM_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/300x300?text=Item";
pub const STORE_IMAGE_TEMPLATE_PREFIX: &str = "https://picsum.photos/seed/";
pub const STORE_IMAGE_TEMPLATE_SUFFIX: &str = "/400/250";
pub const STORE_DEFAULT_CATEGORY: &str = "General";
pub const STORE_DISTANCE_UNKNOWN: &str = "N/A";
pub const NO_TAGS_LABEL: &str = "No tags available";
pub const NO_DESCRIPTION_LABEL: &str = "No detailed description available.";
pub const DETAIL_PRIMARY_TAG_FALLBACK: &str = "Vintage";
pub const DETAIL_SECONDARY_TAG_FALLBACK: &str = "Fashion";
pub const DETAIL_CATEGORY_FALLBACK: &str = "Style";
pub const AR_PREVIEW_IMAGE_URL: &str = "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=800";

// Keys ---------------------------------------------------------------------
pub const ESCAPE_KEY: &str = "Escape";
