use std::rc::Rc;

use thriftfindr_core::StorefrontConfig;
use yew::prelude::*;

/// Embedded settings with the compile-time API override applied.
#[must_use]
pub fn storefront_config() -> StorefrontConfig {
    StorefrontConfig::load_from_static(include_str!("../static/config.json"))
        .with_api_base(crate::paths::api_base_override())
}

/// Settings provided by the app shell, or defaults outside of it.
#[hook]
pub fn use_storefront_config() -> Rc<StorefrontConfig> {
    use_context::<Rc<StorefrontConfig>>().unwrap_or_default()
}
