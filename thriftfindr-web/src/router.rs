use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/stores")]
    Stores,
    #[at("/stores/:id")]
    StoreDetail { id: String },
    #[at("/try-on-ar")]
    TryOn,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn store_detail(store_id: u64) -> Self {
        Self::StoreDetail {
            id: store_id.to_string(),
        }
    }
}

/// Parse the `:id` segment of a store route.
#[must_use]
pub fn parse_store_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_routes_round_trip() {
        let route = Route::store_detail(12);
        assert_eq!(route.to_path(), "/stores/12");
        assert_eq!(Route::recognize("/stores/12"), Some(route));
        assert_eq!(Route::recognize("/try-on-ar"), Some(Route::TryOn));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/basement"), Some(Route::NotFound));
    }

    #[test]
    fn store_ids_must_be_numeric() {
        assert_eq!(parse_store_id("7"), Some(7));
        assert_eq!(parse_store_id("seven"), None);
        assert_eq!(parse_store_id("-1"), None);
    }
}
