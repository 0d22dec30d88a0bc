//! Helpers for URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/thrift` for a subdirectory
/// deploy), generated URLs are prefixed accordingly. Local builds without
/// `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the app is served from root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Compile-time override for the API origin.
#[must_use]
pub fn api_base_override() -> Option<&'static str> {
    option_env!("THRIFTFINDR_API_BASE")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, asset_path_with_base, router_base_with_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("images/hero.jpg"), "/images/hero.jpg");
        assert_eq!(asset_path("/images/hero.jpg"), "/images/hero.jpg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("images/hero.jpg", "/thrift/"),
            "/thrift/images/hero.jpg"
        );
    }

    #[test]
    fn router_base_trims_value() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(
            router_base_with_base("/thrift/"),
            Some(String::from("/thrift"))
        );
    }
}
