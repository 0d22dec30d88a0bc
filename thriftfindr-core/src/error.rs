use thiserror::Error;

/// Failures surfaced while loading storefront data.
///
/// Every variant renders to the text shown on the page through
/// [`CatalogError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Malformed payload: {0}")]
    Malformed(String),
    #[error("Store not found.")]
    StoreNotFound { store_id: u64 },
}

impl CatalogError {
    /// Message rendered in place of page content.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_page_copy() {
        assert_eq!(
            CatalogError::Http { status: 500 }.user_message(),
            "HTTP error! status: 500"
        );
        assert_eq!(
            CatalogError::StoreNotFound { store_id: 7 }.user_message(),
            "Store not found."
        );
    }

    #[test]
    fn json_errors_become_malformed() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let converted = CatalogError::from(err);
        assert!(matches!(converted, CatalogError::Malformed(_)));
    }
}
