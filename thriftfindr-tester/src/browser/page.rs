use anyhow::{Context, Result};
use thirtyfour::prelude::*;

const BRAND_SELECTOR: &str = ".site-header .brand";
const STORE_CARD_SELECTOR: &str = ".store-card";
const STATUS_SELECTOR: &str = ".stores-page__results .status";
const STORE_SEARCH_SELECTOR: &str = "#store-search";
const CURRENT_PAGE_SELECTOR: &str = ".pager__page--current";

/// Join the app base URL and a route path without doubling slashes.
pub fn page_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Read-side helpers over the rendered storefront DOM.
#[derive(Debug, Clone)]
pub struct StorefrontPage<'a> {
    driver: &'a WebDriver,
}

impl<'a> StorefrontPage<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn open(&self, base_url: &str, path: &str) -> Result<()> {
        let url = page_url(base_url, path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        Ok(())
    }

    pub async fn brand_text(&self) -> Result<String> {
        let brand = self
            .driver
            .find(By::Css(BRAND_SELECTOR))
            .await
            .context("brand link missing from header")?;
        Ok(brand.text().await?)
    }

    pub async fn store_card_count(&self) -> Result<usize> {
        Ok(self
            .driver
            .find_all(By::Css(STORE_CARD_SELECTOR))
            .await?
            .len())
    }

    /// Text of the listing's loading, error or empty status, if one shows.
    pub async fn listing_status(&self) -> Result<Option<String>> {
        let found = self.driver.find_all(By::Css(STATUS_SELECTOR)).await?;
        match found.first() {
            Some(status) => Ok(Some(status.text().await?)),
            None => Ok(None),
        }
    }

    pub async fn search_stores(&self, term: &str) -> Result<()> {
        let input = self
            .driver
            .find(By::Css(STORE_SEARCH_SELECTOR))
            .await
            .context("store search box missing")?;
        input.clear().await?;
        input.send_keys(term).await?;
        Ok(())
    }

    pub async fn current_page_label(&self) -> Result<Option<String>> {
        let found = self.driver.find_all(By::Css(CURRENT_PAGE_SELECTOR)).await?;
        match found.first() {
            Some(button) => Ok(Some(button.text().await?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_joins_without_double_slashes() {
        assert_eq!(
            page_url("http://localhost:8080/", "/stores"),
            "http://localhost:8080/stores"
        );
        assert_eq!(page_url("http://localhost:8080", "stores/3"), "http://localhost:8080/stores/3");
        assert_eq!(page_url("http://localhost:8080/app", ""), "http://localhost:8080/app/");
    }
}
