use anyhow::Result;
use std::time::Duration;
use thirtyfour::prelude::*;
use thriftfindr_core::constants::STORE_PAGE_SIZE;

use super::properties::pipeline_expectation;
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::SweepPlan;

const NO_MATCH_TERM: &str = "zzz-no-match";
const SETTLE: Duration = Duration::from_millis(500);

/// Store listing: the pipeline sweep in logic mode, the rendered grid in a browser.
pub struct StoreListingScenario;

#[async_trait::async_trait]
impl BrowserScenario for StoreListingScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(&ctx.base_url, "/stores").await?;
        tokio::time::sleep(SETTLE).await;

        let cards = ctx.page.store_card_count().await?;
        let status = ctx.page.listing_status().await?;
        if ctx.verbose {
            println!("  🏬 {cards} store cards, status: {status:?}");
        }
        anyhow::ensure!(
            cards <= STORE_PAGE_SIZE,
            "Listing shows {cards} cards on one page"
        );
        if cards == 0 {
            anyhow::ensure!(
                status.is_some(),
                "Empty listing should show a loading, error or empty status"
            );
            return Ok(());
        }
        if let Some(label) = ctx.page.current_page_label().await? {
            anyhow::ensure!(label == "1", "Listing should open on page 1, got {label}");
        }

        ctx.page.search_stores(NO_MATCH_TERM).await?;
        tokio::time::sleep(SETTLE).await;
        let remaining = ctx.page.store_card_count().await?;
        anyhow::ensure!(
            remaining == 0,
            "Search for '{NO_MATCH_TERM}' left {remaining} cards"
        );
        let empty = ctx.page.listing_status().await?.unwrap_or_default();
        anyhow::ensure!(
            empty.contains("No stores found."),
            "Expected the empty message, got '{empty}'"
        );
        Ok(())
    }
}

impl CombinedScenario for StoreListingScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::sweep(
            "Search, Category and Page Pipeline",
            SweepPlan::default().with_expectation(pipeline_expectation),
        ))
    }
}
