use anyhow::Result;
use thirtyfour::prelude::*;
use thriftfindr_core::{BrowseState, CategoryFilter, LoadState, StorefrontConfig, StoreRecord};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{Inventory, SweepPlan};

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> SweepPlan {
        SweepPlan::default().with_expectation(smoke_expectation)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(&ctx.base_url, "/").await?;

        let brand = ctx.page.brand_text().await?;
        anyhow::ensure!(
            brand.contains("ThriftFindr"),
            "Header brand should read ThriftFindr, got '{brand}'"
        );
        driver.find(By::Id("main")).await?;

        if ctx.verbose {
            println!("  🌐 Home page loaded (seed {}), brand: {brand}", ctx.seed);
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::sweep("Smoke Test", Self::plan()))
    }
}

fn smoke_expectation(inventory: &Inventory) -> Result<()> {
    let config = StorefrontConfig::default();
    anyhow::ensure!(
        config.listing_page_size == 9 && config.item_page_size == 8,
        "Default page sizes should be 9/8, got {}/{}",
        config.listing_page_size,
        config.item_page_size
    );
    anyhow::ensure!(
        LoadState::<Vec<StoreRecord>>::default().is_loading(),
        "Pages should start in the loading state"
    );
    anyhow::ensure!(
        CategoryFilter::store_listing().active_names().len() == 2,
        "Store listing should open with two active pills"
    );

    let listing = BrowseState::store_listing(config.listing_page_size).apply(&inventory.stores);
    anyhow::ensure!(
        listing.items.len() <= config.listing_page_size,
        "First store page holds {} stores",
        listing.items.len()
    );
    let detail = BrowseState::store_detail(config.item_page_size).apply(&inventory.items);
    anyhow::ensure!(
        detail.items.len() <= config.item_page_size,
        "First item page holds {} items",
        detail.items.len()
    );
    anyhow::ensure!(
        detail.current_page == 1,
        "Browsing should start on page 1, got {}",
        detail.current_page
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::InventoryShape;

    #[test]
    fn smoke_scenario_exposes_logic_plan() {
        let logic = SmokeScenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, "Smoke Test");
        assert_eq!(logic.plan.expectations.len(), 1);
    }

    #[test]
    fn smoke_expectation_accepts_generated_inventory() {
        let inventory = Inventory::generate(1337, InventoryShape::default());
        smoke_expectation(&inventory).expect("smoke ok");
    }

    #[test]
    fn smoke_expectation_accepts_empty_inventory() {
        let inventory = Inventory::generate(1, InventoryShape::empty());
        smoke_expectation(&inventory).expect("smoke ok on empty inventory");
    }
}
