use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::StorefrontPage;
use crate::logic::SweepPlan;

pub mod listing;
pub mod properties;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub page: StorefrontPage<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SweepPlan,
}

impl TestScenario {
    #[must_use]
    pub fn sweep(name: impl Into<String>, plan: SweepPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Logic-only sweep; the browser half reports that it has nothing to drive.
#[derive(Clone)]
pub struct PropertyScenario {
    name: &'static str,
    plan: SweepPlan,
    browser_message: &'static str,
}

impl PropertyScenario {
    pub fn new(name: &'static str, plan: SweepPlan) -> Self {
        Self {
            name,
            plan,
            browser_message: "Browser testing not implemented for this property sweep",
        }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for PropertyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!(self.browser_message)
    }
}

impl CombinedScenario for PropertyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::sweep(self.name, self.plan.clone()))
    }
}

const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Smoke Test"),
    ("pipeline-properties", "Search, Category and Page Pipeline"),
    ("pagination-window", "Pagination Window"),
    ("category-toggle", "Category Toggle Walk"),
    ("modal-exclusivity", "Modal Exclusivity and Scroll Lock"),
    ("carousel-affordance", "Carousel Scroll Affordances"),
    ("normalization", "Record Normalization"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "pipeline-properties" | "pipeline" => Some(Box::new(listing::StoreListingScenario)),
        "pagination-window" | "pagination" => Some(Box::new(properties::pagination_window())),
        "category-toggle" | "categories" => Some(Box::new(properties::category_toggle())),
        "modal-exclusivity" | "modals" => Some(Box::new(properties::modal_exclusivity())),
        "carousel-affordance" | "carousel" => Some(Box::new(properties::carousel_affordance())),
        "normalization" | "records" => Some(Box::new(properties::normalization())),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

/// Every scenario key, in listing order.
pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|(key, _)| (*key).to_string()).collect()
}
