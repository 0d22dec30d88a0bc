pub mod inventory;
pub mod plan;
pub mod reports;
pub mod tester;

pub use inventory::{Inventory, InventoryShape, SEARCH_TERMS};
pub use plan::SweepPlan;
pub use tester::*;
