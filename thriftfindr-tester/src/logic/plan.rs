use anyhow::Result;

use super::inventory::{Inventory, InventoryShape};

/// A property checked against every generated inventory.
pub type Expectation = fn(&Inventory) -> Result<()>;

/// Inventory shape plus the properties a sweep asserts.
#[derive(Clone)]
pub struct SweepPlan {
    pub shape: InventoryShape,
    pub expectations: Vec<Expectation>,
}

impl SweepPlan {
    #[must_use]
    pub fn new(shape: InventoryShape) -> Self {
        Self {
            shape,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// First failing property, if any.
    pub fn evaluate(&self, inventory: &Inventory) -> Option<String> {
        self.expectations
            .iter()
            .find_map(|expectation| expectation(inventory).err())
            .map(|err| format!("{err:#}"))
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::new(InventoryShape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_fails(_inventory: &Inventory) -> Result<()> {
        anyhow::bail!("nope")
    }

    fn always_passes(_inventory: &Inventory) -> Result<()> {
        Ok(())
    }

    #[test]
    fn evaluate_reports_first_failure() {
        let plan = SweepPlan::default()
            .with_expectation(always_passes)
            .with_expectation(always_fails);
        let inventory = Inventory::generate(1, plan.shape);
        assert_eq!(plan.evaluate(&inventory).as_deref(), Some("nope"));
        assert_eq!(plan.expectations.len(), 2);
    }
}
