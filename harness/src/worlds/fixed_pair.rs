//! `FixedPair`: an explicit start/goal pair.

use arcosphere_kernel::carrier::inventory::InventoryV1;

use crate::contract::{PlanningWorldV1, WorldError};

/// A world whose start and goal are given directly.
#[derive(Debug, Clone)]
pub struct FixedPair {
    pub id: String,
    pub start: InventoryV1,
    pub goal: InventoryV1,
    pub baseline: i32,
}

impl FixedPair {
    #[must_use]
    pub fn new(start: InventoryV1, goal: InventoryV1) -> Self {
        Self {
            id: "fixed_pair".into(),
            start,
            goal,
            baseline: 0,
        }
    }
}

impl PlanningWorldV1 for FixedPair {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Result<InventoryV1, WorldError> {
        Ok(self.start)
    }

    fn goal_state(&self) -> Result<InventoryV1, WorldError> {
        Ok(self.goal)
    }

    fn baseline(&self) -> i32 {
        self.baseline
    }
}
