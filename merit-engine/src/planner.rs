use std::collections::HashMap;

use bon::Builder;
use merit_quantities::{Quantity, power::Megawatts};
use ordered_float::OrderedFloat;
use tracing::instrument;

use crate::{
    fuel::FuelPrices,
    plan::{Allocation, ProductionPlan},
    plant::Plant,
    ranking::merit_order,
};

/// Absolute tolerance when reconciling the allocation sum with the load.
/// Wind derating produces fractional bounds, so bit-exact equality is too
/// fragile.
const LOAD_TOLERANCE: Megawatts = Quantity(OrderedFloat(1e-6));

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlanError {
    /// The fleet cannot absorb the requested load under the greedy walk.
    /// Recoverable by retrying with a different scenario.
    #[display("cannot meet the required load with the available power plants")]
    InsufficientCapacity,

    /// The walk reported no shortfall, yet the allocations do not add up to
    /// the load. Indicates a defect in the allocator, not a bad request.
    #[display("the total allocated power does not match the required load")]
    AllocationMismatch,
}

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Planner<'a> {
    load: Megawatts,
    prices: &'a FuelPrices,
    plants: &'a [Plant],
}

impl<S: planner_builder::IsComplete> PlannerBuilder<'_, S> {
    pub fn plan(self) -> Result<ProductionPlan, PlanError> {
        self.build().plan()
    }
}

impl Planner<'_> {
    /// Walk the merit order once and validate the outcome.
    ///
    /// Greedy by construction: a plant whose effective minimum exceeds the
    /// remaining load is skipped for good, even when under-loading an
    /// earlier plant would have made the scenario solvable. Scenarios that
    /// only a non-greedy assignment could satisfy are reported as
    /// infeasible.
    #[instrument(skip_all, fields(load = %self.load))]
    pub fn plan(self) -> Result<ProductionPlan, PlanError> {
        let mut allocation: HashMap<&str, Megawatts> =
            self.plants.iter().map(|plant| (plant.name.as_str(), Megawatts::ZERO)).collect();

        let mut remaining = self.load;
        for ranked in merit_order(self.plants, self.prices) {
            if remaining <= Megawatts::ZERO {
                break;
            }
            let range = ranked.plant.effective_range(self.prices.wind);
            if remaining < range.min {
                // Too powerful to run this low; the walk never comes back.
                continue;
            }
            if remaining <= range.max {
                allocation.insert(ranked.plant.name.as_str(), remaining);
                remaining = Megawatts::ZERO;
                break;
            }
            allocation.insert(ranked.plant.name.as_str(), range.max);
            remaining -= range.max;
        }

        if remaining > Megawatts::ZERO {
            return Err(PlanError::InsufficientCapacity);
        }

        let total: Megawatts = allocation.values().copied().sum();
        if (total - self.load).abs() > LOAD_TOLERANCE {
            return Err(PlanError::AllocationMismatch);
        }

        Ok(ProductionPlan(
            self.plants
                .iter()
                .map(|plant| Allocation {
                    name: plant.name.clone(),
                    power: allocation[plant.name.as_str()].round_to_hundred_kilowatts(),
                })
                .collect(),
        ))
    }
}
