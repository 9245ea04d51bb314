use merit_quantities::power::Megawatts;
use serde::Serialize;

/// Power assigned to a single plant.
#[derive(Clone, Debug, Serialize)]
pub struct Allocation {
    pub name: String,

    #[serde(rename = "p")]
    pub power: Megawatts,
}

/// Final dispatch plan: one entry per input plant, in input order, powers
/// rounded to one decimal.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ProductionPlan(pub Vec<Allocation>);

impl ProductionPlan {
    #[must_use]
    pub fn total_power(&self) -> Megawatts {
        self.0.iter().map(|allocation| allocation.power).sum()
    }
}
