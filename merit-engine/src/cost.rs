use merit_quantities::{Quantity, emission::EmissionFactor, rate::MegawattHourRate};
use ordered_float::OrderedFloat;

use crate::{
    fuel::FuelPrices,
    plant::{Plant, PlantKind},
};

/// Tons of CO2 emitted per megawatt-hour of burned gas. A constant of the
/// cost model, not a tunable.
pub const GAS_EMISSION_FACTOR: EmissionFactor = Quantity(OrderedFloat(0.3));

/// Marginal cost of one megawatt-hour produced by the plant.
///
/// Used for ranking only; it never appears in the plan itself. Wind burns no
/// fuel and ranks first at zero.
#[must_use]
pub fn marginal_cost(plant: &Plant, prices: &FuelPrices) -> MegawattHourRate {
    match plant.kind {
        PlantKind::Wind => MegawattHourRate::ZERO,
        PlantKind::Gas => prices.gas / plant.efficiency + prices.co2 * GAS_EMISSION_FACTOR,
        PlantKind::Turbojet => prices.kerosene / plant.efficiency,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use merit_quantities::power::Megawatts;

    use super::*;

    fn prices() -> FuelPrices {
        FuelPrices {
            gas: 13.4.into(),
            kerosene: 50.8.into(),
            co2: 20.0.into(),
            wind: 60.0.into(),
        }
    }

    fn plant(kind: PlantKind, efficiency: f64) -> Plant {
        Plant {
            name: "plant".to_string(),
            kind,
            efficiency,
            pmin: Megawatts::ZERO,
            pmax: Megawatts::from(100.0),
        }
    }

    #[test]
    fn test_wind_is_free() {
        assert_eq!(marginal_cost(&plant(PlantKind::Wind, 1.0), &prices()), MegawattHourRate::ZERO);
    }

    #[test]
    fn test_gas_includes_emission_cost() {
        let cost = marginal_cost(&plant(PlantKind::Gas, 0.53), &prices());
        assert_abs_diff_eq!(cost.0.0, 13.4 / 0.53 + 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_turbojet_burns_kerosene() {
        let cost = marginal_cost(&plant(PlantKind::Turbojet, 0.3), &prices());
        assert_abs_diff_eq!(cost.0.0, 50.8 / 0.3, epsilon = 1e-9);
    }
}
