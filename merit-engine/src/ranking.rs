use itertools::Itertools;
use merit_quantities::rate::MegawattHourRate;

use crate::{cost::marginal_cost, fuel::FuelPrices, plant::Plant};

/// A plant together with its marginal cost for the scenario. The ranking is
/// a derived view; the plant itself is untouched.
#[derive(Copy, Clone)]
pub struct RankedPlant<'a> {
    pub plant: &'a Plant,
    pub cost: MegawattHourRate,
}

/// Merit order: cheapest first. The sort is stable, so equal-cost plants
/// (all wind plants tie at zero) keep their input order.
#[must_use]
pub fn merit_order<'a>(plants: &'a [Plant], prices: &FuelPrices) -> Vec<RankedPlant<'a>> {
    plants
        .iter()
        .map(|plant| RankedPlant { plant, cost: marginal_cost(plant, prices) })
        .sorted_by_key(|ranked| ranked.cost)
        .collect()
}

#[cfg(test)]
mod tests {
    use merit_quantities::power::Megawatts;

    use super::*;
    use crate::plant::PlantKind;

    fn plant(name: &str, kind: PlantKind, efficiency: f64) -> Plant {
        Plant {
            name: name.to_string(),
            kind,
            efficiency,
            pmin: Megawatts::ZERO,
            pmax: Megawatts::from(100.0),
        }
    }

    fn prices() -> FuelPrices {
        FuelPrices {
            gas: 13.4.into(),
            kerosene: 50.8.into(),
            co2: 20.0.into(),
            wind: 60.0.into(),
        }
    }

    #[test]
    fn test_wind_ranks_before_thermal() {
        let plants = vec![
            plant("gasfiredbig1", PlantKind::Gas, 0.53),
            plant("tj1", PlantKind::Turbojet, 0.3),
            plant("windpark1", PlantKind::Wind, 1.0),
        ];
        let ranked = merit_order(&plants, &prices());
        let names: Vec<_> = ranked.iter().map(|ranked| ranked.plant.name.as_str()).collect();
        assert_eq!(names, ["windpark1", "gasfiredbig1", "tj1"]);
    }

    #[test]
    fn test_equal_costs_keep_input_order() {
        let plants = vec![
            plant("windpark2", PlantKind::Wind, 1.0),
            plant("windpark1", PlantKind::Wind, 1.0),
            plant("windpark3", PlantKind::Wind, 1.0),
        ];
        let ranked = merit_order(&plants, &prices());
        let names: Vec<_> = ranked.iter().map(|ranked| ranked.plant.name.as_str()).collect();
        assert_eq!(names, ["windpark2", "windpark1", "windpark3"]);
    }

    #[test]
    fn test_less_efficient_gas_ranks_later() {
        let plants = vec![
            plant("gasfiredsomewhatsmaller", PlantKind::Gas, 0.37),
            plant("gasfiredbig1", PlantKind::Gas, 0.53),
        ];
        let ranked = merit_order(&plants, &prices());
        let names: Vec<_> = ranked.iter().map(|ranked| ranked.plant.name.as_str()).collect();
        assert_eq!(names, ["gasfiredbig1", "gasfiredsomewhatsmaller"]);
    }
}
