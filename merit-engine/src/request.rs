//! Wire-format request payload and the validation boundary.
//!
//! The planner itself only ever sees a [`Scenario`] that already passed
//! these checks.

use std::collections::HashSet;

use merit_quantities::power::Megawatts;
use serde::Deserialize;

use crate::{
    fuel::FuelPrices,
    plant::{Plant, PlantKind},
};

#[derive(Clone, Debug, Deserialize)]
pub struct ProductionPlanRequest {
    pub load: f64,
    pub fuels: FuelsPayload,
    pub powerplants: Vec<PlantPayload>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct FuelsPayload {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,

    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosene: f64,

    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,

    #[serde(rename = "wind(%)")]
    pub wind: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlantPayload {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: PlantKind,

    pub efficiency: f64,

    /// Minimum stable output in whole megawatts.
    pub pmin: u32,

    /// Maximum output in whole megawatts.
    pub pmax: u32,
}

/// A fully validated scenario, ready for the planner.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub load: Megawatts,
    pub prices: FuelPrices,
    pub plants: Vec<Plant>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("load must be a positive number")]
    NonPositiveLoad,

    #[display("{fuel} price must be a positive number")]
    NonPositivePrice { fuel: &'static str },

    #[display("wind availability must lie between 0 and 100")]
    WindOutOfRange,

    #[display("power plant #{index} has an empty name")]
    EmptyName { index: usize },

    #[display("duplicate power plant name: {name}")]
    DuplicateName { name: String },

    #[display("{name}: efficiency must lie within (0, 1]")]
    EfficiencyOutOfRange { name: String },

    #[display("{name}: wind turbine efficiency must be 1")]
    WindEfficiency { name: String },

    #[display("{name}: pmax must be positive")]
    NonPositivePmax { name: String },

    #[display("{name}: pmin must not exceed pmax")]
    InvertedRange { name: String },
}

impl ProductionPlanRequest {
    /// Check every field against the contract the planner relies on and
    /// convert the payload into strongly typed scenario values.
    pub fn validate(self) -> Result<Scenario, ValidationError> {
        if !self.load.is_finite() || self.load <= 0.0 {
            return Err(ValidationError::NonPositiveLoad);
        }
        for (fuel, price) in [
            ("gas", self.fuels.gas),
            ("kerosine", self.fuels.kerosene),
            ("CO2", self.fuels.co2),
        ] {
            if !price.is_finite() || price <= 0.0 {
                return Err(ValidationError::NonPositivePrice { fuel });
            }
        }
        if !self.fuels.wind.is_finite() || !(0.0..=100.0).contains(&self.fuels.wind) {
            return Err(ValidationError::WindOutOfRange);
        }

        let mut names = HashSet::with_capacity(self.powerplants.len());
        for (index, plant) in self.powerplants.iter().enumerate() {
            if plant.name.is_empty() {
                return Err(ValidationError::EmptyName { index });
            }
            if !names.insert(plant.name.as_str()) {
                return Err(ValidationError::DuplicateName { name: plant.name.clone() });
            }
            if !plant.efficiency.is_finite() || plant.efficiency <= 0.0 || plant.efficiency > 1.0 {
                return Err(ValidationError::EfficiencyOutOfRange { name: plant.name.clone() });
            }
            if plant.kind == PlantKind::Wind && plant.efficiency < 1.0 {
                return Err(ValidationError::WindEfficiency { name: plant.name.clone() });
            }
            if plant.pmax == 0 {
                return Err(ValidationError::NonPositivePmax { name: plant.name.clone() });
            }
            if plant.pmin > plant.pmax {
                return Err(ValidationError::InvertedRange { name: plant.name.clone() });
            }
        }

        Ok(Scenario {
            load: Megawatts::from(self.load),
            prices: FuelPrices {
                gas: self.fuels.gas.into(),
                kerosene: self.fuels.kerosene.into(),
                co2: self.fuels.co2.into(),
                wind: self.fuels.wind.into(),
            },
            plants: self
                .powerplants
                .into_iter()
                .map(|plant| Plant {
                    name: plant.name,
                    kind: plant.kind,
                    efficiency: plant.efficiency,
                    pmin: Megawatts::from(f64::from(plant.pmin)),
                    pmax: Megawatts::from(f64::from(plant.pmax)),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Planner;

    const EXAMPLE_PAYLOAD: &str = r#"{
        "load": 480,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        },
        "powerplants": [
            {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredbig2", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredsomewhatsmaller", "type": "gasfired", "efficiency": 0.37, "pmin": 40, "pmax": 210},
            {"name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16},
            {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150},
            {"name": "windpark2", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 36}
        ]
    }"#;

    fn example_request() -> ProductionPlanRequest {
        serde_json::from_str(EXAMPLE_PAYLOAD).unwrap()
    }

    #[test]
    fn test_wire_format_round_trip() {
        let scenario = example_request().validate().unwrap();
        let plan = Planner::builder()
            .load(scenario.load)
            .prices(&scenario.prices)
            .plants(&scenario.plants)
            .plan()
            .unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "gasfiredbig1", "p": 368.4},
                {"name": "gasfiredbig2", "p": 0.0},
                {"name": "gasfiredsomewhatsmaller", "p": 0.0},
                {"name": "tj1", "p": 0.0},
                {"name": "windpark1", "p": 90.0},
                {"name": "windpark2", "p": 21.6}
            ]),
        );
    }

    #[test]
    fn test_non_positive_load_is_rejected() {
        let mut request = example_request();
        request.load = -100.0;
        assert!(matches!(request.validate(), Err(ValidationError::NonPositiveLoad)));
    }

    #[test]
    fn test_wind_availability_above_100_is_rejected() {
        let mut request = example_request();
        request.fuels.wind = 140.0;
        assert!(matches!(request.validate(), Err(ValidationError::WindOutOfRange)));
    }

    #[test]
    fn test_wind_turbine_efficiency_must_be_one() {
        let mut request = example_request();
        request.powerplants[4].efficiency = 0.9;
        assert!(matches!(request.validate(), Err(ValidationError::WindEfficiency { .. })));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut request = example_request();
        request.powerplants[1].name = "gasfiredbig1".to_string();
        assert!(matches!(request.validate(), Err(ValidationError::DuplicateName { .. })));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut request = example_request();
        request.powerplants[0].pmin = 500;
        assert!(matches!(request.validate(), Err(ValidationError::InvertedRange { .. })));
    }

    #[test]
    fn test_unknown_plant_type_fails_deserialization() {
        let payload = EXAMPLE_PAYLOAD.replace("turbojet", "nuclear");
        assert!(serde_json::from_str::<ProductionPlanRequest>(&payload).is_err());
    }
}
