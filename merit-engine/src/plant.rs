use std::fmt::{Display, Formatter};

use merit_quantities::power::Megawatts;
use serde::Deserialize;

/// Generation technology. The set is closed: an unknown wire value fails
/// deserialization before it can reach the ranking.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
pub enum PlantKind {
    #[serde(rename = "gasfired")]
    Gas,

    #[serde(rename = "turbojet")]
    Turbojet,

    #[serde(rename = "windturbine")]
    Wind,
}

impl Display for PlantKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gas => write!(f, "gas-fired"),
            Self::Turbojet => write!(f, "turbojet"),
            Self::Wind => write!(f, "wind turbine"),
        }
    }
}

/// A single generation unit, as validated by the request boundary.
#[derive(Clone, Debug)]
pub struct Plant {
    pub name: String,
    pub kind: PlantKind,

    /// Fuel-to-power efficiency within (0, 1]; always 1 for wind.
    pub efficiency: f64,

    /// Minimum stable output.
    pub pmin: Megawatts,

    /// Maximum output.
    pub pmax: Megawatts,
}
