use merit_quantities::{power::Megawatts, proportion::Percent};

use crate::plant::{Plant, PlantKind};

/// Effective operating bounds of a plant for one scenario.
#[derive(Copy, Clone, Debug)]
pub struct OperatingRange {
    pub min: Megawatts,
    pub max: Megawatts,
}

impl Plant {
    /// Operable range after scenario derating: wind output scales with the
    /// availability forecast, thermal plants keep their nameplate bounds.
    #[must_use]
    pub fn effective_range(&self, wind: Percent) -> OperatingRange {
        match self.kind {
            PlantKind::Wind => OperatingRange {
                min: self.pmin * wind.to_proportion(),
                max: self.pmax * wind.to_proportion(),
            },
            PlantKind::Gas | PlantKind::Turbojet => {
                OperatingRange { min: self.pmin, max: self.pmax }
            }
        }
    }
}
