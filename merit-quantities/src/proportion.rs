use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Percentage points, for example a wind availability forecast.
pub type Percent = Quantity<0, 0, 0, 0>;

impl Percent {
    #[must_use]
    pub fn to_proportion(self) -> f64 {
        0.01 * self.0.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} %", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}
