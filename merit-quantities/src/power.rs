use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::Quantity;

pub type Megawatts = Quantity<1, 0, 0, 0>;

impl Megawatts {
    /// Round to one decimal, the resolution dispatch set points are
    /// published at.
    pub fn round_to_hundred_kilowatts(self) -> Self {
        Self(OrderedFloat((self.0.0 * 10.0).round() / 10.0))
    }
}

impl Display for Megawatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} MW", self.0)
    }
}

impl Debug for Megawatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}MW", self.0)
    }
}
