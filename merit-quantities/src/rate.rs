use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Euro per megawatt-hour.
pub type MegawattHourRate = Quantity<-1, -1, 1, 0>;

impl Display for MegawattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/MWh", self.0)
    }
}

impl Debug for MegawattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/MWh", self.0)
    }
}

/// Euro per ton.
pub type TonRate = Quantity<0, 0, 1, -1>;

impl Display for TonRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/t", self.0)
    }
}

impl Debug for TonRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/t", self.0)
    }
}
