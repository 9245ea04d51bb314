use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{
    Quantity,
    rate::{MegawattHourRate, TonRate},
};

/// Tons of CO2 per megawatt-hour of fuel energy.
pub type EmissionFactor = Quantity<-1, -1, 0, 1>;

impl Display for EmissionFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} t/MWh", self.0)
    }
}

impl Debug for EmissionFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}t/MWh", self.0)
    }
}

impl Mul<EmissionFactor> for TonRate {
    type Output = MegawattHourRate;

    fn mul(self, rhs: EmissionFactor) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_emission_cost() {
        let rate = TonRate::from(20.0) * EmissionFactor::from(0.3);
        assert_abs_diff_eq!(rate.0.0, 6.0, epsilon = 1e-9);
    }
}
