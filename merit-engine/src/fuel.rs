use merit_quantities::{
    proportion::Percent,
    rate::{MegawattHourRate, TonRate},
};

/// Scenario fuel prices and wind forecast. Immutable, one per request.
#[derive(Copy, Clone, Debug)]
pub struct FuelPrices {
    pub gas: MegawattHourRate,
    pub kerosene: MegawattHourRate,
    pub co2: TonRate,

    /// Forecast wind availability, 0 to 100.
    pub wind: Percent,
}
