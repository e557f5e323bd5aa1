use flight_stability::components::{
    AerodynamicCoefficientSet, FlightCase, ModeParameters, PropulsionRegime, TrimCondition,
};

/// Reference mode figures captured from an independent characteristic-polynomial solve.
#[derive(Debug, Clone, Copy)]
pub struct ModeFixture {
    pub natural_frequency: f64,
    pub damping_ratio: f64,
}

impl ModeFixture {
    pub const fn new(natural_frequency: f64, damping_ratio: f64) -> Self {
        Self {
            natural_frequency,
            damping_ratio,
        }
    }
}

pub mod boeing_747 {
    use super::ModeFixture;

    /// Published short-period figures for Mach 0.8 at 40 000 ft.
    pub const PUBLISHED_SHORT_PERIOD: ModeFixture = ModeFixture::new(0.962, 0.387);

    pub const SHORT_PERIOD: ModeFixture = ModeFixture::new(0.956768, 0.390784);
    pub const SHORT_PERIOD_PERIOD: f64 = 7.134408;
    pub const SHORT_PERIOD_TIME_TO_HALF: f64 = 1.853883;
    pub const PHUGOID: ModeFixture = ModeFixture::new(0.068451, 0.048730);
    pub const PHUGOID_CONSTANT_POWER: ModeFixture = ModeFixture::new(0.068452, 0.069159);
    pub const DUTCH_ROLL: ModeFixture = ModeFixture::new(0.947373, 0.035451);
    pub const ROLL: f64 = -0.563095;
    pub const SPIRAL: f64 = -0.0072743;
}

pub mod twin_otter {
    use super::ModeFixture;

    pub const SHORT_PERIOD: ModeFixture = ModeFixture::new(3.105547, 0.600928);
    pub const PHUGOID: ModeFixture = ModeFixture::new(0.201863, 0.256906);
    pub const DUTCH_ROLL: ModeFixture = ModeFixture::new(1.857478, 0.632522);
    pub const ROLL: f64 = -4.153169;
    pub const SPIRAL: f64 = -0.114252;
}

pub fn boeing_747_case() -> FlightCase {
    FlightCase::new(
        "boeing-747-cruise",
        TrimCondition::boeing_747_cruise(),
        AerodynamicCoefficientSet::boeing_747_cruise(),
    )
}

pub fn twin_otter_case() -> FlightCase {
    FlightCase::new(
        "twin-otter-cruise",
        TrimCondition::twin_otter_cruise(),
        AerodynamicCoefficientSet::twin_otter_cruise(),
    )
}

/// The 747 cruise case flown under every propulsion regime.
pub fn boeing_747_regime_sweep() -> Vec<FlightCase> {
    let base = boeing_747_case();
    PropulsionRegime::ALL
        .iter()
        .map(|&regime| {
            FlightCase::new(
                format!("{}-{}", base.name, regime),
                base.trim,
                base.coefficients.with_propulsion(regime),
            )
        })
        .collect()
}

pub fn mode_summary(mode: &ModeParameters) -> ModeFixture {
    ModeFixture::new(mode.natural_frequency, mode.damping_ratio)
}
