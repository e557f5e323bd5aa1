use serde::{Deserialize, Serialize};
use std::fmt;

/// How thrust varies with airspeed about the trim point.
///
/// The regime selects which `Xu` and `Xδt` formula is used; every other
/// derivative is independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropulsionRegime {
    /// Thrust independent of speed (turbojet/turbofan idealisation).
    #[default]
    ConstantThrust,
    /// Power independent of speed (piston-propeller idealisation).
    ConstantPower,
    /// Mass flow independent of speed.
    ConstantMassFlow,
    /// Thrust growing with dynamic pressure.
    Ramjet,
}

impl PropulsionRegime {
    pub const ALL: [PropulsionRegime; 4] = [
        PropulsionRegime::ConstantThrust,
        PropulsionRegime::ConstantPower,
        PropulsionRegime::ConstantMassFlow,
        PropulsionRegime::Ramjet,
    ];
}

impl fmt::Display for PropulsionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropulsionRegime::ConstantThrust => "constant thrust",
            PropulsionRegime::ConstantPower => "constant power",
            PropulsionRegime::ConstantMassFlow => "constant mass flow",
            PropulsionRegime::Ramjet => "ramjet",
        };
        write!(f, "{}", name)
    }
}
