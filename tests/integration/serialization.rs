use approx::assert_relative_eq;
use flight_stability::{
    components::{AerodynamicCoefficientSet, FlightCase, PropulsionRegime},
    FlightDynamicsPipeline, StabilityAnalysis,
};
use pretty_assertions::assert_eq;

use crate::common::{boeing_747_case, twin_otter_case};

#[test]
fn test_analysis_serializes_to_json() {
    let case = boeing_747_case();
    let analysis = FlightDynamicsPipeline::default()
        .analyze(&case.trim, &case.coefficients)
        .unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json["longitudinal_modes"]["short_period"]["damping_ratio"].is_f64());
    assert_eq!(json["longitudinal"]["model"]["axis"], "Longitudinal");
    assert_eq!(json["derivatives"]["propulsion"], "CONSTANT_THRUST");

    let restored: StabilityAnalysis = serde_json::from_value(json).unwrap();
    assert_eq!(restored.derivatives.propulsion, analysis.derivatives.propulsion);
    assert_relative_eq!(
        restored.lateral_modes.dutch_roll.damping_ratio,
        analysis.lateral_modes.dutch_roll.damping_ratio,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        restored.longitudinal.model.a,
        analysis.longitudinal.model.a,
        max_relative = 1e-12
    );
}

#[test]
fn test_flight_case_loads_from_yaml() {
    let case = twin_otter_case();
    let yaml = serde_yaml::to_string(&case).unwrap();
    assert!(yaml.contains("CONSTANT_POWER"));

    let loaded: FlightCase = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(loaded, case);
}

#[test]
fn test_unknown_regime_rejected() {
    let mut value = serde_yaml::to_value(AerodynamicCoefficientSet::boeing_747_cruise()).unwrap();
    value["propulsion"] = serde_yaml::Value::from("TURBOPROP");
    assert!(serde_yaml::from_value::<AerodynamicCoefficientSet>(value.clone()).is_err());

    value["propulsion"] = serde_yaml::Value::from("RAMJET");
    let coeffs: AerodynamicCoefficientSet = serde_yaml::from_value(value).unwrap();
    assert_eq!(coeffs.propulsion, PropulsionRegime::Ramjet);
}
