use flight_stability::{
    components::FlightCase, resources::AnalysisConfig, DomainError, FlightDynamicsPipeline,
    StabilityError,
};
use pretty_assertions::assert_eq;

use crate::common::{boeing_747_case, boeing_747_regime_sweep, twin_otter_case};

#[test]
fn test_batch_matches_sequential_analysis() {
    let pipeline = FlightDynamicsPipeline::new(AnalysisConfig::default()).unwrap();
    let mut cases = boeing_747_regime_sweep();
    cases.push(twin_otter_case());

    let batch = pipeline.analyze_batch(&cases);
    assert_eq!(batch.len(), cases.len());

    for (case, (name, result)) in cases.iter().zip(&batch) {
        assert_eq!(name, &case.name);
        let sequential = pipeline.analyze(&case.trim, &case.coefficients);
        assert_eq!(result, &sequential);
    }
}

#[test]
fn test_batch_reports_failures_in_place() {
    let good = boeing_747_case();
    let mut bad_trim = good.trim;
    bad_trim.mass.ixz = 1.0e9;
    let bad = FlightCase::new("bad-inertia", bad_trim, good.coefficients);

    let results = FlightDynamicsPipeline::default().analyze_batch(&[good.clone(), bad, good]);

    assert!(results[0].1.is_ok());
    assert!(matches!(
        &results[1].1,
        Err(StabilityError::Domain(DomainError::InvalidTrimCondition {
            field: "ixz",
            ..
        }))
    ));
    assert!(results[2].1.is_ok());
}

#[test]
fn test_empty_batch() {
    assert!(FlightDynamicsPipeline::default().analyze_batch(&[]).is_empty());
}
