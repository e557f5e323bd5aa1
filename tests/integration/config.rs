use flight_stability::{
    resources::AnalysisConfig, ConfigError, FlightDynamicsPipeline, NumericalError, StabilityError,
};
use std::io::Write;

use crate::common::boeing_747_case;

#[test]
fn test_pipeline_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "gravity: 9.81").unwrap();
    writeln!(file, "eigen:").unwrap();
    writeln!(file, "  max_iterations: 500").unwrap();

    let config = AnalysisConfig::from_file(file.path()).unwrap();
    let pipeline = FlightDynamicsPipeline::new(config).unwrap();
    assert_eq!(pipeline.config().eigen.max_iterations, 500);

    let case = boeing_747_case();
    let analysis = pipeline.analyze(&case.trim, &case.coefficients).unwrap();
    assert_eq!(analysis.longitudinal.model.a[(0, 3)], -9.81);
}

#[test]
fn test_iteration_cap_reports_non_convergence() {
    let config = AnalysisConfig::from_yaml_str("eigen:\n  max_iterations: 1\n").unwrap();
    let case = boeing_747_case();
    let result = FlightDynamicsPipeline::new(config)
        .unwrap()
        .analyze(&case.trim, &case.coefficients);
    assert!(matches!(
        result,
        Err(StabilityError::Numerical(NumericalError::NoConvergence {
            iterations: 1,
            ..
        })) | Err(StabilityError::Numerical(NumericalError::EigenvectorFailed { .. }))
    ));
}

#[test]
fn test_pipeline_rejects_unvalidated_config() {
    let mut config = AnalysisConfig::default();
    config.eigen.pairing_tolerance = -1e-8;
    assert!(matches!(
        FlightDynamicsPipeline::new(config),
        Err(ConfigError::ValidationError(_))
    ));
}
