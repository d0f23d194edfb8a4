//! Tests for the validated configuration snapshot.

use super::*;

/// Ensures default presets are sane.
#[test]
fn default_config_is_valid() {
    let cfg = ConwayConfig::default();
    assert!(cfg.merge_tolerance > 0.0);
    assert!(cfg.max_trisub_factor >= TRISUB_DEFAULT_FACTOR);
    assert!(cfg.hollow_thickness > 0.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ConwayConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        ConwayConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidSubdivisionLimit(0)
    );
    assert!(ConwayConfig::new(f64::NAN, 4).is_err());
}

#[test]
fn new_keeps_distance_presets() {
    let cfg = ConwayConfig::new(1.0e-6, 8).unwrap();
    assert_eq!(cfg.kis_apex_distance, KIS_APEX_DISTANCE);
    assert_eq!(cfg.inset_popout, INSET_POPOUT);
}

#[test]
fn builders_override_presets() {
    let cfg = ConwayConfig::default()
        .with_kis_apex_distance(0.25)
        .with_chamfer_distance(0.1)
        .with_inset(0.3, 0.0);
    assert_eq!(cfg.kis_apex_distance, 0.25);
    assert_eq!(cfg.chamfer_distance, 0.1);
    assert_eq!(cfg.inset_distance, 0.3);
    assert_eq!(cfg.inset_popout, 0.0);
}

#[test]
fn hollow_builder_rejects_flat_walls() {
    let err = ConwayConfig::default().with_hollow(0.5, 0.0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidThickness(0.0));
    assert!(err.to_string().contains("thickness"));
}

#[test]
fn seed_limit_builder_validates() {
    assert_eq!(ConwayConfig::default().max_seed_sides, MAX_SEED_SIDES);
    let cfg = ConwayConfig::default().with_max_seed_sides(12).unwrap();
    assert_eq!(cfg.max_seed_sides, 12);
    assert_eq!(
        ConwayConfig::default().with_max_seed_sides(2).unwrap_err(),
        ConfigError::InvalidSeedLimit(2)
    );
}
