// Host-side tests for tuning defaults and page overrides.

use backdrop_core::constants::*;
use backdrop_core::{ConfigError, FieldParams, OVERRIDE_KEYS};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(MAX_PARTICLES_FLOOR > MIN_PARTICLES);
    assert!(MAX_PARTICLES_CEILING > MAX_PARTICLES_FLOOR);
    assert!(AREA_PER_PARTICLE > MIN_AREA_PER_PARTICLE);
    assert!(MAX_RADIUS > MIN_RADIUS && MIN_RADIUS > 0.0);
    assert!(IMPULSE_RADIUS > REPEL_RADIUS);
    assert!(LINK_ALPHA_SCALE > 0.0 && LINK_ALPHA_SCALE <= 1.0);
    assert!(SKILL_REVEAL_THRESHOLD > SECTION_REVEAL_THRESHOLD);
    assert!(DEFAULT_SKILL_VALUE <= MAX_SKILL_VALUE);
}

#[test]
fn no_overrides_keeps_defaults() {
    let params = FieldParams::default();
    assert_eq!(params.with_overrides(lookup(&[])), Ok(params.clone()));
}

#[test]
fn overrides_apply() {
    let params = FieldParams::default()
        .with_overrides(lookup(&[
            ("link-distance", "200"),
            ("repel-radius", " 90 "),
            ("min-particles", "30"),
            ("seed", "12345"),
        ]))
        .unwrap();
    assert_eq!(params.link_distance, 200.0);
    assert_eq!(params.repel_radius, 90.0);
    assert_eq!(params.min_particles, 30);
    assert!(params.max_particles_floor >= 30);
    assert_eq!(params.seed, Some(12345));
    assert_eq!(params.impulse_radius, IMPULSE_RADIUS);
}

#[test]
fn invalid_overrides_are_rejected() {
    let err = FieldParams::default()
        .with_overrides(lookup(&[("link-distance", "far")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { key: "link-distance", .. }));

    let err = FieldParams::default()
        .with_overrides(lookup(&[("impulse-radius", "-4")]))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::OutOfRange {
            key: "impulse-radius",
            value: -4.0
        }
    );

    let err = FieldParams::default()
        .with_overrides(lookup(&[("seed", "1.5")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { key: "seed", .. }));
}

#[test]
fn tiny_area_per_particle_is_rejected() {
    let err = FieldParams::default()
        .with_overrides(lookup(&[("area-per-particle", "1e-30")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { key: "area-per-particle", .. }));

    let params = FieldParams::default()
        .with_overrides(lookup(&[("area-per-particle", "10000")]))
        .unwrap();
    assert_eq!(params.area_per_particle, MIN_AREA_PER_PARTICLE);
}

#[test]
fn min_particles_must_be_a_whole_positive_count() {
    for raw in ["0.2", "0", "12.5", "100000"] {
        let err = FieldParams::default()
            .with_overrides(lookup(&[("min-particles", raw)]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::OutOfRange { key: "min-particles", .. }),
            "{raw}: {err:?}"
        );
    }
    let params = FieldParams::default()
        .with_overrides(lookup(&[("min-particles", "1")]))
        .unwrap();
    assert_eq!(params.min_particles, 1);
}

#[test]
fn override_keys_are_all_recognised() {
    for key in OVERRIDE_KEYS {
        let value = match key {
            "seed" => "9",
            "area-per-particle" => "50000",
            _ => "5",
        };
        assert!(FieldParams::default()
            .with_overrides(lookup(&[(key, value)]))
            .is_ok());
    }
}
