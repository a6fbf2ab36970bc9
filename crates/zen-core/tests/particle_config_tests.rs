use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zen_core::config::COLOR_PRESETS;
use zen_core::math::parse_hex_color;
use zen_core::particle::SCATTER_HALF_EXTENT;
use zen_core::{ConfigError, ParticleSet, Shape, SimConfig};

// ---------------------------------------------------------------------------
// ParticleSet
// ---------------------------------------------------------------------------

#[test]
fn test_particle_set_new_initializes_correctly() {
    let particles = ParticleSet::new(10);

    assert_eq!(particles.len(), 10);
    assert!(particles.is_consistent());
    for i in 0..10 {
        assert_eq!(particles.position[i], Vec3::ZERO, "position[{i}] should be ZERO");
        assert_eq!(particles.velocity[i], Vec3::ZERO, "velocity[{i}] should be ZERO");
        assert_eq!(particles.color[i], Vec3::ZERO, "color[{i}] should be ZERO");
        assert_eq!(particles.size[i], 1.0, "size[{i}] should be 1.0");
    }
}

#[test]
fn test_particle_set_zero_count() {
    let particles = ParticleSet::new(0);
    assert!(particles.is_empty());
    assert!(particles.is_consistent());
    assert_eq!(particles.size.len(), 0);
}

#[test]
fn test_inconsistent_set_detected() {
    let mut particles = ParticleSet::new(4);
    particles.size.pop();
    assert!(!particles.is_consistent());
}

#[test]
fn test_scatter_fills_spawn_cube_at_rest() {
    let mut rng = StdRng::seed_from_u64(11);
    let base = parse_hex_color("#ff55ff").unwrap();
    let particles = ParticleSet::scatter(&mut rng, 3000, base, 1.2);

    assert_eq!(particles.len(), 3000);
    assert!(particles.is_consistent());
    for i in 0..particles.len() {
        let p = particles.position[i];
        assert!(p.abs().max_element() <= SCATTER_HALF_EXTENT, "particle {i} spawned at {p:?}");
        assert_eq!(particles.velocity[i], Vec3::ZERO);
        assert!((0.6..=1.8).contains(&particles.size[i]), "size[{i}] = {}", particles.size[i]);
    }

    let spread = particles
        .position
        .iter()
        .fold(Vec3::ZERO, |acc, p| acc.max(p.abs()));
    assert!(spread.min_element() > 4.5, "scatter should use the whole cube, got {spread:?}");
}

#[test]
fn test_scatter_colors_stay_near_base_and_in_range() {
    let mut rng = StdRng::seed_from_u64(12);
    for hex in COLOR_PRESETS {
        let base = parse_hex_color(hex).unwrap();
        let particles = ParticleSet::scatter(&mut rng, 500, base, 1.0);
        for c in &particles.color {
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0, "{hex}: color {c:?} out of range");
            assert!((*c - base).abs().max_element() <= 0.21, "{hex}: color {c:?} drifted from {base:?}");
        }
    }
}

#[test]
fn test_scatter_colors_vary() {
    let mut rng = StdRng::seed_from_u64(13);
    let base = parse_hex_color("#5555ff").unwrap();
    let particles = ParticleSet::scatter(&mut rng, 100, base, 1.0);
    let distinct = particles.color.iter().filter(|c| **c != particles.color[0]).count();
    assert!(distinct > 90);
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_values() {
    let config = SimConfig::default();

    assert_eq!(config.particle_count, 8000);
    assert_eq!(config.base_color, "#55ffff");
    assert_eq!(config.shape, Shape::Sphere);
    assert!(!config.enable_gesture_control);
    assert_eq!(config.noise_strength, 1.0);
    assert_eq!(config.interaction_strength, 1.0);
    assert_eq!(config.size, 1.2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_camel_case_with_defaults() {
    let json = r##"{"particleCount": 2000, "baseColor": "#ff5555", "shape": "heart", "enableGestureControl": true}"##;
    let config = SimConfig::from_json(json).unwrap();

    assert_eq!(config.particle_count, 2000);
    assert_eq!(config.base_color, "#ff5555");
    assert_eq!(config.shape, Shape::Heart);
    assert!(config.enable_gesture_control);
    assert_eq!(config.noise_strength, SimConfig::default().noise_strength);
    assert_eq!(config.size, SimConfig::default().size);
}

#[test]
fn test_json_round_trip_keeps_shape_name() {
    let config = SimConfig {
        shape: Shape::Saturn,
        ..SimConfig::default()
    };
    let json = config.to_json().unwrap();
    assert!(json.contains(r#""shape":"Saturn""#), "unexpected json {json}");
    assert!(json.contains("particleCount"));
    assert_eq!(SimConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_unknown_shape_in_json_rejected() {
    let err = SimConfig::from_json(r#"{"shape": "Torus"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "got {err:?}");
    assert!(err.to_string().contains("Torus"));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(SimConfig::from_json("{not json"), Err(ConfigError::Json(_))));
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero = SimConfig {
        particle_count: 0,
        ..SimConfig::default()
    };
    assert!(matches!(zero.validate(), Err(ConfigError::InvalidParticleCount(0))));

    let color = SimConfig {
        base_color: "cyan".into(),
        ..SimConfig::default()
    };
    assert!(matches!(color.validate(), Err(ConfigError::InvalidColor(_))));

    let noise = SimConfig {
        noise_strength: 7.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        noise.validate(),
        Err(ConfigError::InvalidRange { field: "noiseStrength", .. })
    ));

    let size = SimConfig {
        size: f32::NAN,
        ..SimConfig::default()
    };
    assert!(matches!(size.validate(), Err(ConfigError::InvalidRange { field: "size", .. })));

    let interaction = SimConfig {
        interaction_strength: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        interaction.validate(),
        Err(ConfigError::InvalidRange { field: "interactionStrength", .. })
    ));
}

#[test]
fn test_validate_accepts_counts_outside_slider() {
    let config = SimConfig {
        particle_count: 20_000,
        ..SimConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_short_hex_color() {
    let config = SimConfig {
        base_color: "#f0f".into(),
        ..SimConfig::default()
    };
    assert_eq!(config.base_rgb().unwrap(), Vec3::new(1.0, 0.0, 1.0));
}
