use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zen_core::shapes::primitives::*;
use zen_core::shapes::{generate_targets, generate_targets_with, Bounds, Shape, DEFAULT_SCALE};
use zen_core::ConfigError;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_all_shapes_within_bounds() {
    let mut rng = rng(1);
    for shape in Shape::ALL {
        for count in [1, 7, 1000, 50_000] {
            let points = generate_targets_with(&mut rng, count, shape, DEFAULT_SCALE);
            let bounds = shape.bounds();
            for p in &points {
                assert!(p.is_finite(), "{shape} produced non-finite point {p:?}");
                assert!(
                    bounds.contains(*p, DEFAULT_SCALE, 1e-4),
                    "{shape} point {p:?} outside {bounds:?} at scale {DEFAULT_SCALE}"
                );
            }
        }
    }
}

#[test]
fn test_count_invariant() {
    for shape in Shape::ALL {
        for count in [0, 1, 2, 999, 15_000] {
            let points = generate_targets(count, shape, DEFAULT_SCALE);
            assert_eq!(points.len(), count, "{shape} returned wrong count");
        }
    }
}

#[test]
fn test_zero_count_is_empty() {
    assert!(generate_targets(0, Shape::Saturn, 1.0).is_empty());
}

#[test]
fn test_sphere_fills_volume() {
    let mut rng = rng(2);
    let n = 20_000;
    let mean_r: f32 = (0..n).map(|_| sample_sphere(&mut rng).length()).sum::<f32>() / n as f32;
    // E[r] = 3/4 for a uniform ball, 1.0 for a shell
    assert!((mean_r - 0.75).abs() < 0.02, "mean radius {mean_r} is not volume-uniform");
}

#[test]
fn test_cube_axes_span_full_range() {
    let mut rng = rng(3);
    let points: Vec<Vec3> = (0..5000).map(|_| sample_cube(&mut rng)).collect();
    let min = points.iter().fold(Vec3::splat(f32::MAX), |a, p| a.min(*p));
    let max = points.iter().fold(Vec3::splat(f32::MIN), |a, p| a.max(*p));
    assert!(min.max_element() < -0.7, "cube min {min:?} does not reach -0.75");
    assert!(max.min_element() > 0.7, "cube max {max:?} does not reach 0.75");
}

#[test]
fn test_fireworks_is_diffuse_shell() {
    let mut rng = rng(4);
    let radii: Vec<f32> = (0..5000).map(|_| sample_fireworks(&mut rng).length()).collect();
    let beyond_unit = radii.iter().filter(|r| **r > 1.0).count();
    assert!(beyond_unit > 2000, "burst should reach well past the unit sphere");
    assert!(radii.iter().all(|r| *r < 2.7));
}

#[test]
fn test_heart_is_thin_slab() {
    let mut rng = rng(5);
    for _ in 0..2000 {
        let p = sample_heart(&mut rng);
        assert!(p.z.abs() <= 0.2);
    }
}

#[test]
fn test_scale_multiplies_points() {
    let unit = generate_targets_with(&mut rng(6), 100, Shape::Flower, 1.0);
    let doubled = generate_targets_with(&mut rng(6), 100, Shape::Flower, 2.0);
    for (a, b) in unit.iter().zip(&doubled) {
        assert!((*a * 2.0 - *b).length() < 1e-5);
    }
}

#[test]
fn test_same_seed_same_cloud_different_seed_different_cloud() {
    let a = generate_targets_with(&mut rng(9), 50, Shape::Buddha, DEFAULT_SCALE);
    let b = generate_targets_with(&mut rng(9), 50, Shape::Buddha, DEFAULT_SCALE);
    let c = generate_targets_with(&mut rng(10), 50, Shape::Buddha, DEFAULT_SCALE);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_shape_names_parse_case_insensitively() {
    for shape in Shape::ALL {
        assert_eq!(shape.name().parse::<Shape>().unwrap(), shape);
        assert_eq!(shape.name().to_lowercase().parse::<Shape>().unwrap(), shape);
        assert_eq!(shape.to_string(), shape.name());
    }
}

#[test]
fn test_unknown_shape_fails_fast() {
    match "Torus".parse::<Shape>() {
        Err(ConfigError::UnknownShape(name)) => assert_eq!(name, "Torus"),
        other => panic!("expected UnknownShape, got {other:?}"),
    }
}

#[test]
fn test_bounds_contains_scales() {
    let ball = Bounds::Ball(1.0);
    assert!(ball.contains(Vec3::new(1.9, 0.0, 0.0), 2.0, 0.0));
    assert!(!ball.contains(Vec3::new(2.1, 0.0, 0.0), 2.0, 0.0));
    let cube = Shape::Cube.bounds();
    assert!(cube.contains(Vec3::splat(1.5), 2.0, 0.0));
    assert!(!cube.contains(Vec3::new(1.6, 0.0, 0.0), 2.0, 0.0));
}
