//! Per-point samplers for the target shapes.
//!
//! Each sampler draws one point of the unscaled shape from the supplied
//! random source. The dispatcher applies the caller's `scale` afterwards.
//! The constants are empirically tuned for the look of each shape.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

/// Uniform random number in `[0, 1)`.
#[inline]
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

/// Uniform random number in `[-0.5, 0.5)`.
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() - 0.5
}

// ---------- volumes ----------

/// Uniform point inside the unit ball (uniform in volume, not on the surface).
pub fn sample_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = TAU * unit(rng);
    let phi = (2.0 * unit(rng) - 1.0).acos();
    let r = unit(rng).cbrt();
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Solid cube with half-extent 0.75.
pub fn sample_cube<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        centered(rng) * 1.5,
        centered(rng) * 1.5,
        centered(rng) * 1.5,
    )
}

/// Diffuse burst: a sphere direction pushed out to a distance in `[0.2, 2.7)`.
pub fn sample_fireworks<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let p = sample_sphere(rng);
    let dist = 0.2 + unit(rng) * 2.5;
    p * dist
}

// ---------- extruded curves ----------

/// Classic parametric heart curve, extruded by a thin slab in z.
pub fn sample_heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = unit(rng) * TAU;
    let hx = 16.0 * t.sin().powi(3);
    let hy = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let thickness = centered(rng) * 4.0;
    Vec3::new(hx / 16.0 * 1.2, hy / 16.0 * 1.2, thickness * 0.1)
}

/// Four-petal rose `r = cos(4θ)`, filled towards the centre and domed in z.
pub fn sample_flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = unit(rng) * TAU;
    let r = (4.0 * theta).cos();
    // The +0.2 offset keeps the lobes where r < 0 populated.
    let rad = unit(rng).sqrt() * r + 0.2;
    let z = (rad * PI).sin() * 0.3 + centered(rng) * 0.1;
    Vec3::new(rad * theta.cos(), rad * theta.sin(), z)
}

// ---------- composites ----------

/// Ring tilt about the x axis.
pub const SATURN_TILT: f32 = PI / 6.0;

/// Planet of radius 0.8 with a ring (60% of points) tilted by 30 degrees.
pub fn sample_saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let is_ring = unit(rng) > 0.4;
    if is_ring {
        let theta = unit(rng) * TAU;
        let radius = 1.2 + unit(rng) * 0.8;
        let x = theta.cos() * radius;
        let z = theta.sin() * radius;
        let y = centered(rng) * 0.05;

        let (sin_t, cos_t) = SATURN_TILT.sin_cos();
        Vec3::new(x, y * cos_t - z * sin_t, y * sin_t + z * cos_t)
    } else {
        sample_sphere(rng) * 0.8
    }
}

/// Seated figure: head (30%), tapered torso (40%), half-disk base (30%).
pub fn sample_buddha<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let region = unit(rng);
    if region < 0.3 {
        let p = sample_sphere(rng);
        Vec3::new(p.x * 0.25, p.y * 0.3 + 0.6, p.z * 0.25)
    } else if region < 0.7 {
        let x = centered(rng) * 0.7;
        let taper = 1.0 - centered(rng).abs();
        Vec3::new(x * taper, centered(rng) * 0.8, centered(rng) * 0.4)
    } else {
        let theta = unit(rng) * PI;
        let r = 0.5 + unit(rng) * 0.3;
        Vec3::new(
            theta.cos() * r,
            -0.5 + unit(rng) * 0.2,
            centered(rng) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_saturn_ring_lies_in_tilted_plane() {
        let mut rng = StdRng::seed_from_u64(7);
        // Normal of the ring plane after rotating +y about x by the tilt.
        let normal = Vec3::new(0.0, SATURN_TILT.cos(), SATURN_TILT.sin());
        let mut ring_points = 0;
        for _ in 0..2000 {
            let p = sample_saturn(&mut rng);
            if p.length() > 1.19 {
                ring_points += 1;
                assert!(p.dot(normal).abs() <= 0.0251, "ring point off plane: {p:?}");
            }
        }
        assert!(ring_points > 1000, "ring should hold ~60% of points, got {ring_points}");
    }

    #[test]
    fn test_buddha_base_is_half_disk() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let p = sample_buddha(&mut rng);
            // Only the base reaches below the torso.
            if p.y < -0.4 {
                assert!(p.y >= -0.5 && p.y <= -0.3);
                assert!(p.x.abs() <= 0.8 + 1e-5);
            }
        }
    }
}
