//! Color helpers: hex parsing and HSL lightness offsets on linear `[0,1]` rgb.

use glam::Vec3;

/// Parse `#rrggbb` or `#rgb` into rgb components in `[0, 1]`.
pub fn parse_hex_color(hex: &str) -> Option<Vec3> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match digits.len() {
        6 => Some(Vec3::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| {
                let d = &digits[i..i + 1];
                channel(&format!("{d}{d}"))
            };
            Some(Vec3::new(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// rgb -> (hue, saturation, lightness), all in `[0, 1]`.
pub fn rgb_to_hsl(rgb: Vec3) -> (f32, f32, f32) {
    let max = rgb.max_element();
    let min = rgb.min_element();
    let lightness = (min + max) / 2.0;
    if max == min {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    let hue = if max == rgb.x {
        (rgb.y - rgb.z) / delta + if rgb.y < rgb.z { 6.0 } else { 0.0 }
    } else if max == rgb.y {
        (rgb.z - rgb.x) / delta + 2.0
    } else {
        (rgb.x - rgb.y) / delta + 4.0
    };
    (hue / 6.0, saturation, lightness)
}

/// (hue, saturation, lightness) -> rgb. Hue wraps, saturation and lightness clamp.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }

    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;
    Vec3::new(
        hue_to_channel(low, high, h + 1.0 / 3.0),
        hue_to_channel(low, high, h),
        hue_to_channel(low, high, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(low: f32, high: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}

/// Shift the lightness of `rgb` by `delta`, keeping hue and saturation.
pub fn offset_lightness(rgb: Vec3, delta: f32) -> Vec3 {
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl_to_rgb(h, s, l + delta)
}
