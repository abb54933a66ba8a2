use eframe::egui::{Color32, ColorImage};
use palette::{Hsl, IntoColor, Srgb};

use crate::analysis::ScaleMagnitudeMap;

// ---------------------------------------------------------------------------
// Heat colormap for the wavelet magnitude map
// ---------------------------------------------------------------------------

/// Map a normalized magnitude in `[0, 1]` to a heat colour: blue (hue 240°)
/// through green up to red (hue 0°).
pub fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hue = 240.0 * (1.0 - t);
    let hsl = Hsl::new(hue, 0.9, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Render a CWT magnitude map as a colour image: one pixel row per scale
/// (largest scale at the top, matching a y-axis that grows upward), one
/// pixel column per sample, colours normalized over the whole map.
pub fn magnitude_image(map: &ScaleMagnitudeMap) -> ColorImage {
    let width = map.n_samples();
    let height = map.n_scales();
    let (min, max) = map.magnitude_range();
    let range = if max > min { max - min } else { 1.0 };

    let mut pixels = Vec::with_capacity(width * height);
    for row in map.magnitudes.iter().rev() {
        for &m in row {
            let t = ((m - min) / range) as f32;
            pixels.push(heat_color(t));
        }
    }

    ColorImage {
        size: [width, height],
        pixels,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
