use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// Hue used for the first generated trace colour (a blue).
pub const BASE_HUE: f32 = 220.0;

/// Raw monthly points of the historical chart: rgba(245, 40, 145, 0.8).
pub fn raw_points() -> Color32 {
    Color32::from_rgba_unmultiplied(245, 40, 145, 204)
}

/// Generates `n` visually distinct colours with evenly spaced hues,
/// starting at `start_hue` degrees.
pub fn generate_palette(n: usize, start_hue: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (start_hue + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
