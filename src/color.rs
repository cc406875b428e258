use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
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

// ---------------------------------------------------------------------------
// Color mapping: status value → Color32
// ---------------------------------------------------------------------------

/// Maps the status values present in a subset to distinct chart colours, so
/// both charts colour the same status the same way.
#[derive(Debug, Clone)]
pub struct StatusColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl StatusColors {
    /// Build a colour map from the status values in display order.
    pub fn new(statuses: &[String]) -> Self {
        let palette = generate_palette(statuses.len());
        let mapping: BTreeMap<String, Color32> = statuses
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        StatusColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a status value.
    pub fn color_for(&self, status: &str) -> Color32 {
        self.mapping
            .get(status)
            .copied()
            .unwrap_or(self.default_color)
    }
}
