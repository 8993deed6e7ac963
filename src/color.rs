use std::collections::{BTreeMap, BTreeSet};

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
            let hsl = Hsl::new(hue, 0.65, 0.45);
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
// Neighborhood → colour assignment
// ---------------------------------------------------------------------------

/// One colour per neighborhood, used for list tags and map pins. The
/// assignment follows the sorted neighborhood order, so it is stable for a
/// fixed catalog.
#[derive(Debug, Clone)]
pub struct NeighborhoodColors {
    mapping: BTreeMap<String, Color32>,
    fallback: Color32,
}

impl NeighborhoodColors {
    /// Assign colours to the given (sorted, sentinel-free) neighborhood set.
    pub fn new(neighborhoods: &BTreeSet<String>) -> Self {
        let palette = generate_palette(neighborhoods.len());
        let mapping = neighborhoods
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        NeighborhoodColors {
            mapping,
            fallback: Color32::GRAY,
        }
    }

    /// The colour for a neighborhood; gray for anything unknown.
    pub fn color_for(&self, neighborhood: &str) -> Color32 {
        self.mapping
            .get(neighborhood)
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
