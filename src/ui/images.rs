use eframe::egui::{self, Color32, CornerRadius, ImageSource, Sense, Ui, Vec2};

// ---------------------------------------------------------------------------
// Embedded image assets
// ---------------------------------------------------------------------------

/// Resolve a place's opaque image name to an embedded asset. The catalog
/// treats the name as free text, so anything unknown simply misses.
pub fn photo_source(image: &str) -> Option<ImageSource<'static>> {
    match image {
        "rest1" => Some(egui::include_image!("../../assets/rest1.png")),
        "rest2" => Some(egui::include_image!("../../assets/rest2.png")),
        "rest3" => Some(egui::include_image!("../../assets/rest3.png")),
        "rest4" => Some(egui::include_image!("../../assets/rest4.png")),
        "rest5" => Some(egui::include_image!("../../assets/rest5.png")),
        _ => None,
    }
}

pub fn logo() -> ImageSource<'static> {
    egui::include_image!("../../assets/logo.png")
}

/// Draw a place photo at the given size, or a neutral block when the image
/// name resolves to nothing.
pub fn photo_or_placeholder(ui: &mut Ui, image: &str, size: Vec2) {
    match photo_source(image) {
        Some(source) => {
            ui.add(
                egui::Image::new(source)
                    .fit_to_exact_size(size)
                    .corner_radius(CornerRadius::same(6)),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(6), Color32::from_gray(70));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_image_name_resolves() {
        let catalog = crate::data::builtin::san_antonio().unwrap();
        for place in catalog.places() {
            assert!(
                photo_source(&place.image).is_some(),
                "no embedded asset for {:?}",
                place.image
            );
        }
    }

    #[test]
    fn test_unknown_image_name_misses() {
        assert!(photo_source("rest99").is_none());
        assert!(photo_source("").is_none());
    }
}
