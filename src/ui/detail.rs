use eframe::egui::{CornerRadius, RichText, ScrollArea, Sense, Ui, vec2};

use crate::state::AppState;
use crate::ui::{images, map};

// ---------------------------------------------------------------------------
// Detail screen – photo, description, zoomed map pin
// ---------------------------------------------------------------------------

/// Render the detail screen for the currently open place. Falls back to the
/// overview if the id no longer resolves (cannot happen with the built-in
/// catalog, but the state makes no such promise).
pub fn detail_screen(ui: &mut Ui, state: &mut AppState) {
    let Some(place) = state.detail_place().cloned() else {
        state.close_detail();
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("◀ All restaurants").clicked() {
            state.close_detail();
        }
        ui.heading(&place.name);
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            images::photo_or_placeholder(ui, &place.image, vec2(240.0, 180.0));
            ui.add_space(6.0);

            ui.horizontal(|ui: &mut Ui| {
                ui.strong("Neighborhood:");
                let color = state.colors.color_for(&place.neighborhood);
                let (swatch, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                ui.painter().rect_filled(swatch, CornerRadius::same(2), color);
                ui.label(RichText::new(&place.neighborhood).color(color));
            });
            ui.label(&place.description);
            ui.add_space(8.0);

            map::detail_map(ui, state, &place);
        });
}
