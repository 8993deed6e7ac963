use eframe::egui::{self, CursorIcon, RichText, ScrollArea, Sense, Ui, vec2};

use crate::data::filter::Selection;
use crate::data::model::{Place, PlaceId};
use crate::state::AppState;
use crate::ui::images;

// ---------------------------------------------------------------------------
// Top bar – title, neighborhood picker, visible count
// ---------------------------------------------------------------------------

/// Render the top bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::Image::new(images::logo()).max_height(24.0));
        ui.heading("San Antonio Restaurants");

        ui.separator();

        neighborhood_picker(ui, state);

        ui.separator();

        ui.label(format!(
            "{} of {} places",
            state.visible.len(),
            state.catalog.len()
        ));
    });
}

/// The dropdown over the sentinel plus every distinct neighborhood. Always
/// rendered, even when the catalog offers nothing but the sentinel.
fn neighborhood_picker(ui: &mut Ui, state: &mut AppState) {
    // Clone the options so we can mutate state inside the loop.
    let options = state.neighborhoods.clone();
    let current = state.selection.clone();

    egui::ComboBox::from_id_salt("neighborhood_picker")
        .selected_text(current.label().to_owned())
        .show_ui(ui, |ui: &mut Ui| {
            for label in &options {
                if ui
                    .selectable_label(label.as_str() == current.label(), label)
                    .clicked()
                {
                    state.select(Selection::from_label(label));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Left side panel – the restaurant list
// ---------------------------------------------------------------------------

/// Render the restaurant list for the current filter. Clicking a row opens
/// that place's detail screen.
pub fn place_list(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.strong("Restaurants");
    ui.separator();

    let visible = state.visible.clone();
    let mut clicked: Option<PlaceId> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if visible.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("No restaurants in this neighborhood.").weak());
                return;
            }

            for &idx in &visible {
                let Some(place) = state.catalog.places().get(idx) else {
                    continue;
                };
                let is_open = state.detail == Some(place.id);
                if place_row(ui, place, state, is_open) {
                    clicked = Some(place.id);
                }
                ui.separator();
            }
        });

    if let Some(id) = clicked {
        state.open_detail(id);
    }
}

/// One list row: thumbnail, name, neighborhood tag. Returns whether the row
/// was clicked.
fn place_row(ui: &mut Ui, place: &Place, state: &AppState, is_open: bool) -> bool {
    let row = ui.horizontal(|ui: &mut Ui| {
        images::photo_or_placeholder(ui, &place.image, vec2(48.0, 48.0));
        ui.vertical(|ui: &mut Ui| {
            let mut name = RichText::new(&place.name).strong();
            if is_open {
                name = name.underline();
            }
            ui.label(name);
            ui.label(
                RichText::new(&place.neighborhood)
                    .small()
                    .color(state.colors.color_for(&place.neighborhood)),
            );
        });
    });

    row.response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}
