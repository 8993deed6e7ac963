use eframe::egui;

use crate::data::model::Catalog;
use crate::state::AppState;
use crate::ui::{detail, map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AlamoEatsApp {
    pub state: AppState,
}

impl AlamoEatsApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: AppState::new(catalog),
        }
    }
}

impl eframe::App for AlamoEatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, picker, count ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: restaurant list ----
        egui::SidePanel::left("place_list")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::place_list(ui, &mut self.state);
            });

        // ---- Central panel: overview map, or the open detail screen ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.detail.is_some() {
                detail::detail_screen(ui, &mut self.state);
            } else {
                map::overview_map(ui, &mut self.state);
            }
        });
    }
}
