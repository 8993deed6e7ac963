use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotBounds, PlotPoint, PlotUi, Points};

use crate::data::model::{Coordinate, Place};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Map regions
// ---------------------------------------------------------------------------

/// Downtown San Antonio, the fallback center when there is nothing to frame.
pub const CITY_CENTER: Coordinate = Coordinate::new(29.4241, -98.4936);

/// Fallback span (degrees) around [`CITY_CENTER`] for an empty catalog.
const CITY_SPAN: f64 = 0.4;

/// Span (degrees) of the zoomed single-pin region on the detail screen.
const DETAIL_SPAN: f64 = 0.2;

/// Fraction of the catalog's extent added as margin on each side.
const REGION_MARGIN: f64 = 0.15;

/// Smallest half-span (degrees) so a degenerate extent still frames an area.
const MIN_HALF_SPAN: f64 = 0.02;

/// Plot bounds as `([min_lon, min_lat], [max_lon, max_lat])`.
type Region = ([f64; 2], [f64; 2]);

/// Region covering every coordinate with a margin around the extent. An
/// empty slice falls back to the city-wide region.
pub fn region_around(coords: &[Coordinate]) -> Region {
    let Some(first) = coords.first() else {
        return span_region(CITY_CENTER, CITY_SPAN, CITY_SPAN);
    };

    let mut min = *first;
    let mut max = *first;
    for c in coords {
        min.lat = min.lat.min(c.lat);
        min.lon = min.lon.min(c.lon);
        max.lat = max.lat.max(c.lat);
        max.lon = max.lon.max(c.lon);
    }

    let lat_pad = ((max.lat - min.lat) * REGION_MARGIN).max(MIN_HALF_SPAN);
    let lon_pad = ((max.lon - min.lon) * REGION_MARGIN).max(MIN_HALF_SPAN);
    (
        [min.lon - lon_pad, min.lat - lat_pad],
        [max.lon + lon_pad, max.lat + lat_pad],
    )
}

/// Region of the given span centered on a coordinate.
pub fn span_region(center: Coordinate, lat_span: f64, lon_span: f64) -> Region {
    (
        [center.lon - lon_span / 2.0, center.lat - lat_span / 2.0],
        [center.lon + lon_span / 2.0, center.lat + lat_span / 2.0],
    )
}

/// The zoomed region shown on a place's detail screen.
pub fn detail_region(place: &Place) -> Region {
    span_region(place.coord, DETAIL_SPAN, DETAIL_SPAN)
}

// ---------------------------------------------------------------------------
// Overview map (central panel)
// ---------------------------------------------------------------------------

/// Render the overview map: one pin per visible place. The region is seeded
/// from the full catalog so it stays put when the filter changes; after that
/// the user pans and zooms freely.
pub fn overview_map(ui: &mut Ui, state: &mut AppState) {
    let coords: Vec<Coordinate> = state.catalog.places().iter().map(|p| p.coord).collect();
    let (min, max) = region_around(&coords);
    let seed_bounds = std::mem::take(&mut state.reset_overview);

    Plot::new("overview_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if seed_bounds {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }
            for place in state.visible_places() {
                pin(plot_ui, place, state.colors.color_for(&place.neighborhood));
            }
        });
}

// ---------------------------------------------------------------------------
// Detail map (single zoomed pin)
// ---------------------------------------------------------------------------

/// Render the zoomed map on a detail screen. Re-centered whenever the
/// screen is (re)opened, then free to pan/zoom like the overview.
pub fn detail_map(ui: &mut Ui, state: &mut AppState, place: &Place) {
    let (min, max) = detail_region(place);
    let seed_bounds = std::mem::take(&mut state.reset_detail);
    let color = state.colors.color_for(&place.neighborhood);

    Plot::new(("detail_map", place.id))
        .height(300.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if seed_bounds {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }
            pin(plot_ui, place, color);
        });
}

/// One map pin: a filled marker at (lon, lat) with the place name right
/// below it. Marker and label share a legend name so pins group by
/// neighborhood.
fn pin(plot_ui: &mut PlotUi, place: &Place, color: Color32) {
    let at = [place.coord.lon, place.coord.lat];

    plot_ui.points(
        Points::new(vec![at])
            .name(&place.neighborhood)
            .color(color)
            .filled(true)
            .radius(6.0)
            .shape(MarkerShape::Circle),
    );
    plot_ui.text(
        egui_plot::Text::new(
            PlotPoint::new(at[0], at[1]),
            RichText::new(place.name.clone()).size(11.0),
        )
        .anchor(Align2::CENTER_TOP)
        .name(&place.neighborhood)
        .color(color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin;

    #[test]
    fn test_region_covers_every_builtin_place() {
        let catalog = builtin::san_antonio().unwrap();
        let coords: Vec<Coordinate> = catalog.places().iter().map(|p| p.coord).collect();
        let (min, max) = region_around(&coords);

        for c in &coords {
            assert!(min[0] < c.lon && c.lon < max[0], "lon {} outside region", c.lon);
            assert!(min[1] < c.lat && c.lat < max[1], "lat {} outside region", c.lat);
        }
    }

    #[test]
    fn test_region_of_single_point_still_has_area() {
        let (min, max) = region_around(&[Coordinate::new(29.4260, -98.4886)]);
        assert!(max[0] - min[0] >= 2.0 * MIN_HALF_SPAN);
        assert!(max[1] - min[1] >= 2.0 * MIN_HALF_SPAN);
    }

    #[test]
    fn test_empty_region_falls_back_to_the_city() {
        let (min, max) = region_around(&[]);
        assert!(min[0] < CITY_CENTER.lon && CITY_CENTER.lon < max[0]);
        assert!(min[1] < CITY_CENTER.lat && CITY_CENTER.lat < max[1]);
        assert!((max[1] - min[1] - CITY_SPAN).abs() < 1e-9);
    }

    #[test]
    fn test_detail_region_is_centered_on_the_place() {
        let catalog = builtin::san_antonio().unwrap();
        let rosarios = &catalog.places()[4];
        let (min, max) = detail_region(rosarios);

        assert!((max[0] - min[0] - DETAIL_SPAN).abs() < 1e-9);
        assert!((max[1] - min[1] - DETAIL_SPAN).abs() < 1e-9);
        let center_lon = (min[0] + max[0]) / 2.0;
        let center_lat = (min[1] + max[1]) / 2.0;
        assert!((center_lon - rosarios.coord.lon).abs() < 1e-9);
        assert!((center_lat - rosarios.coord.lat).abs() < 1e-9);
    }
}
