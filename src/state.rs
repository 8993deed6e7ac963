use crate::color::NeighborhoodColors;
use crate::data::filter::{self, Selection};
use crate::data::model::{Catalog, Place, PlaceId};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The catalog is fixed for the
/// life of the process; everything else is what the user is currently
/// looking at.
pub struct AppState {
    /// The immutable catalog, owned here and only ever borrowed out.
    pub catalog: Catalog,

    /// Picker options: sentinel first, then sorted neighborhoods (cached,
    /// the catalog never changes).
    pub neighborhoods: Vec<String>,

    /// The current neighborhood filter.
    pub selection: Selection,

    /// Positions into `catalog.places()` passing the current filter (cached).
    pub visible: Vec<usize>,

    /// Which place's detail screen is open; `None` shows the overview map.
    pub detail: Option<PlaceId>,

    /// Colour per neighborhood for tags and pins.
    pub colors: NeighborhoodColors,

    /// One-shot flags telling the map views to re-seed their bounds.
    pub reset_overview: bool,
    pub reset_detail: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let neighborhoods = filter::distinct_neighborhoods(&catalog);
        let colors = NeighborhoodColors::new(&filter::neighborhood_set(&catalog));
        let visible = (0..catalog.len()).collect();

        AppState {
            catalog,
            neighborhoods,
            selection: Selection::All,
            visible,
            detail: None,
            colors,
            reset_overview: true,
            reset_detail: false,
        }
    }

    /// Change the filter and recompute the visible set. A re-selection of
    /// the current value is a no-op.
    pub fn select(&mut self, selection: Selection) {
        if self.selection == selection {
            return;
        }
        log::debug!("selection changed to {:?}", selection.label());
        self.selection = selection;
        self.refilter();
    }

    /// Recompute `visible` from the current selection.
    pub fn refilter(&mut self) {
        self.visible = filter::filtered_indices(&self.catalog, &self.selection);
    }

    /// The places passing the current filter, in catalog order.
    pub fn visible_places(&self) -> impl Iterator<Item = &Place> {
        self.visible.iter().filter_map(|&i| self.catalog.places().get(i))
    }

    /// Open the detail screen for a place. Re-centers its map every time.
    pub fn open_detail(&mut self, id: PlaceId) {
        log::debug!("opening detail for place {id}");
        self.detail = Some(id);
        self.reset_detail = true;
    }

    /// Back to the overview.
    pub fn close_detail(&mut self) {
        log::debug!("closing detail");
        self.detail = None;
    }

    /// The place whose detail screen is open, if any. Resolved by id, so a
    /// filter change while the screen is open cannot redirect it.
    pub fn detail_place(&self) -> Option<&Place> {
        self.detail.and_then(|id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin;
    use crate::data::filter::ALL_NEIGHBORHOODS;

    fn state() -> AppState {
        AppState::new(builtin::san_antonio().unwrap())
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = state();
        assert_eq!(state.selection, Selection::All);
        assert_eq!(state.visible, [0, 1, 2, 3, 4]);
        assert_eq!(state.neighborhoods.first().map(String::as_str), Some(ALL_NEIGHBORHOODS));
        assert_eq!(state.neighborhoods.len(), 6);
        assert!(state.detail.is_none());
        assert!(state.reset_overview);
    }

    #[test]
    fn test_select_narrows_the_visible_set() {
        let mut state = state();
        state.select(Selection::from_label("Downtown"));
        assert_eq!(state.visible, [4]);
        assert_eq!(
            state.visible_places().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["Rosarios Mexican Restaurant"]
        );

        state.select(Selection::All);
        assert_eq!(state.visible, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reselecting_the_same_value_changes_nothing() {
        let mut state = state();
        state.select(Selection::from_label("Downtown"));
        let before = state.visible.clone();
        state.select(Selection::from_label("Downtown"));
        assert_eq!(state.visible, before);
    }

    #[test]
    fn test_detail_opens_by_id_and_survives_filtering() {
        let mut state = state();
        let golden_wok = state.catalog.places()[3].id;

        state.open_detail(golden_wok);
        assert!(state.reset_detail);
        assert_eq!(state.detail_place().map(|p| p.name.as_str()), Some("Golden Wok"));

        // Filtering Golden Wok out of the list leaves its detail screen open.
        state.select(Selection::from_label("Downtown"));
        assert_eq!(state.detail_place().map(|p| p.name.as_str()), Some("Golden Wok"));

        state.close_detail();
        assert!(state.detail_place().is_none());
    }

    #[test]
    fn test_detail_of_unknown_id_resolves_to_none() {
        let mut state = state();
        state.open_detail(PlaceId(99));
        assert!(state.detail_place().is_none());
    }
}
