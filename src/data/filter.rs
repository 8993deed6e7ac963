use std::collections::BTreeSet;

use super::model::{Catalog, Place};

// ---------------------------------------------------------------------------
// Selection: which neighborhood the list and map are narrowed to
// ---------------------------------------------------------------------------

/// Picker entry meaning "no filter applied". Always the first option.
pub const ALL_NEIGHBORHOODS: &str = "All Neighborhoods";

/// The current neighborhood filter. Starts at [`Selection::All`] and only
/// changes when the user picks an entry in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Neighborhood(String),
}

impl Selection {
    /// Map a picker label back to a selection.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_NEIGHBORHOODS {
            Selection::All
        } else {
            Selection::Neighborhood(label.to_owned())
        }
    }

    /// The label shown in the picker for this selection.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_NEIGHBORHOODS,
            Selection::Neighborhood(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether a place passes this filter.
    pub fn matches(&self, place: &Place) -> bool {
        match self {
            Selection::All => true,
            Selection::Neighborhood(name) => place.neighborhood == *name,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views over the catalog
// ---------------------------------------------------------------------------

/// The distinct neighborhoods present in the catalog, sorted ascending.
/// No sentinel; this is the raw grouping key set.
pub fn neighborhood_set(catalog: &Catalog) -> BTreeSet<String> {
    catalog
        .places()
        .iter()
        .map(|p| p.neighborhood.clone())
        .collect()
}

/// Picker options: the sentinel first, then every distinct neighborhood in
/// lexicographic order. An empty catalog yields just the sentinel.
pub fn distinct_neighborhoods(catalog: &Catalog) -> Vec<String> {
    let mut options = Vec::with_capacity(1 + catalog.len());
    options.push(ALL_NEIGHBORHOODS.to_owned());
    options.extend(neighborhood_set(catalog));
    options
}

/// Positions into `catalog.places()` that pass the selection, in original
/// catalog order. [`Selection::All`] returns every position; a neighborhood
/// with no matching place returns an empty vector.
pub fn filtered_indices(catalog: &Catalog, selection: &Selection) -> Vec<usize> {
    catalog
        .places()
        .iter()
        .enumerate()
        .filter(|(_, place)| selection.matches(place))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Coordinate, PlaceId};

    fn place(id: u32, name: &str, neighborhood: &str) -> Place {
        Place {
            id: PlaceId(id),
            name: name.to_owned(),
            neighborhood: neighborhood.to_owned(),
            description: String::new(),
            coord: Coordinate::new(29.4, -98.5),
            image: format!("rest{id}"),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            place(1, "First", "Downtown"),
            place(2, "Second", "Southside"),
            place(3, "Third", "Downtown"),
            place(4, "Fourth", "Alta Vista"),
        ])
        .unwrap()
    }

    #[test]
    fn test_selection_round_trips_through_labels() {
        assert_eq!(Selection::from_label(ALL_NEIGHBORHOODS), Selection::All);
        assert_eq!(
            Selection::from_label("Downtown"),
            Selection::Neighborhood("Downtown".to_owned())
        );
        assert_eq!(Selection::default().label(), ALL_NEIGHBORHOODS);
        assert_eq!(Selection::from_label("Downtown").label(), "Downtown");
        assert!(Selection::default().is_all());
        assert!(!Selection::from_label("Downtown").is_all());
    }

    #[test]
    fn test_distinct_neighborhoods_sorted_with_sentinel_first() {
        let options = distinct_neighborhoods(&sample_catalog());
        assert_eq!(options, ["All Neighborhoods", "Alta Vista", "Downtown", "Southside"]);
    }

    #[test]
    fn test_distinct_neighborhoods_counts_duplicates_once() {
        let catalog = sample_catalog();
        let options = distinct_neighborhoods(&catalog);
        // 3 distinct neighborhoods over 4 places, plus the sentinel.
        assert_eq!(options.len(), neighborhood_set(&catalog).len() + 1);
        let mut deduped = options.clone();
        deduped.dedup();
        assert_eq!(deduped, options);
    }

    #[test]
    fn test_empty_catalog_yields_only_the_sentinel() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(distinct_neighborhoods(&catalog), [ALL_NEIGHBORHOODS]);
        assert!(filtered_indices(&catalog, &Selection::All).is_empty());
    }

    #[test]
    fn test_all_selection_is_the_identity() {
        let catalog = sample_catalog();
        let indices = filtered_indices(&catalog, &Selection::All);
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_keeps_only_matches_in_order() {
        let catalog = sample_catalog();
        let selection = Selection::from_label("Downtown");
        let indices = filtered_indices(&catalog, &selection);
        assert_eq!(indices, [0, 2]);
        for &i in &indices {
            assert_eq!(catalog.places()[i].neighborhood, "Downtown");
        }
    }

    #[test]
    fn test_unknown_neighborhood_yields_empty_not_error() {
        let catalog = sample_catalog();
        let selection = Selection::from_label("Stone Oak");
        assert!(filtered_indices(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_operations_are_idempotent() {
        let catalog = sample_catalog();
        let selection = Selection::from_label("Downtown");

        let first = filtered_indices(&catalog, &selection);
        let second = filtered_indices(&catalog, &selection);
        assert_eq!(first, second);

        let options_a = distinct_neighborhoods(&catalog);
        let options_b = distinct_neighborhoods(&catalog);
        assert_eq!(options_a, options_b);

        // The catalog itself is untouched by either derivation.
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            filtered_indices(&catalog, &Selection::All),
            [0, 1, 2, 3]
        );
    }

    #[test]
    fn test_neighborhood_named_like_the_sentinel_stays_distinct() {
        // A selection carrying the sentinel text as a neighborhood name is
        // still a neighborhood filter, not "show everything".
        let catalog = sample_catalog();
        let odd = Selection::Neighborhood(ALL_NEIGHBORHOODS.to_owned());
        assert!(!odd.is_all());
        assert!(filtered_indices(&catalog, &odd).is_empty());
    }
}
