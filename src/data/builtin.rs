use super::model::{Catalog, CatalogError, Coordinate, Place, PlaceId};

// ---------------------------------------------------------------------------
// The built-in San Antonio catalog
// ---------------------------------------------------------------------------

/// The five restaurants the app ships with. This is the whole data set:
/// there is no loader, no network, and no persistence, so the catalog is
/// authored here and validated once by [`Catalog::new`].
pub fn san_antonio() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        place(
            1,
            "Don Pedro",
            "Southside",
            "This restaurant is a Tex-Mex cuisine which offers all the great \
             Tex Mex foods everyone loves.",
            29.3818,
            -98.5148,
            "rest1",
        ),
        place(
            2,
            "Sofia's Pizzeria.",
            "Potranco",
            "Pizza Company which offers many varieties of Pizza and Sides.",
            29.4194,
            -98.7426,
            "rest2",
        ),
        place(
            3,
            "Black Bear Diner",
            "City Base",
            "Good spot for breakfast and dinner meals",
            29.3421,
            -98.4389,
            "rest3",
        ),
        place(
            4,
            "Golden Wok",
            "Wurzbach",
            "Delicious Chinese cuisine with many of the classic options",
            29.5336,
            -98.5860,
            "rest4",
        ),
        place(
            5,
            "Rosarios Mexican Restaurant",
            "Downtown",
            "Mexican cuisine located on the Riverwalk downtown",
            29.4260,
            -98.4886,
            "rest5",
        ),
    ])
}

fn place(
    id: u32,
    name: &str,
    neighborhood: &str,
    description: &str,
    lat: f64,
    lon: f64,
    image: &str,
) -> Place {
    Place {
        id: PlaceId(id),
        name: name.to_owned(),
        neighborhood: neighborhood.to_owned(),
        description: description.to_owned(),
        coord: Coordinate::new(lat, lon),
        image: image.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{distinct_neighborhoods, filtered_indices, Selection};

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let catalog = san_antonio().unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_builtin_catalog_order_is_authored_order() {
        let catalog = san_antonio().unwrap();
        let names: Vec<&str> = catalog.places().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Don Pedro",
                "Sofia's Pizzeria.",
                "Black Bear Diner",
                "Golden Wok",
                "Rosarios Mexican Restaurant",
            ]
        );
    }

    #[test]
    fn test_builtin_coordinates_are_around_san_antonio() {
        let catalog = san_antonio().unwrap();
        for p in catalog.places() {
            assert!(
                (29.0..=30.0).contains(&p.coord.lat) && (-99.0..=-98.0).contains(&p.coord.lon),
                "{} is not in the San Antonio area: {}",
                p.name,
                p.coord
            );
        }
    }

    #[test]
    fn test_builtin_image_names_are_unique() {
        let catalog = san_antonio().unwrap();
        let mut images: Vec<&str> = catalog.places().iter().map(|p| p.image.as_str()).collect();
        images.sort_unstable();
        images.dedup();
        assert_eq!(images.len(), catalog.len());
    }

    #[test]
    fn test_builtin_neighborhood_dropdown_contents() {
        let catalog = san_antonio().unwrap();
        assert_eq!(
            distinct_neighborhoods(&catalog),
            [
                "All Neighborhoods",
                "City Base",
                "Downtown",
                "Potranco",
                "Southside",
                "Wurzbach",
            ]
        );
    }

    #[test]
    fn test_builtin_downtown_filter_finds_rosarios() {
        let catalog = san_antonio().unwrap();
        let indices = filtered_indices(&catalog, &Selection::from_label("Downtown"));
        let names: Vec<&str> = indices
            .iter()
            .map(|&i| catalog.places()[i].name.as_str())
            .collect();
        assert_eq!(names, ["Rosarios Mexican Restaurant"]);
    }
}
