use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// PlaceId – stable identifier for one catalog entry
// ---------------------------------------------------------------------------

/// Opaque identifier for a [`Place`], unique within a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(pub u32);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Coordinate – WGS-84 latitude / longitude
// ---------------------------------------------------------------------------

/// A WGS-84 coordinate. Valid when latitude is within [-90, 90] and
/// longitude within [-180, 180]; [`Catalog::new`] enforces the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Whether both components are inside their valid range.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

// ---------------------------------------------------------------------------
// Place – one restaurant entry
// ---------------------------------------------------------------------------

/// A single restaurant in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    /// Grouping / filter key. One of a small fixed set of strings.
    pub neighborhood: String,
    pub description: String,
    pub coord: Coordinate,
    /// Opaque asset name (e.g. `"rest3"`); the UI layer resolves it to a
    /// renderable image, and a miss is the UI layer's problem, not ours.
    pub image: String,
}

// ---------------------------------------------------------------------------
// Catalog – the immutable sequence of places
// ---------------------------------------------------------------------------

/// Rejected static data. Construction is the only place these can surface;
/// every operation after a successful [`Catalog::new`] is total.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate place id {id} ({name:?})")]
    DuplicateId { id: PlaceId, name: String },

    #[error("place {id} has an empty name")]
    EmptyName { id: PlaceId },

    #[error("place {name:?} has an empty neighborhood")]
    EmptyNeighborhood { name: String },

    #[error("place {name:?} has out-of-range coordinate {coord}")]
    CoordinateOutOfRange { name: String, coord: Coordinate },
}

/// The fixed, ordered collection of places. Built exactly once at startup;
/// the sequence is never added to, removed from, or mutated afterwards, so
/// everything downstream may borrow it freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Validate and wrap the authored records. An empty catalog is valid.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for place in &places {
            if !seen.insert(place.id) {
                return Err(CatalogError::DuplicateId {
                    id: place.id,
                    name: place.name.clone(),
                });
            }
            if place.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: place.id });
            }
            if place.neighborhood.trim().is_empty() {
                return Err(CatalogError::EmptyNeighborhood {
                    name: place.name.clone(),
                });
            }
            if !place.coord.in_range() {
                return Err(CatalogError::CoordinateOutOfRange {
                    name: place.name.clone(),
                    coord: place.coord,
                });
            }
        }
        Ok(Catalog { places })
    }

    /// All places, in authored order. The same slice every call.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by id.
    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
